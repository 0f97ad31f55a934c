use capture_ledger::cli::Cli;
use capture_ledger::commands::{collect, print_outcome};
use clap::Parser;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let outcome = collect(&cli.collect_options())?;
    print_outcome(&outcome, &cli.format)?;

    Ok(())
}

/// Log to stderr so the run summary on stdout stays clean
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("capture_ledger={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
