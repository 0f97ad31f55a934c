pub mod collect;

pub use collect::{collect, print_outcome, CollectOptions, CollectOutcome};
