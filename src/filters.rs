//! Filter wheel codes as written by the capture software, and what they
//! translate to in the reports.

/// Descriptive names used in the general CSV and the summary template
const FILTER_NAMES: &[(&str, &str)] = &[
    ("L", "Antila 2\" Luminance Filter"),
    ("R", "Antila 2\" Red Filter"),
    ("G", "Antila 2\" Green Filter"),
    ("B", "Antila 2\" Blue Filter"),
    ("Ha", "Astronomik 2\" 6nm Ha Filter"),
    ("O3", "Astronomik 2\" 6nm O3 Filter"),
    ("S2", "Astronomik 2\" 6nm S2 Filter"),
];

/// AstroBin equipment database ids for the acquisition import
const ASTROBIN_IDS: &[(&str, &str)] = &[
    ("L", "53"),
    ("R", "58"),
    ("G", "63"),
    ("B", "58"),
    ("Ha", "403"),
    ("O3", "413"),
    ("S2", "423"),
];

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, value)| *value)
}

/// Descriptive name for a filter code, or the code itself when unknown
pub fn descriptive_name(code: &str) -> &str {
    lookup(FILTER_NAMES, code).unwrap_or(code)
}

/// AstroBin filter id for a filter code, or the code itself when unknown
pub fn astrobin_id(code: &str) -> &str {
    lookup(ASTROBIN_IDS, code).unwrap_or(code)
}

/// Sort filter codes by their descriptive name, ties broken by code
pub fn sort_by_name<'a, I>(codes: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted: Vec<&str> = codes.into_iter().collect();
    sorted.sort_by(|a, b| {
        descriptive_name(a)
            .cmp(descriptive_name(b))
            .then_with(|| a.cmp(b))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptive_name_known_and_fallback() {
        assert_eq!(descriptive_name("L"), "Antila 2\" Luminance Filter");
        assert_eq!(descriptive_name("S2"), "Astronomik 2\" 6nm S2 Filter");
        assert_eq!(descriptive_name("UVIR"), "UVIR");
    }

    #[test]
    fn test_astrobin_id_known_and_fallback() {
        assert_eq!(astrobin_id("L"), "53");
        assert_eq!(astrobin_id("Ha"), "403");
        assert_eq!(astrobin_id("O3"), "413");
        assert_eq!(astrobin_id("Clear"), "Clear");
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(descriptive_name("Ha"), "Astronomik 2\" 6nm Ha Filter");
        assert_eq!(descriptive_name("HA"), "HA");
        assert_eq!(astrobin_id("ha"), "ha");
    }

    #[test]
    fn test_sort_by_descriptive_name() {
        let sorted = sort_by_name(["S2", "B", "Ha", "L", "R"]);
        // Blue sorts among the Antila names, not after S2
        assert_eq!(sorted, vec!["B", "L", "R", "Ha", "S2"]);
    }

    #[test]
    fn test_sort_places_unknown_codes_by_raw_code() {
        let sorted = sort_by_name(["Ha", "Clear", "G"]);
        assert_eq!(sorted, vec!["G", "Ha", "Clear"]);
    }
}
