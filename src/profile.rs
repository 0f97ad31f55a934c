/// Static parts of the posting template: site, equipment and calibration habits
#[derive(Debug, Clone)]
pub struct ReportProfile {
    pub sky: String,
    /// Equipment table rows, three cells each
    pub equipment: Vec<[String; 3]>,
    pub flats_per_filter: usize,
    pub darks_per_exposure: usize,
    pub bias_count: usize,
    pub camera_notes: Vec<String>,
    pub processing_notes: Vec<String>,
}

impl Default for ReportProfile {
    fn default() -> Self {
        let row = |a: &str, b: &str, c: &str| [a.to_string(), b.to_string(), c.to_string()];

        ReportProfile {
            sky: "Bortle 6 Sky (east SF Bay area)".to_string(),
            equipment: vec![
                row(
                    "Celestron EdgeHD 8\"",
                    "Celestron .7x Reducer",
                    "ZWO ASI2600MM Pro",
                ),
                row("SkyWatcher EQ6-Ri Pro", "Celestron OAG", "ZWO ASI174MM-Mini"),
                row("ZWO EAF", "ZWO 7x2\" EFW", "NINA/PHD2/GS"),
            ],
            flats_per_filter: 20,
            darks_per_exposure: 20,
            bias_count: 200,
            camera_notes: vec![
                "100 gain".to_string(),
                "Cooled to 14F".to_string(),
                "Bin2".to_string(),
            ],
            processing_notes: vec![
                "Pre-Processed, Stacked, and Processed in PixInsight (not in any particular order)"
                    .to_string(),
                "Final Processing in Photoshop".to_string(),
            ],
        }
    }
}
