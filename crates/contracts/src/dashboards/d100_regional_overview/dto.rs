use serde::{Deserialize, Serialize};

/// Selection event supplied by the UI controls (year slider + region dropdown)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionYearSelection {
    pub year: i32,
    pub region: String,
}

impl RegionYearSelection {
    pub fn new(year: i32, region: impl Into<String>) -> Self {
        Self {
            year,
            region: region.into(),
        }
    }
}

/// Value domains for the dashboard controls, derived from the loaded dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardControls {
    /// Distinct order years, ascending (slider marks)
    pub years: Vec<i32>,
    /// Distinct regions in dataset order (dropdown options)
    pub regions: Vec<String>,
}
