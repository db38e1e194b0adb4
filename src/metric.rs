//! Measured outcomes for one executed task.

use serde::{Deserialize, Serialize};

/// Flat record of everything the execution layer measured for one task.
///
/// Produced outside this crate and treated as opaque, except for the
/// legacy unit fixes applied by [`crate::TestResult::read_file`]. Zero
/// and negative values mean "not measured"; serde defaults let old files
/// with missing fields read back cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    /// Rows loaded before the capacity case hit its limit.
    pub max_load_count: f64,
    /// Seconds spent inserting and optimizing the dataset.
    pub load_duration: f64,
    pub qps: f64,
    pub serial_latency_p99: f64,
    pub recall: f64,
    pub ndcg: f64,

    /// Concurrency levels actually swept, with per-level outcomes below.
    pub conc_num_list: Vec<u32>,
    pub conc_qps_list: Vec<f64>,
    pub conc_latency_p99_list: Vec<f64>,
    pub conc_latency_avg_list: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_read_back_as_defaults() {
        let m: Metric = serde_json::from_str(r#"{"qps": 1250.5}"#).unwrap();
        assert_eq!(m.qps, 1250.5);
        assert_eq!(m.max_load_count, 0.0);
        assert!(m.conc_num_list.is_empty());
    }
}
