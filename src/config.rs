//! Process-wide defaults for task assembly and result placement.

use std::env;
use std::path::PathBuf;

/// Default top-k for search cases.
pub const K_DEFAULT: u32 = 100;

/// Seconds spent at each concurrency level during concurrent search.
pub const CONCURRENCY_DURATION: u32 = 30;

/// Default concurrency sweep for concurrent-search stages.
pub const NUM_CONCURRENCY: &[u32] = &[1, 5, 10, 15, 20, 25, 30, 35];

/// Root directory for persisted result files.
///
/// Overridable with `RESULTS_LOCAL_DIR`; defaults to `results/` under the
/// working directory.
pub fn results_local_dir() -> PathBuf {
    env::var_os("RESULTS_LOCAL_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("results"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_results_dir_is_relative() {
        if env::var_os("RESULTS_LOCAL_DIR").is_none() {
            assert_eq!(results_local_dir(), PathBuf::from("results"));
        }
    }
}
