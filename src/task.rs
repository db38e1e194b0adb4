//! The task model: benchmark cases, stages, and the full per-database
//! task description handed to the execution layer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{Db, DbCaseConfig, DbConfig};
use crate::config;
use crate::BenchError;

/// Built-in benchmark cases (dataset + query workload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseType {
    CapacityDim128,
    CapacityDim960,
    Performance768D100M,
    Performance768D10M,
    Performance768D1M,
    Performance1536D500K,
    Performance1536D5M,
    Custom,
}

impl CaseType {
    pub const ALL: [CaseType; 8] = [
        CaseType::CapacityDim128,
        CaseType::CapacityDim960,
        CaseType::Performance768D100M,
        CaseType::Performance768D10M,
        CaseType::Performance768D1M,
        CaseType::Performance1536D500K,
        CaseType::Performance1536D5M,
        CaseType::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CaseType::CapacityDim128 => "CapacityDim128",
            CaseType::CapacityDim960 => "CapacityDim960",
            CaseType::Performance768D100M => "Performance768D100M",
            CaseType::Performance768D10M => "Performance768D10M",
            CaseType::Performance768D1M => "Performance768D1M",
            CaseType::Performance1536D500K => "Performance1536D500K",
            CaseType::Performance1536D5M => "Performance1536D5M",
            CaseType::Custom => "Custom",
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseType {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseType::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| BenchError::Validation(format!("unknown case `{s}`")))
    }
}

/// Concurrency sweep parameters for the concurrent-search stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcurrencySearchConfig {
    pub num_concurrency: Vec<u32>,
    pub concurrency_duration: u32,
}

impl Default for ConcurrencySearchConfig {
    fn default() -> Self {
        Self {
            num_concurrency: config::NUM_CONCURRENCY.to_vec(),
            concurrency_duration: config::CONCURRENCY_DURATION,
        }
    }
}

/// Identifies one benchmark case: dataset, query workload, and sweep
/// parameters. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseConfig {
    pub case_id: CaseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_case: Option<Value>,
    #[serde(default = "default_k")]
    pub k: u32,
    #[serde(default)]
    pub concurrency_search_config: ConcurrencySearchConfig,
}

fn default_k() -> u32 {
    config::K_DEFAULT
}

impl CaseConfig {
    /// Canonical serialized form. Struct serialization is declaration-
    /// ordered, so identical content always yields identical strings.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).expect("case config serializes")
    }
}

// Equality and hashing go through the canonical form: two case configs
// are the same case iff their serialized content matches.
impl PartialEq for CaseConfig {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_json() == other.canonical_json()
    }
}

impl Eq for CaseConfig {}

impl Hash for CaseConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_json().hash(state);
    }
}

/// Stages of one task, executed in the order listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStage {
    DropOld,
    Load,
    SearchSerial,
    SearchConcurrent,
}

/// Default stage order: everything.
pub const ALL_TASK_STAGES: [TaskStage; 4] = [
    TaskStage::DropOld,
    TaskStage::Load,
    TaskStage::SearchSerial,
    TaskStage::SearchConcurrent,
];

/// The full specification of one benchmark run against one database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskConfig {
    pub db: Db,
    pub db_config: DbConfig,
    pub db_case_config: DbCaseConfig,
    pub case_config: CaseConfig,
    pub stages: Vec<TaskStage>,
}

impl TaskConfig {
    /// `<db>[-<label>][-<version>]`, the name rows carry in reports.
    pub fn db_name(&self) -> String {
        let mut name = self.db.name().to_string();
        let label = self.db_config.db_label();
        if !label.is_empty() {
            name.push('-');
            name.push_str(label);
        }
        let version = self.db_config.version();
        if !version.is_empty() {
            name.push('-');
            name.push_str(version);
        }
        name
    }
}

/// How one task ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultLabel {
    #[default]
    #[serde(rename = ":)")]
    Normal,
    #[serde(rename = "x")]
    Failed,
    #[serde(rename = "?")]
    OutOfRange,
}

impl ResultLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultLabel::Normal => ":)",
            ResultLabel::Failed => "x",
            ResultLabel::OutOfRange => "?",
        }
    }
}
