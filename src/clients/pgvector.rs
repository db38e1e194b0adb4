//! pgvector connection and index tuning configs.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{parse_index_type, Db, DbCaseConfig, DbConfig, IndexType, MetricType, SecretStr};
use crate::{BenchError, BenchResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PgVectorConfig {
    pub db_label: String,
    pub version: String,
    pub note: String,
    pub host: String,
    pub port: u16,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub password: SecretStr,
    pub db_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgVectorHnswConfig {
    #[serde(default = "hnsw_index")]
    pub index: IndexType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    pub m: u32,
    pub ef_construction: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ef_search: Option<u32>,
    /// Memory granted to index builds, e.g. `8GB`. Also raises the
    /// parallel-worker settings on the driver side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_work_mem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallel_workers: Option<u32>,
}

fn hnsw_index() -> IndexType {
    IndexType::Hnsw
}

impl PgVectorHnswConfig {
    pub fn index_param(&self) -> Value {
        json!({
            "metric_type": self.metric_type,
            "index_type": IndexType::Hnsw,
            "options": { "m": self.m, "ef_construction": self.ef_construction },
            "maintenance_work_mem": self.maintenance_work_mem,
            "max_parallel_workers": self.max_parallel_workers,
        })
    }

    pub fn search_param(&self) -> Value {
        json!({ "metric_type": self.metric_type, "ef_search": self.ef_search })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgVectorIvfFlatConfig {
    #[serde(default = "ivf_flat_index")]
    pub index: IndexType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    pub lists: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probes: Option<u32>,
}

fn ivf_flat_index() -> IndexType {
    IndexType::IvfFlat
}

impl PgVectorIvfFlatConfig {
    pub fn index_param(&self) -> Value {
        json!({
            "metric_type": self.metric_type,
            "index_type": IndexType::IvfFlat,
            "options": { "lists": self.lists },
        })
    }

    pub fn search_param(&self) -> Value {
        json!({ "metric_type": self.metric_type, "probes": self.probes })
    }
}

pub(crate) fn decode_db_config(v: Value) -> BenchResult<DbConfig> {
    Ok(DbConfig::PgVector(serde_json::from_value(v)?))
}

pub(crate) fn decode_case_config(index: Option<&str>, v: Value) -> BenchResult<DbCaseConfig> {
    match parse_index_type(Db::PgVector, index)? {
        IndexType::Hnsw => Ok(DbCaseConfig::PgVectorHnsw(serde_json::from_value(v)?)),
        IndexType::IvfFlat => Ok(DbCaseConfig::PgVectorIvfFlat(serde_json::from_value(v)?)),
        other => Err(BenchError::ConfigNotFound(format!(
            "PgVector has no {other} case config"
        ))),
    }
}
