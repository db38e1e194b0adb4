//! openGauss connection and index tuning configs.
//!
//! Same connection shape as pgvector, plus the HNSW_PQ flavor with
//! product-quantization knobs.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{parse_index_type, Db, DbCaseConfig, DbConfig, IndexType, MetricType, SecretStr};
use crate::{BenchError, BenchResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGaussConfig {
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
pub struct OpenGaussHnswConfig {
    #[serde(default = "hnsw_index")]
    pub index: IndexType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    pub m: u32,
    pub ef_construction: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ef_search: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_work_mem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallel_workers: Option<u32>,
}

fn hnsw_index() -> IndexType {
    IndexType::Hnsw
}

impl OpenGaussHnswConfig {
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

/// HNSW with product quantization on the stored vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGaussHnswPqConfig {
    #[serde(default = "hnsw_pq_index")]
    pub index: IndexType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    pub m: u32,
    pub ef_construction: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ef_search: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pq_m: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pq_ksub: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hnsw_earlystop_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_work_mem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallel_workers: Option<u32>,
}

fn hnsw_pq_index() -> IndexType {
    IndexType::HnswPq
}

impl OpenGaussHnswPqConfig {
    pub fn index_param(&self) -> Value {
        json!({
            "metric_type": self.metric_type,
            "index_type": IndexType::HnswPq,
            "options": {
                "m": self.m,
                "ef_construction": self.ef_construction,
                "pq_m": self.pq_m,
                "pq_ksub": self.pq_ksub,
            },
            "maintenance_work_mem": self.maintenance_work_mem,
            "max_parallel_workers": self.max_parallel_workers,
        })
    }

    pub fn search_param(&self) -> Value {
        json!({
            "metric_type": self.metric_type,
            "ef_search": self.ef_search,
            "hnsw_earlystop_threshold": self.hnsw_earlystop_threshold,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGaussIvfFlatConfig {
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

impl OpenGaussIvfFlatConfig {
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
    Ok(DbConfig::OpenGauss(serde_json::from_value(v)?))
}

pub(crate) fn decode_case_config(index: Option<&str>, v: Value) -> BenchResult<DbCaseConfig> {
    match parse_index_type(Db::OpenGauss, index)? {
        IndexType::Hnsw => Ok(DbCaseConfig::OpenGaussHnsw(serde_json::from_value(v)?)),
        IndexType::HnswPq => Ok(DbCaseConfig::OpenGaussHnswPq(serde_json::from_value(v)?)),
        IndexType::IvfFlat => Ok(DbCaseConfig::OpenGaussIvfFlat(serde_json::from_value(v)?)),
        other => Err(BenchError::ConfigNotFound(format!(
            "OpenGauss has no {other} case config"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hnsw_pq_carries_quantization_knobs() {
        let cfg = OpenGaussHnswPqConfig {
            index: IndexType::HnswPq,
            metric_type: None,
            m: 16,
            ef_construction: 200,
            ef_search: Some(100),
            pq_m: Some(8),
            pq_ksub: Some(256),
            hnsw_earlystop_threshold: Some(320),
            maintenance_work_mem: None,
            max_parallel_workers: None,
        };
        let doc = serde_json::to_value(&cfg).unwrap();
        assert_eq!(doc["index"], "HNSW_PQ");

        let index = doc["index"].as_str().map(|s| s.to_string());
        let back = decode_case_config(index.as_deref(), doc).unwrap();
        assert_eq!(back, DbCaseConfig::OpenGaussHnswPq(cfg.clone()));
        assert_eq!(cfg.index_param()["options"]["pq_ksub"], 256);
    }
}
