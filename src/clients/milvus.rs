//! Milvus connection and index tuning configs.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{parse_index_type, Db, DbCaseConfig, DbConfig, IndexType, MetricType, SecretStr};
use crate::{BenchError, BenchResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilvusConfig {
    pub db_label: String,
    pub version: String,
    pub note: String,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing)]
    pub password: SecretStr,
}

/// Graph index. `m` and `ef_construction` shape the build; `ef_search`
/// bounds the candidate queue at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilvusHnswConfig {
    #[serde(default = "hnsw_index")]
    pub index: IndexType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    pub m: u32,
    pub ef_construction: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ef_search: Option<u32>,
}

fn hnsw_index() -> IndexType {
    IndexType::Hnsw
}

impl MilvusHnswConfig {
    pub fn index_param(&self) -> Value {
        json!({
            "metric_type": self.metric_type,
            "index_type": IndexType::Hnsw,
            "params": { "M": self.m, "efConstruction": self.ef_construction },
        })
    }

    pub fn search_param(&self) -> Value {
        json!({
            "metric_type": self.metric_type,
            "params": { "ef": self.ef_search },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilvusIvfFlatConfig {
    #[serde(default = "ivf_flat_index")]
    pub index: IndexType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    pub nlist: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nprobe: Option<u32>,
}

fn ivf_flat_index() -> IndexType {
    IndexType::IvfFlat
}

impl MilvusIvfFlatConfig {
    pub fn index_param(&self) -> Value {
        json!({
            "metric_type": self.metric_type,
            "index_type": IndexType::IvfFlat,
            "params": { "nlist": self.nlist },
        })
    }

    pub fn search_param(&self) -> Value {
        json!({
            "metric_type": self.metric_type,
            "params": { "nprobe": self.nprobe },
        })
    }
}

/// Server-managed index; nothing to tune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilvusAutoIndexConfig {
    #[serde(default = "auto_index")]
    pub index: IndexType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
}

fn auto_index() -> IndexType {
    IndexType::AutoIndex
}

impl MilvusAutoIndexConfig {
    pub fn index_param(&self) -> Value {
        json!({
            "metric_type": self.metric_type,
            "index_type": IndexType::AutoIndex,
            "params": {},
        })
    }

    pub fn search_param(&self) -> Value {
        json!({ "metric_type": self.metric_type, "params": {} })
    }
}

pub(crate) fn decode_db_config(v: Value) -> BenchResult<DbConfig> {
    Ok(DbConfig::Milvus(serde_json::from_value(v)?))
}

pub(crate) fn decode_case_config(index: Option<&str>, v: Value) -> BenchResult<DbCaseConfig> {
    match parse_index_type(Db::Milvus, index)? {
        IndexType::Hnsw => Ok(DbCaseConfig::MilvusHnsw(serde_json::from_value(v)?)),
        IndexType::IvfFlat => Ok(DbCaseConfig::MilvusIvfFlat(serde_json::from_value(v)?)),
        IndexType::AutoIndex => Ok(DbCaseConfig::MilvusAutoIndex(serde_json::from_value(v)?)),
        other => Err(BenchError::ConfigNotFound(format!(
            "Milvus has no {other} case config"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hnsw_index_param_uses_wire_names() {
        let cfg = MilvusHnswConfig {
            index: IndexType::Hnsw,
            metric_type: Some(MetricType::Cosine),
            m: 16,
            ef_construction: 200,
            ef_search: Some(64),
        };
        let param = cfg.index_param();
        assert_eq!(param["index_type"], "HNSW");
        assert_eq!(param["metric_type"], "COSINE");
        assert_eq!(param["params"]["efConstruction"], 200);
        assert_eq!(cfg.search_param()["params"]["ef"], 64);
    }

    #[test]
    fn password_never_serializes() {
        let cfg = MilvusConfig {
            uri: "http://localhost:19530".into(),
            password: SecretStr::new("hunter2"),
            ..Default::default()
        };
        let doc = serde_json::to_string(&cfg).unwrap();
        assert!(!doc.contains("hunter2"));
        assert!(!doc.contains("password"));
    }
}
