//! Per-database configuration types and the decoder registry.
//!
//! Connection and index configs are product-specific, so the on-disk
//! `db_config` / `db_case_config` sections are polymorphic. They serialize
//! untagged; reading them back goes through [`CONFIG_REGISTRY`], which maps
//! the database identifier to the pair of decoders for those sections.

pub mod milvus;
pub mod opengauss;
pub mod pgvector;
pub mod redis;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{BenchError, BenchResult};

pub use milvus::{MilvusAutoIndexConfig, MilvusConfig, MilvusHnswConfig, MilvusIvfFlatConfig};
pub use opengauss::{
    OpenGaussConfig, OpenGaussHnswConfig, OpenGaussHnswPqConfig, OpenGaussIvfFlatConfig,
};
pub use pgvector::{PgVectorConfig, PgVectorHnswConfig, PgVectorIvfFlatConfig};
pub use redis::RedisConfig;

// ────────────────────────────────────────────────────────────────────────────────
// Identifiers
// ────────────────────────────────────────────────────────────────────────────────

/// Supported vector databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Db {
    Milvus,
    PgVector,
    OpenGauss,
    Redis,
}

impl Db {
    pub const ALL: [Db; 4] = [Db::Milvus, Db::PgVector, Db::OpenGauss, Db::Redis];

    pub fn name(&self) -> &'static str {
        match self {
            Db::Milvus => "Milvus",
            Db::PgVector => "PgVector",
            Db::OpenGauss => "OpenGauss",
            Db::Redis => "Redis",
        }
    }
}

impl fmt::Display for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Db {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Db::ALL
            .iter()
            .find(|db| db.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| BenchError::ConfigNotFound(s.to_string()))
    }
}

/// Distance metrics understood by the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricType {
    L2,
    Cosine,
    Ip,
}

/// Index flavors, serialized with their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexType {
    #[serde(rename = "HNSW")]
    Hnsw,
    #[serde(rename = "HNSW_PQ")]
    HnswPq,
    #[serde(rename = "IVF_FLAT")]
    IvfFlat,
    #[serde(rename = "AUTOINDEX")]
    AutoIndex,
}

impl IndexType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexType::Hnsw => "HNSW",
            IndexType::HnswPq => "HNSW_PQ",
            IndexType::IvfFlat => "IVF_FLAT",
            IndexType::AutoIndex => "AUTOINDEX",
        }
    }

    pub fn parse(s: &str) -> Option<IndexType> {
        match s {
            "HNSW" => Some(IndexType::Hnsw),
            "HNSW_PQ" => Some(IndexType::HnswPq),
            "IVF_FLAT" => Some(IndexType::IvfFlat),
            "AUTOINDEX" => Some(IndexType::AutoIndex),
            _ => None,
        }
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────────
// Credentials
// ────────────────────────────────────────────────────────────────────────────────

/// Credential holder for connection configs.
///
/// Deliberately does not implement `Serialize`: a config struct holding one
/// of these must mark the field `skip_serializing`, or its derive fails to
/// compile. Persisted documents therefore never contain the value.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretStr(String);

impl SecretStr {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The plaintext value, for handing to a driver.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretStr(\"******\")")
    }
}

impl From<String> for SecretStr {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretStr {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────────
// Polymorphic config sections
// ────────────────────────────────────────────────────────────────────────────────

/// Connection config of any supported database.
///
/// Untagged: the document carries the inner fields only, and reads resolve
/// the concrete type through the registry rather than a serde tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DbConfig {
    Milvus(MilvusConfig),
    PgVector(PgVectorConfig),
    OpenGauss(OpenGaussConfig),
    Redis(RedisConfig),
}

impl DbConfig {
    pub fn db_label(&self) -> &str {
        match self {
            DbConfig::Milvus(c) => &c.db_label,
            DbConfig::PgVector(c) => &c.db_label,
            DbConfig::OpenGauss(c) => &c.db_label,
            DbConfig::Redis(c) => &c.db_label,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            DbConfig::Milvus(c) => &c.version,
            DbConfig::PgVector(c) => &c.version,
            DbConfig::OpenGauss(c) => &c.version,
            DbConfig::Redis(c) => &c.version,
        }
    }
}

/// Index/case config of any supported database and index flavor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DbCaseConfig {
    MilvusHnsw(MilvusHnswConfig),
    MilvusIvfFlat(MilvusIvfFlatConfig),
    MilvusAutoIndex(MilvusAutoIndexConfig),
    PgVectorHnsw(PgVectorHnswConfig),
    PgVectorIvfFlat(PgVectorIvfFlatConfig),
    OpenGaussHnsw(OpenGaussHnswConfig),
    OpenGaussHnswPq(OpenGaussHnswPqConfig),
    OpenGaussIvfFlat(OpenGaussIvfFlatConfig),
    Empty(EmptyDbCaseConfig),
}

impl DbCaseConfig {
    /// Build-time parameters a driver passes when creating the index.
    pub fn index_param(&self) -> Value {
        match self {
            DbCaseConfig::MilvusHnsw(c) => c.index_param(),
            DbCaseConfig::MilvusIvfFlat(c) => c.index_param(),
            DbCaseConfig::MilvusAutoIndex(c) => c.index_param(),
            DbCaseConfig::PgVectorHnsw(c) => c.index_param(),
            DbCaseConfig::PgVectorIvfFlat(c) => c.index_param(),
            DbCaseConfig::OpenGaussHnsw(c) => c.index_param(),
            DbCaseConfig::OpenGaussHnswPq(c) => c.index_param(),
            DbCaseConfig::OpenGaussIvfFlat(c) => c.index_param(),
            DbCaseConfig::Empty(_) => json!({}),
        }
    }

    /// Query-time parameters a driver passes when searching.
    pub fn search_param(&self) -> Value {
        match self {
            DbCaseConfig::MilvusHnsw(c) => c.search_param(),
            DbCaseConfig::MilvusIvfFlat(c) => c.search_param(),
            DbCaseConfig::MilvusAutoIndex(c) => c.search_param(),
            DbCaseConfig::PgVectorHnsw(c) => c.search_param(),
            DbCaseConfig::PgVectorIvfFlat(c) => c.search_param(),
            DbCaseConfig::OpenGaussHnsw(c) => c.search_param(),
            DbCaseConfig::OpenGaussHnswPq(c) => c.search_param(),
            DbCaseConfig::OpenGaussIvfFlat(c) => c.search_param(),
            DbCaseConfig::Empty(_) => json!({}),
        }
    }
}

/// Case config for databases without index-type variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyDbCaseConfig {}

// ────────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────────

/// Decoders for one database's polymorphic config sections.
#[derive(Debug)]
pub struct RegistryEntry {
    pub db: Db,
    /// Reconstructs `db_config` as the concrete connection-config type.
    pub decode_db_config: fn(Value) -> BenchResult<DbConfig>,
    /// Reconstructs `db_case_config`, discriminated by the `index` field
    /// value (absent for databases without variants).
    pub decode_case_config: fn(Option<&str>, Value) -> BenchResult<DbCaseConfig>,
}

/// Built once, never mutated. The single source of truth for resolving
/// polymorphic config sections during file reads.
pub static CONFIG_REGISTRY: &[RegistryEntry] = &[
    RegistryEntry {
        db: Db::Milvus,
        decode_db_config: milvus::decode_db_config,
        decode_case_config: milvus::decode_case_config,
    },
    RegistryEntry {
        db: Db::PgVector,
        decode_db_config: pgvector::decode_db_config,
        decode_case_config: pgvector::decode_case_config,
    },
    RegistryEntry {
        db: Db::OpenGauss,
        decode_db_config: opengauss::decode_db_config,
        decode_case_config: opengauss::decode_case_config,
    },
    RegistryEntry {
        db: Db::Redis,
        decode_db_config: redis::decode_db_config,
        decode_case_config: redis::decode_case_config,
    },
];

/// Look up the registry entry for a database identifier as it appears in a
/// persisted document.
pub fn lookup(db_name: &str) -> BenchResult<&'static RegistryEntry> {
    CONFIG_REGISTRY
        .iter()
        .find(|entry| entry.db.name() == db_name)
        .ok_or_else(|| BenchError::ConfigNotFound(db_name.to_string()))
}

/// Shared discriminator handling for databases with index-type variants.
pub(crate) fn parse_index_type(db: Db, index: Option<&str>) -> BenchResult<IndexType> {
    let raw = index.ok_or_else(|| {
        BenchError::ConfigNotFound(format!("{db} case config is missing its index type"))
    })?;
    IndexType::parse(raw)
        .ok_or_else(|| BenchError::ConfigNotFound(format!("unknown index type `{raw}` for {db}")))
}
