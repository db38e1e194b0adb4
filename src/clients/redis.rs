//! Redis connection config. Index tuning is server-side, so the case
//! config is empty and the discriminator is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DbCaseConfig, DbConfig, SecretStr};
use crate::BenchResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub db_label: String,
    pub version: String,
    pub note: String,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing)]
    pub password: SecretStr,
}

pub(crate) fn decode_db_config(v: Value) -> BenchResult<DbConfig> {
    Ok(DbConfig::Redis(serde_json::from_value(v)?))
}

pub(crate) fn decode_case_config(_index: Option<&str>, v: Value) -> BenchResult<DbCaseConfig> {
    Ok(DbCaseConfig::Empty(serde_json::from_value(v)?))
}
