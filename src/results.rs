//! Result aggregation, persistence, and comparison reporting.
//!
//! A harness run accumulates [`CaseResult`]s into one [`TestResult`].
//! `flush` splits the results by database and writes one JSON file per
//! database under the results root; `read_file` reconstructs a
//! `TestResult` from such a file, resolving the polymorphic config
//! sections through the client registry; `display` renders the sorted
//! comparison table into the log.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveTime};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::clients::{self, Db};
use crate::config;
use crate::metric::Metric;
use crate::task::{CaseConfig, ResultLabel, TaskConfig, TaskStage, ALL_TASK_STAGES};
use crate::{BenchError, BenchResult};

/// Outcome of executing one task: the task, its measurements, and how it
/// ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    pub metrics: Metric,
    pub task_config: TaskConfig,
    pub label: ResultLabel,
}

/// All results of one benchmark invocation.
///
/// `results` may span several databases in memory; on disk every file
/// holds exactly one database's share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub run_id: String,
    pub task_label: String,
    pub results: Vec<CaseResult>,
    pub timestamp: f64,
}

impl TestResult {
    /// Write one file per database under the configured results root.
    pub fn flush(&self) -> BenchResult<Vec<PathBuf>> {
        self.flush_to(&config::results_local_dir())
    }

    /// Write one file per database under `results_root`, returning the
    /// written paths. Existing files are overwritten with a warning.
    pub fn flush_to(&self, results_root: &Path) -> BenchResult<Vec<PathBuf>> {
        let today = Local::now().date_naive();
        // Midnight of the flush day, shared by every partition of this call.
        let timestamp = today
            .and_time(NaiveTime::MIN)
            .and_local_timezone(Local)
            .earliest()
            .map(|dt| dt.timestamp() as f64)
            .unwrap_or_default();
        let date_tag = today.format("%Y%m%d").to_string();

        let mut written = Vec::new();
        for (db, results) in self.partition_by_db() {
            let partial = TestResult {
                run_id: self.run_id.clone(),
                task_label: self.task_label.clone(),
                results,
                timestamp,
            };
            written.push(write_db_file(results_root, &partial, db, &date_tag)?);
        }
        Ok(written)
    }

    /// Group results by database, keeping first-seen database order and
    /// relative order within each group.
    fn partition_by_db(&self) -> Vec<(Db, Vec<CaseResult>)> {
        let mut order: Vec<Db> = Vec::new();
        let mut by_db: HashMap<Db, Vec<CaseResult>> = HashMap::new();
        for res in &self.results {
            let db = res.task_config.db;
            if !by_db.contains_key(&db) {
                order.push(db);
            }
            by_db.entry(db).or_default().push(res.clone());
        }
        order
            .into_iter()
            .map(|db| {
                let results = by_db.remove(&db).unwrap_or_default();
                (db, results)
            })
            .collect()
    }

    /// Reconstruct a `TestResult` from a persisted file.
    ///
    /// The parse runs in two passes: a generic tree first, because the
    /// concrete config types depend on data inside the file, then a typed
    /// decode of each section once the registry has resolved them. With
    /// `trans_unit`, the legacy unit fixes are applied to each metric.
    pub fn read_file(full_path: &Path, trans_unit: bool) -> BenchResult<TestResult> {
        if !full_path.exists() {
            return Err(BenchError::FileNotFound(full_path.to_path_buf()));
        }
        let raw = fs::read_to_string(full_path)?;
        let mut doc: Value = serde_json::from_str(&raw)?;

        let run_id = required_str(&doc, "run_id")?.to_string();
        let task_label = match doc.get("task_label").and_then(Value::as_str) {
            Some(label) => label.to_string(),
            // Files from before task_label existed fall back to the run id.
            None => run_id.clone(),
        };
        let timestamp = doc.get("timestamp").and_then(Value::as_f64).unwrap_or(0.0);

        let raw_results = match doc.get_mut("results").and_then(Value::as_array_mut) {
            Some(items) => std::mem::take(items),
            None => return Err(BenchError::Validation("`results` must be a list".into())),
        };

        let mut results = Vec::with_capacity(raw_results.len());
        for mut item in raw_results {
            results.push(read_case_result(&mut item, trans_unit)?);
        }

        Ok(TestResult {
            run_id,
            task_label,
            results,
            timestamp,
        })
    }

    /// Emit the comparison table to the log. `dbs` lists databases to
    /// leave out; rows whose database is not in the list are kept.
    pub fn display(&self, dbs: Option<&[Db]>) {
        for line in self.render(dbs) {
            info!("{line}");
        }
    }

    /// Render the comparison table: a summary line, a title row, a
    /// separator, and one row per result, sorted descending by
    /// (database, db label, case).
    pub fn render(&self, dbs: Option<&[Db]>) -> Vec<String> {
        let mut sorted: Vec<&CaseResult> = self.results.iter().collect();
        sorted.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));

        let rows: Vec<Row> = sorted
            .into_iter()
            .filter(|r| dbs.map_or(true, |exclude| !exclude.contains(&r.task_config.db)))
            .map(|r| Row::new(r, &self.task_label))
            .collect();
        let widths = ColumnWidths::compute(&rows, &self.task_label);

        let mut lines = Vec::with_capacity(rows.len() + 3);
        lines.push(format!(
            "Task summary: run_id={}, task_label={}",
            self.run_id.get(..5).unwrap_or(&self.run_id),
            self.task_label
        ));
        lines.push(widths.format([
            "DB",
            "db_label",
            "case",
            "label",
            "load_dur",
            "qps",
            "latency(p99)",
            "recall",
            "max_load_count",
            "label",
        ]));
        lines.push(widths.separator());
        for row in &rows {
            lines.push(widths.format(row.cells()));
        }
        lines
    }
}

fn write_db_file(
    results_root: &Path,
    partial: &TestResult,
    db: Db,
    date_tag: &str,
) -> BenchResult<PathBuf> {
    let db_dir = results_root.join(db.name().to_lowercase());
    if !db_dir.exists() {
        info!(
            "result directory does not exist, creating it: {}",
            db_dir.display()
        );
        fs::create_dir_all(&db_dir)?;
    }

    let file_name = format!(
        "result_{}_{}_{}.json",
        date_tag,
        partial.task_label,
        db.name().to_lowercase()
    );
    let result_file = db_dir.join(file_name);
    if result_file.exists() {
        warn!(
            "replacing existing result file: {}",
            result_file.display()
        );
    }

    info!("writing results to {}", result_file.display());
    fs::write(&result_file, serde_json::to_string_pretty(partial)?)?;
    Ok(result_file)
}

fn read_case_result(item: &mut Value, trans_unit: bool) -> BenchResult<CaseResult> {
    let task = item
        .get_mut("task_config")
        .ok_or_else(|| BenchError::Validation("case result is missing `task_config`".into()))?;

    let db_name = required_str(task, "db")?.to_string();
    let entry = clients::lookup(&db_name)?;

    let db_config_raw = take_field(task, "db_config")?;
    let case_raw = take_field(task, "db_case_config")?;
    // The discriminator rides inside the case config itself.
    let index_type = case_raw
        .get("index")
        .and_then(Value::as_str)
        .map(str::to_string);
    let db_config = (entry.decode_db_config)(db_config_raw)?;
    let db_case_config = (entry.decode_case_config)(index_type.as_deref(), case_raw)?;

    let case_config: CaseConfig = serde_json::from_value(take_field(task, "case_config")?)?;
    let stages: Vec<TaskStage> = match task.get_mut("stages") {
        Some(v) => serde_json::from_value(v.take())?,
        None => ALL_TASK_STAGES.to_vec(),
    };

    let mut metrics: Metric = serde_json::from_value(take_field(item, "metrics")?)?;
    if trans_unit {
        // Count-unit and seconds→milliseconds fixes for files written
        // before the migration. Non-positive values are unset sentinels
        // and pass through unchanged.
        if metrics.max_load_count > 0.0 {
            metrics.max_load_count /= 1000.0;
        }
        if metrics.serial_latency_p99 > 0.0 {
            metrics.serial_latency_p99 *= 1000.0;
        }
    }

    let label: ResultLabel = match item.get_mut("label") {
        Some(v) => serde_json::from_value(v.take())?,
        None => ResultLabel::default(),
    };

    Ok(CaseResult {
        metrics,
        task_config: TaskConfig {
            db: entry.db,
            db_config,
            db_case_config,
            case_config,
            stages,
        },
        label,
    })
}

fn required_str<'a>(v: &'a Value, key: &str) -> BenchResult<&'a str> {
    v.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| BenchError::Validation(format!("`{key}` must be a string")))
}

fn take_field(v: &mut Value, key: &str) -> BenchResult<Value> {
    v.get_mut(key)
        .map(Value::take)
        .ok_or_else(|| BenchError::Validation(format!("missing `{key}`")))
}

fn sort_key<'a>(r: &'a CaseResult) -> (&'static str, &'a str, &'static str) {
    (
        r.task_config.db.name(),
        r.task_config.db_config.db_label(),
        r.task_config.case_config.case_id.name(),
    )
}

/// One rendered table row, pre-formatted so width computation and output
/// see the same strings.
struct Row {
    db: String,
    db_label: String,
    case: String,
    task_label: String,
    load_dur: String,
    qps: String,
    latency_p99: String,
    recall: String,
    max_load_count: String,
    label: String,
}

impl Row {
    fn new(r: &CaseResult, task_label: &str) -> Self {
        Self {
            db: r.task_config.db.name().to_string(),
            db_label: r.task_config.db_config.db_label().to_string(),
            case: r.task_config.case_config.case_id.name().to_string(),
            task_label: task_label.to_string(),
            load_dur: r.metrics.load_duration.to_string(),
            qps: r.metrics.qps.to_string(),
            latency_p99: r.metrics.serial_latency_p99.to_string(),
            recall: r.metrics.recall.to_string(),
            max_load_count: r.metrics.max_load_count.to_string(),
            label: r.label.as_str().to_string(),
        }
    }

    fn cells(&self) -> [&str; 10] {
        [
            &self.db,
            &self.db_label,
            &self.case,
            &self.task_label,
            &self.load_dur,
            &self.qps,
            &self.latency_p99,
            &self.recall,
            &self.max_load_count,
            &self.label,
        ]
    }
}

fn max_len<'a, F>(rows: &'a [Row], get: F) -> usize
where
    F: Fn(&'a Row) -> &'a String,
{
    rows.iter().map(|r| get(r).len()).max().unwrap_or(0)
}

/// Per-column widths for the comparison table: the widest value per
/// column plus padding, with floor widths so sparse data stays legible.
/// An empty row set falls back to the floors instead of folding over
/// nothing.
struct ColumnWidths {
    db: usize,
    db_label: usize,
    case: usize,
    task_label: usize,
    load_dur: usize,
    qps: usize,
    latency: usize,
    recall: usize,
    max_load_count: usize,
    label: usize,
}

impl ColumnWidths {
    const PAD: usize = 3;
    const MIN_DB_LABEL: usize = 8;
    const MIN_LOAD_DUR: usize = 11;
    const MIN_QPS: usize = 10;
    const MIN_RECALL: usize = 13;

    fn compute(rows: &[Row], task_label: &str) -> Self {
        Self {
            db: max_len(rows, |r| &r.db),
            db_label: (max_len(rows, |r| &r.db_label) + Self::PAD).max(Self::MIN_DB_LABEL),
            case: max_len(rows, |r| &r.case),
            task_label: task_label.len(),
            load_dur: (max_len(rows, |r| &r.load_dur) + Self::PAD).max(Self::MIN_LOAD_DUR),
            qps: (max_len(rows, |r| &r.qps) + Self::PAD).max(Self::MIN_QPS),
            latency: 15,
            recall: (max_len(rows, |r| &r.recall) + Self::PAD).max(Self::MIN_RECALL),
            max_load_count: 14,
            label: 5,
        }
    }

    fn format(&self, cells: [&str; 10]) -> String {
        format!(
            "{:<w0$} | {:<w1$} {:<w2$} {:<w3$} | {:<w4$} {:<w5$} {:<w6$} {:<w7$} {:<w8$} | {:<w9$}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            cells[4],
            cells[5],
            cells[6],
            cells[7],
            cells[8],
            cells[9],
            w0 = self.db,
            w1 = self.db_label,
            w2 = self.case,
            w3 = self.task_label,
            w4 = self.load_dur,
            w5 = self.qps,
            w6 = self.latency,
            w7 = self.recall,
            w8 = self.max_load_count,
            w9 = self.label,
        )
    }

    fn separator(&self) -> String {
        let widths: [usize; 10] = [
            self.db,
            self.db_label,
            self.case,
            self.task_label,
            self.load_dur,
            self.qps,
            self.latency,
            self.recall,
            self.max_load_count,
            self.label,
        ];
        let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.format(std::array::from_fn(|i| dashes[i].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{
        DbCaseConfig, DbConfig, IndexType, MilvusConfig, MilvusHnswConfig, OpenGaussConfig,
        OpenGaussIvfFlatConfig, PgVectorConfig, PgVectorHnswConfig, SecretStr,
    };
    use crate::task::CaseType;
    use serde_json::json;
    use tempfile::TempDir;

    fn case_config(case_id: CaseType) -> CaseConfig {
        CaseConfig {
            case_id,
            custom_case: None,
            k: 100,
            concurrency_search_config: Default::default(),
        }
    }

    fn milvus_result(db_label: &str, case_id: CaseType, qps: f64) -> CaseResult {
        CaseResult {
            metrics: Metric {
                qps,
                load_duration: 1952.0,
                serial_latency_p99: 2.3,
                recall: 0.982,
                max_load_count: 0.0,
                ..Default::default()
            },
            task_config: TaskConfig {
                db: Db::Milvus,
                db_config: DbConfig::Milvus(MilvusConfig {
                    db_label: db_label.into(),
                    uri: "http://localhost:19530".into(),
                    password: SecretStr::new("hunter2"),
                    ..Default::default()
                }),
                db_case_config: DbCaseConfig::MilvusHnsw(MilvusHnswConfig {
                    index: IndexType::Hnsw,
                    metric_type: None,
                    m: 16,
                    ef_construction: 200,
                    ef_search: Some(64),
                }),
                case_config: case_config(case_id),
                stages: ALL_TASK_STAGES.to_vec(),
            },
            label: ResultLabel::Normal,
        }
    }

    fn pgvector_result() -> CaseResult {
        CaseResult {
            metrics: Metric {
                qps: 311.5,
                load_duration: 4807.0,
                serial_latency_p99: 9.1,
                recall: 0.941,
                ..Default::default()
            },
            task_config: TaskConfig {
                db: Db::PgVector,
                db_config: DbConfig::PgVector(PgVectorConfig {
                    db_label: "2c8g".into(),
                    host: "localhost".into(),
                    port: 5432,
                    user_name: "postgres".into(),
                    password: SecretStr::new("pgpass"),
                    db_name: "vectordb".into(),
                    ..Default::default()
                }),
                db_case_config: DbCaseConfig::PgVectorHnsw(PgVectorHnswConfig {
                    index: IndexType::Hnsw,
                    metric_type: None,
                    m: 24,
                    ef_construction: 128,
                    ef_search: Some(40),
                    maintenance_work_mem: Some("8GB".into()),
                    max_parallel_workers: Some(7),
                }),
                case_config: case_config(CaseType::Performance768D1M),
                stages: ALL_TASK_STAGES.to_vec(),
            },
            label: ResultLabel::Failed,
        }
    }

    fn opengauss_result() -> CaseResult {
        CaseResult {
            metrics: Metric {
                qps: 512.0,
                recall: 0.905,
                ..Default::default()
            },
            task_config: TaskConfig {
                db: Db::OpenGauss,
                db_config: DbConfig::OpenGauss(OpenGaussConfig {
                    host: "localhost".into(),
                    port: 5432,
                    user_name: "gauss".into(),
                    password: SecretStr::new("gausspw"),
                    db_name: "vectordb".into(),
                    ..Default::default()
                }),
                db_case_config: DbCaseConfig::OpenGaussIvfFlat(OpenGaussIvfFlatConfig {
                    index: IndexType::IvfFlat,
                    metric_type: None,
                    lists: 1000,
                    probes: Some(16),
                }),
                case_config: case_config(CaseType::Performance1536D500K),
                stages: ALL_TASK_STAGES.to_vec(),
            },
            label: ResultLabel::OutOfRange,
        }
    }

    fn scrub_password(mut r: CaseResult) -> CaseResult {
        match &mut r.task_config.db_config {
            DbConfig::Milvus(c) => c.password = SecretStr::default(),
            DbConfig::PgVector(c) => c.password = SecretStr::default(),
            DbConfig::OpenGauss(c) => c.password = SecretStr::default(),
            DbConfig::Redis(c) => c.password = SecretStr::default(),
        }
        r
    }

    #[test]
    fn flush_partitions_one_file_per_db() {
        let tmp = TempDir::new().unwrap();
        let result = TestResult {
            run_id: "8bb68e8d62c04f4fb4e9a7a0a54b0bcf".into(),
            task_label: "standard".into(),
            results: vec![
                milvus_result("16c64g", CaseType::Performance768D1M, 1801.0),
                pgvector_result(),
                milvus_result("16c64g", CaseType::Performance1536D500K, 922.0),
            ],
            timestamp: 0.0,
        };

        let written = result.flush_to(tmp.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].starts_with(tmp.path().join("milvus")));
        assert!(written[1].starts_with(tmp.path().join("pgvector")));

        // The union of the per-db files is the original result set.
        let milvus = TestResult::read_file(&written[0], false).unwrap();
        let pg = TestResult::read_file(&written[1], false).unwrap();
        assert_eq!(milvus.results.len(), 2);
        assert_eq!(pg.results.len(), 1);
        assert_eq!(
            milvus.results.len() + pg.results.len(),
            result.results.len()
        );
    }

    #[test]
    fn flush_then_read_round_trips_except_credentials() {
        let tmp = TempDir::new().unwrap();
        let result = TestResult {
            run_id: "run-42".into(),
            task_label: "nightly".into(),
            results: vec![
                milvus_result("16c64g", CaseType::Performance768D1M, 1801.0),
                opengauss_result(),
            ],
            timestamp: 0.0,
        };

        for path in result.flush_to(tmp.path()).unwrap() {
            let reloaded = TestResult::read_file(&path, false).unwrap();
            assert_eq!(reloaded.run_id, result.run_id);
            assert_eq!(reloaded.task_label, result.task_label);
            assert!(reloaded.timestamp > 0.0);

            let db = reloaded.results[0].task_config.db;
            let expected: Vec<CaseResult> = result
                .results
                .iter()
                .filter(|r| r.task_config.db == db)
                .cloned()
                .map(scrub_password)
                .collect();
            assert_eq!(reloaded.results, expected);
        }
    }

    #[test]
    fn written_files_never_contain_credentials() {
        let tmp = TempDir::new().unwrap();
        let result = TestResult {
            run_id: "run-7".into(),
            task_label: "secrets".into(),
            results: vec![
                milvus_result("", CaseType::Performance768D1M, 100.0),
                pgvector_result(),
                opengauss_result(),
            ],
            timestamp: 0.0,
        };

        for path in result.flush_to(tmp.path()).unwrap() {
            let body = fs::read_to_string(&path).unwrap();
            assert!(!body.contains("hunter2"));
            assert!(!body.contains("pgpass"));
            assert!(!body.contains("gausspw"));
            assert!(!body.contains("\"password\""));
        }
    }

    #[test]
    fn overwriting_an_existing_file_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = TestResult {
            run_id: "run-9".into(),
            task_label: "rerun".into(),
            results: vec![milvus_result("", CaseType::Performance768D1M, 5.0)],
            timestamp: 0.0,
        };
        let first = result.flush_to(tmp.path()).unwrap();
        let second = result.flush_to(tmp.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn read_missing_file_fails() {
        let err = TestResult::read_file(Path::new("/nonexistent/result.json"), false).unwrap_err();
        assert!(matches!(err, BenchError::FileNotFound(_)));
    }

    #[test]
    fn read_defaults_task_label_to_run_id() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("old.json");
        let doc = json!({
            "run_id": "abc123",
            "results": [],
        });
        fs::write(&path, doc.to_string()).unwrap();

        let result = TestResult::read_file(&path, false).unwrap();
        assert_eq!(result.task_label, "abc123");
        assert_eq!(result.timestamp, 0.0);
    }

    #[test]
    fn trans_unit_applies_one_way_legacy_fixes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("legacy.json");
        let mk = |max_load_count: f64, latency: f64| {
            json!({
                "metrics": {
                    "max_load_count": max_load_count,
                    "serial_latency_p99": latency,
                },
                "task_config": {
                    "db": "Redis",
                    "db_config": {"host": "localhost", "port": 6379},
                    "db_case_config": {},
                    "case_config": {"case_id": "CapacityDim128"},
                },
                "label": ":)",
            })
        };
        let doc = json!({
            "run_id": "legacy-run",
            "task_label": "legacy",
            "results": [mk(5000.0, 0.002), mk(0.0, -1.0)],
        });
        fs::write(&path, doc.to_string()).unwrap();

        let converted = TestResult::read_file(&path, true).unwrap();
        assert_eq!(converted.results[0].metrics.max_load_count, 5.0);
        assert_eq!(converted.results[0].metrics.serial_latency_p99, 2.0);
        assert_eq!(converted.results[1].metrics.max_load_count, 0.0);
        assert_eq!(converted.results[1].metrics.serial_latency_p99, -1.0);

        let untouched = TestResult::read_file(&path, false).unwrap();
        assert_eq!(untouched.results[0].metrics.max_load_count, 5000.0);
        assert_eq!(untouched.results[0].metrics.serial_latency_p99, 0.002);
    }

    #[test]
    fn read_unknown_db_fails_with_config_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("unknown.json");
        let doc = json!({
            "run_id": "r",
            "results": [{
                "metrics": {},
                "task_config": {
                    "db": "Chroma",
                    "db_config": {},
                    "db_case_config": {},
                    "case_config": {"case_id": "Custom"},
                },
            }],
        });
        fs::write(&path, doc.to_string()).unwrap();

        let err = TestResult::read_file(&path, false).unwrap_err();
        assert!(matches!(err, BenchError::ConfigNotFound(name) if name == "Chroma"));
    }

    #[test]
    fn read_mistyped_document_fails_validation() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        let doc = json!({
            "run_id": "r",
            "results": [{
                "metrics": {"qps": "not-a-number"},
                "task_config": {
                    "db": "Redis",
                    "db_config": {},
                    "db_case_config": {},
                    "case_config": {"case_id": "Custom"},
                },
            }],
        });
        fs::write(&path, doc.to_string()).unwrap();

        let err = TestResult::read_file(&path, false).unwrap_err();
        assert!(matches!(err, BenchError::Validation(_)));
    }

    #[test]
    fn display_excludes_listed_dbs_and_sorts_descending() {
        let result = TestResult {
            run_id: "8bb68e8d62c0".into(),
            task_label: "standard".into(),
            results: vec![
                milvus_result("16c64g", CaseType::Performance768D1M, 1801.0),
                pgvector_result(),
                opengauss_result(),
            ],
            timestamp: 0.0,
        };

        let lines = result.render(Some(&[Db::PgVector]));
        assert_eq!(lines[0], "Task summary: run_id=8bb68, task_label=standard");

        let data_rows = &lines[3..];
        assert_eq!(data_rows.len(), 2);
        // Descending by (db, label, case): OpenGauss sorts after Milvus.
        assert!(data_rows[0].starts_with("OpenGauss"));
        assert!(data_rows[1].starts_with("Milvus"));
        assert!(!lines.iter().any(|l| l.contains("PgVector")));
    }

    #[test]
    fn display_of_empty_results_is_header_only() {
        let result = TestResult {
            run_id: "r".into(),
            task_label: "empty".into(),
            results: vec![],
            timestamp: 0.0,
        };

        let lines = result.render(None);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Task summary: run_id=r, task_label=empty");
        assert!(lines[1].contains("DB"));
        assert!(lines[1].contains("max_load_count"));
        assert!(lines[2].contains("---"));
    }
}
