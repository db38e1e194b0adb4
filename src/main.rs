//! vdbbench CLI
//!
//! One subcommand per database flavor assembles a fully validated task
//! from flags and emits it as JSON for the execution layer; `show`
//! renders the comparison table from a persisted result file.
//!
//! ```bash
//! vdbbench pgvector-hnsw --host localhost --user-name postgres \
//!     --db-name vectordb --case Performance768D1M --m 16
//! vdbbench show results/milvus/result_20260807_standard_milvus.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vdbbench::clients::{
    Db, DbCaseConfig, DbConfig, IndexType, MilvusAutoIndexConfig, MilvusConfig, MilvusHnswConfig,
    MilvusIvfFlatConfig, OpenGaussConfig, OpenGaussHnswConfig, OpenGaussHnswPqConfig,
    OpenGaussIvfFlatConfig, PgVectorConfig, PgVectorHnswConfig, PgVectorIvfFlatConfig,
    RedisConfig, SecretStr,
};
use vdbbench::config;
use vdbbench::task::{CaseConfig, CaseType, ConcurrencySearchConfig, TaskConfig, TaskStage};
use vdbbench::{BenchError, BenchResult, TestResult};

#[derive(Parser, Debug)]
#[command(name = "vdbbench")]
#[command(about = "Vector database benchmark task assembly and result reporting")]
#[command(version)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a Milvus HNSW task.
    MilvusHnsw {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        conn: MilvusConnArgs,
        #[command(flatten)]
        index: MilvusHnswArgs,
    },
    /// Assemble a Milvus IVF_FLAT task.
    MilvusIvfflat {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        conn: MilvusConnArgs,
        #[command(flatten)]
        index: MilvusIvfFlatArgs,
    },
    /// Assemble a Milvus AUTOINDEX task.
    MilvusAutoindex {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        conn: MilvusConnArgs,
    },
    /// Assemble a pgvector HNSW task.
    PgvectorHnsw {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        conn: PgConnArgs,
        #[command(flatten)]
        index: PgHnswArgs,
    },
    /// Assemble a pgvector IVF_FLAT task.
    PgvectorIvfflat {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        conn: PgConnArgs,
        #[command(flatten)]
        index: IvfFlatArgs,
    },
    /// Assemble an openGauss HNSW task.
    OpengaussHnsw {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        conn: PgConnArgs,
        #[command(flatten)]
        index: PgHnswArgs,
    },
    /// Assemble an openGauss HNSW_PQ task.
    OpengaussHnswpq {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        conn: PgConnArgs,
        #[command(flatten)]
        index: PgHnswArgs,
        #[command(flatten)]
        pq: PqArgs,
    },
    /// Assemble an openGauss IVF_FLAT task.
    OpengaussIvfflat {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        conn: PgConnArgs,
        #[command(flatten)]
        index: IvfFlatArgs,
    },
    /// Assemble a Redis task.
    Redis {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        conn: RedisConnArgs,
    },
    /// Render the comparison table from a persisted result file.
    Show {
        /// Result file to load.
        path: PathBuf,
        /// Databases to leave out of the table (comma separated).
        #[arg(long, value_delimiter = ',', value_parser = parse_db)]
        exclude: Vec<Db>,
        /// Normalize units in files written before the unit migration.
        #[arg(long)]
        trans_unit: bool,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Label distinguishing instances of the same database, e.g. 16c64g.
    #[arg(long, default_value = "")]
    db_label: String,

    /// Server version recorded with the task.
    #[arg(long, default_value = "")]
    version: String,

    /// Benchmark case to run.
    #[arg(long, default_value = "Performance768D1M", value_parser = parse_case)]
    case: CaseType,

    /// Top-k for search stages.
    #[arg(short, long, default_value_t = config::K_DEFAULT)]
    k: u32,

    /// Concurrency levels for the concurrent-search stage.
    #[arg(long, value_delimiter = ',')]
    num_concurrency: Option<Vec<u32>>,

    /// Seconds to hold each concurrency level.
    #[arg(long, default_value_t = config::CONCURRENCY_DURATION)]
    concurrency_duration: u32,

    /// Inline JSON payload for custom cases.
    #[arg(long)]
    custom_case: Option<String>,

    /// Skip dropping existing data before load.
    #[arg(long)]
    skip_drop_old: bool,

    /// Skip the load stage.
    #[arg(long)]
    skip_load: bool,

    /// Skip the serial search stage.
    #[arg(long)]
    skip_search_serial: bool,

    /// Skip the concurrent search stage.
    #[arg(long)]
    skip_search_concurrent: bool,
}

impl CommonArgs {
    fn case_config(&self) -> BenchResult<CaseConfig> {
        let custom_case = match &self.custom_case {
            Some(raw) => Some(serde_json::from_str(raw)?),
            None => None,
        };
        Ok(CaseConfig {
            case_id: self.case,
            custom_case,
            k: self.k,
            concurrency_search_config: ConcurrencySearchConfig {
                num_concurrency: self
                    .num_concurrency
                    .clone()
                    .unwrap_or_else(|| config::NUM_CONCURRENCY.to_vec()),
                concurrency_duration: self.concurrency_duration,
            },
        })
    }

    fn stages(&self) -> Vec<TaskStage> {
        let mut stages = Vec::new();
        if !self.skip_drop_old {
            stages.push(TaskStage::DropOld);
        }
        if !self.skip_load {
            stages.push(TaskStage::Load);
        }
        if !self.skip_search_serial {
            stages.push(TaskStage::SearchSerial);
        }
        if !self.skip_search_concurrent {
            stages.push(TaskStage::SearchConcurrent);
        }
        stages
    }
}

#[derive(Args, Debug)]
struct MilvusConnArgs {
    /// Milvus server uri.
    #[arg(long, default_value = "http://localhost:19530")]
    uri: String,

    /// Optional username.
    #[arg(long)]
    user: Option<String>,

    /// Password; defaults to $MILVUS_PASSWORD.
    #[arg(long)]
    password: Option<String>,
}

impl MilvusConnArgs {
    fn config(&self, common: &CommonArgs) -> MilvusConfig {
        MilvusConfig {
            db_label: common.db_label.clone(),
            version: common.version.clone(),
            note: String::new(),
            uri: self.uri.clone(),
            user: self.user.clone(),
            password: password_or_env(self.password.clone(), "MILVUS_PASSWORD"),
        }
    }
}

#[derive(Args, Debug)]
struct PgConnArgs {
    /// Database host.
    #[arg(long)]
    host: String,

    #[arg(long, default_value_t = 5432)]
    port: u16,

    /// Database username.
    #[arg(long)]
    user_name: String,

    /// Password; defaults to $POSTGRES_PASSWORD.
    #[arg(long)]
    password: Option<String>,

    /// Database name.
    #[arg(long)]
    db_name: String,
}

impl PgConnArgs {
    fn pgvector_config(&self, common: &CommonArgs) -> PgVectorConfig {
        PgVectorConfig {
            db_label: common.db_label.clone(),
            version: common.version.clone(),
            note: String::new(),
            host: self.host.clone(),
            port: self.port,
            user_name: self.user_name.clone(),
            password: password_or_env(self.password.clone(), "POSTGRES_PASSWORD"),
            db_name: self.db_name.clone(),
        }
    }

    fn opengauss_config(&self, common: &CommonArgs) -> OpenGaussConfig {
        OpenGaussConfig {
            db_label: common.db_label.clone(),
            version: common.version.clone(),
            note: String::new(),
            host: self.host.clone(),
            port: self.port,
            user_name: self.user_name.clone(),
            password: password_or_env(self.password.clone(), "POSTGRES_PASSWORD"),
            db_name: self.db_name.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct RedisConnArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 6379)]
    port: u16,

    /// Password; defaults to $REDIS_PASSWORD.
    #[arg(long)]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct MilvusHnswArgs {
    /// Graph degree.
    #[arg(short, long, default_value_t = 16)]
    m: u32,

    #[arg(long, default_value_t = 256)]
    ef_construction: u32,

    #[arg(long)]
    ef_search: Option<u32>,
}

#[derive(Args, Debug)]
struct MilvusIvfFlatArgs {
    /// Cluster count.
    #[arg(long, default_value_t = 1024)]
    nlist: u32,

    /// Clusters probed per query.
    #[arg(long)]
    nprobe: Option<u32>,
}

#[derive(Args, Debug)]
struct PgHnswArgs {
    /// Graph degree.
    #[arg(short, long, default_value_t = 16)]
    m: u32,

    #[arg(long, default_value_t = 256)]
    ef_construction: u32,

    #[arg(long)]
    ef_search: Option<u32>,

    /// Memory for index builds, e.g. 8GB. Also raises the parallel
    /// maintenance settings on the driver side.
    #[arg(long)]
    maintenance_work_mem: Option<String>,

    /// Parallel processes per index build.
    #[arg(long)]
    max_parallel_workers: Option<u32>,
}

#[derive(Args, Debug)]
struct PqArgs {
    #[arg(long)]
    pq_m: Option<u32>,

    #[arg(long)]
    pq_ksub: Option<u32>,

    #[arg(long)]
    hnsw_earlystop_threshold: Option<u32>,
}

#[derive(Args, Debug)]
struct IvfFlatArgs {
    /// List count for the inverted file.
    #[arg(long, default_value_t = 1000)]
    lists: u32,

    /// Lists probed per query.
    #[arg(long)]
    probes: Option<u32>,
}

fn main() -> BenchResult<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Command::MilvusHnsw {
            common,
            conn,
            index,
        } => emit_task(&TaskConfig {
            db: Db::Milvus,
            db_config: DbConfig::Milvus(conn.config(&common)),
            db_case_config: DbCaseConfig::MilvusHnsw(MilvusHnswConfig {
                index: IndexType::Hnsw,
                metric_type: None,
                m: index.m,
                ef_construction: index.ef_construction,
                ef_search: index.ef_search,
            }),
            case_config: common.case_config()?,
            stages: common.stages(),
        }),
        Command::MilvusIvfflat {
            common,
            conn,
            index,
        } => emit_task(&TaskConfig {
            db: Db::Milvus,
            db_config: DbConfig::Milvus(conn.config(&common)),
            db_case_config: DbCaseConfig::MilvusIvfFlat(MilvusIvfFlatConfig {
                index: IndexType::IvfFlat,
                metric_type: None,
                nlist: index.nlist,
                nprobe: index.nprobe,
            }),
            case_config: common.case_config()?,
            stages: common.stages(),
        }),
        Command::MilvusAutoindex { common, conn } => emit_task(&TaskConfig {
            db: Db::Milvus,
            db_config: DbConfig::Milvus(conn.config(&common)),
            db_case_config: DbCaseConfig::MilvusAutoIndex(MilvusAutoIndexConfig {
                index: IndexType::AutoIndex,
                metric_type: None,
            }),
            case_config: common.case_config()?,
            stages: common.stages(),
        }),
        Command::PgvectorHnsw {
            common,
            conn,
            index,
        } => emit_task(&TaskConfig {
            db: Db::PgVector,
            db_config: DbConfig::PgVector(conn.pgvector_config(&common)),
            db_case_config: DbCaseConfig::PgVectorHnsw(PgVectorHnswConfig {
                index: IndexType::Hnsw,
                metric_type: None,
                m: index.m,
                ef_construction: index.ef_construction,
                ef_search: index.ef_search,
                maintenance_work_mem: index.maintenance_work_mem,
                max_parallel_workers: index.max_parallel_workers,
            }),
            case_config: common.case_config()?,
            stages: common.stages(),
        }),
        Command::PgvectorIvfflat {
            common,
            conn,
            index,
        } => emit_task(&TaskConfig {
            db: Db::PgVector,
            db_config: DbConfig::PgVector(conn.pgvector_config(&common)),
            db_case_config: DbCaseConfig::PgVectorIvfFlat(PgVectorIvfFlatConfig {
                index: IndexType::IvfFlat,
                metric_type: None,
                lists: index.lists,
                probes: index.probes,
            }),
            case_config: common.case_config()?,
            stages: common.stages(),
        }),
        Command::OpengaussHnsw {
            common,
            conn,
            index,
        } => emit_task(&TaskConfig {
            db: Db::OpenGauss,
            db_config: DbConfig::OpenGauss(conn.opengauss_config(&common)),
            db_case_config: DbCaseConfig::OpenGaussHnsw(OpenGaussHnswConfig {
                index: IndexType::Hnsw,
                metric_type: None,
                m: index.m,
                ef_construction: index.ef_construction,
                ef_search: index.ef_search,
                maintenance_work_mem: index.maintenance_work_mem,
                max_parallel_workers: index.max_parallel_workers,
            }),
            case_config: common.case_config()?,
            stages: common.stages(),
        }),
        Command::OpengaussHnswpq {
            common,
            conn,
            index,
            pq,
        } => emit_task(&TaskConfig {
            db: Db::OpenGauss,
            db_config: DbConfig::OpenGauss(conn.opengauss_config(&common)),
            db_case_config: DbCaseConfig::OpenGaussHnswPq(OpenGaussHnswPqConfig {
                index: IndexType::HnswPq,
                metric_type: None,
                m: index.m,
                ef_construction: index.ef_construction,
                ef_search: index.ef_search,
                pq_m: pq.pq_m,
                pq_ksub: pq.pq_ksub,
                hnsw_earlystop_threshold: pq.hnsw_earlystop_threshold,
                maintenance_work_mem: index.maintenance_work_mem,
                max_parallel_workers: index.max_parallel_workers,
            }),
            case_config: common.case_config()?,
            stages: common.stages(),
        }),
        Command::OpengaussIvfflat {
            common,
            conn,
            index,
        } => emit_task(&TaskConfig {
            db: Db::OpenGauss,
            db_config: DbConfig::OpenGauss(conn.opengauss_config(&common)),
            db_case_config: DbCaseConfig::OpenGaussIvfFlat(OpenGaussIvfFlatConfig {
                index: IndexType::IvfFlat,
                metric_type: None,
                lists: index.lists,
                probes: index.probes,
            }),
            case_config: common.case_config()?,
            stages: common.stages(),
        }),
        Command::Redis { common, conn } => emit_task(&TaskConfig {
            db: Db::Redis,
            db_config: DbConfig::Redis(RedisConfig {
                db_label: common.db_label.clone(),
                version: common.version.clone(),
                note: String::new(),
                host: conn.host.clone(),
                port: conn.port,
                password: password_or_env(conn.password.clone(), "REDIS_PASSWORD"),
            }),
            db_case_config: DbCaseConfig::Empty(Default::default()),
            case_config: common.case_config()?,
            stages: common.stages(),
        }),
        Command::Show {
            path,
            exclude,
            trans_unit,
        } => {
            let result = TestResult::read_file(&path, trans_unit)?;
            result.display((!exclude.is_empty()).then_some(exclude.as_slice()));
            Ok(())
        }
    }
}

/// Print the assembled task: a status line on stderr, the task JSON on
/// stdout for the execution layer. Credentials never serialize.
fn emit_task(task: &TaskConfig) -> BenchResult<()> {
    eprintln!(
        "  {} {} · case {} · {} stages",
        "assembled".green().bold(),
        task.db_name(),
        task.case_config.case_id,
        task.stages.len()
    );
    println!("{}", serde_json::to_string_pretty(task)?);
    Ok(())
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_case(s: &str) -> Result<CaseType, String> {
    s.parse().map_err(|e: BenchError| e.to_string())
}

fn parse_db(s: &str) -> Result<Db, String> {
    s.parse().map_err(|e: BenchError| e.to_string())
}

fn password_or_env(flag: Option<String>, env_key: &str) -> SecretStr {
    SecretStr::new(flag.unwrap_or_else(|| std::env::var(env_key).unwrap_or_default()))
}
