use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use api::AppState;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, AuthService, Clock, IntentionService, ProgressService, SessionService,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB: &str = "sqlite:rosary.sqlite3";
const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_STATE_DIR: &str = ".rosary";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidBind { raw: String },
    InvalidStateDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidBind { raw } => write!(f, "invalid --bind value: {raw}"),
            ArgsError::InvalidStateDir { raw } => write!(f, "invalid --state-dir value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    clock: Clock,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn intentions(&self) -> Arc<IntentionService> {
        self.services.intentions()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn session(&self) -> Arc<SessionService> {
        self.services.session()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    bind: SocketAddr,
    state_dir: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--db <sqlite_url>] [--state-dir <dir>]");
    eprintln!("  cargo run -p app -- serve [--db <sqlite_url>] [--bind <addr>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB}");
    eprintln!("  --bind {DEFAULT_BIND}");
    eprintln!("  --state-dir {DEFAULT_STATE_DIR}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ROSARY_DB_URL, ROSARY_BIND, ROSARY_STATE_DIR, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Serve,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "serve" => Some(Self::Serve),
            _ => None,
        }
    }
}

fn parse_bind(raw: String) -> Result<SocketAddr, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidBind { raw })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    /// Flags win over `env`; an environment value is only read (and validated)
    /// when its flag is absent.
    fn parse_with_env(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url: Option<String> = None;
        let mut bind: Option<SocketAddr> = None;
        let mut state_dir: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = Some(normalize_sqlite_url(value));
                }
                "--bind" => {
                    bind = Some(parse_bind(require_value(args, "--bind")?)?);
                }
                "--state-dir" => {
                    let value = require_value(args, "--state-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidStateDir { raw: value });
                    }
                    state_dir = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let db_url = db_url.unwrap_or_else(|| {
            normalize_sqlite_url(env("ROSARY_DB_URL").unwrap_or_else(|| DEFAULT_DB.into()))
        });
        let bind = match bind {
            Some(bind) => bind,
            None => parse_bind(env("ROSARY_BIND").unwrap_or_else(|| DEFAULT_BIND.into()))?,
        };
        let state_dir = state_dir.unwrap_or_else(|| {
            env("ROSARY_STATE_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATE_DIR), PathBuf::from)
        });

        Ok(Self {
            db_url,
            bind,
            state_dir,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    let trimmed = raw.trim().to_string();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed;
    }

    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // no subcommand launches the desktop app
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    prepare_sqlite_file(&parsed.db_url)?;
    let clock = Clock::default_clock();
    let services = AppServices::new_sqlite(&parsed.db_url, &parsed.state_dir, clock).await?;
    tracing::info!(db = %parsed.db_url, ?cmd, "storage ready");

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { clock, services });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Rosarium Virginis Mariae")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Serve => {
            let listener = tokio::net::TcpListener::bind(parsed.bind).await?;
            api::serve(listener, AppState::from_services(&services)).await?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
