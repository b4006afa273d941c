use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::proctor::{MediaDevices, SimulatedMediaDevices, SimulatedOutcome};
use services::{AppServices, Clock, Delays, ProctorConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};
use verify_core::model::{Capability, DenyReason};

const DEFAULT_DB_URL: &str = "sqlite://verify.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidTimeout { raw: String },
    InvalidEnv { var: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidTimeout { raw } => {
                write!(f, "invalid --permission-timeout value: {raw}")
            }
            ArgsError::InvalidEnv { var, raw } => write!(f, "invalid {var} value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--permission-timeout <secs>]");
    eprintln!("                      [--instant] [--deny-camera] [--deny-microphone]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!(
        "  --permission-timeout {}",
        ProctorConfig::DEFAULT_PERMISSION_TIMEOUT.as_secs()
    );
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VERIFY_DB_URL, VERIFY_PERMISSION_TIMEOUT, RUST_LOG");
}

/// Environment fallbacks, read once so parsing stays testable.
#[derive(Debug, Default)]
struct EnvDefaults {
    db_url: Option<String>,
    permission_timeout: Option<String>,
}

impl EnvDefaults {
    fn from_process() -> Self {
        Self {
            db_url: std::env::var("VERIFY_DB_URL").ok(),
            permission_timeout: std::env::var("VERIFY_PERMISSION_TIMEOUT").ok(),
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    permission_timeout: Duration,
    instant: bool,
    deny_camera: bool,
    deny_microphone: bool,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: EnvDefaults,
    ) -> Result<Option<Self>, ArgsError> {
        let mut db_url = match env.db_url {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ArgsError::InvalidEnv {
                    var: "VERIFY_DB_URL",
                    raw,
                });
            }
            Some(raw) => normalize_sqlite_url(raw),
            None => DEFAULT_DB_URL.into(),
        };
        let mut permission_timeout = match env.permission_timeout {
            Some(raw) => parse_timeout(&raw).map_err(|_| ArgsError::InvalidEnv {
                var: "VERIFY_PERMISSION_TIMEOUT",
                raw,
            })?,
            None => ProctorConfig::DEFAULT_PERMISSION_TIMEOUT,
        };
        let mut instant = false;
        let mut deny_camera = false;
        let mut deny_microphone = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--permission-timeout" => {
                    let value = require_value(args, "--permission-timeout")?;
                    permission_timeout = parse_timeout(&value)?;
                }
                "--instant" => instant = true,
                "--deny-camera" => deny_camera = true,
                "--deny-microphone" => deny_microphone = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            db_url,
            permission_timeout,
            instant,
            deny_camera,
            deny_microphone,
        }))
    }

    fn delays(&self) -> Delays {
        if self.instant {
            Delays::instant()
        } else {
            Delays::standard()
        }
    }

    fn proctor_config(&self) -> ProctorConfig {
        let base = if self.instant {
            ProctorConfig::instant()
        } else {
            ProctorConfig::standard()
        };
        base.with_permission_timeout(self.permission_timeout)
    }

    fn devices(&self) -> Arc<dyn MediaDevices> {
        let mut devices = SimulatedMediaDevices::granting();
        if self.deny_camera {
            devices = devices.with_default(
                Capability::Camera,
                SimulatedOutcome::Deny(DenyReason::Refused),
            );
        }
        if self.deny_microphone {
            devices = devices.with_default(
                Capability::Microphone,
                SimulatedOutcome::Deny(DenyReason::Refused),
            );
        }
        Arc::new(devices)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ArgsError::InvalidTimeout {
            raw: raw.to_string(),
        }),
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim();
    let path = std::path::Path::new(trimmed.strip_prefix("sqlite:").unwrap_or(trimmed));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
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

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, EnvDefaults::from_process()) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_logging();
    info!(db = %parsed.db_url, instant = parsed.instant, "starting VerifyMe");

    // Open + migrate SQLite before the window exists. The desktop launcher
    // drives its own runtime, so this one only has to outlive the pool.
    prepare_sqlite_file(&parsed.db_url)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let services = runtime.block_on(AppServices::new_sqlite(
        &parsed.db_url,
        Clock::system(),
        parsed.delays(),
        parsed.proctor_config(),
        parsed.devices(),
    ))?;

    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("VerifyMe")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    drop(runtime);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Args>, ArgsError> {
        parse_with_env(args, EnvDefaults::default())
    }

    fn parse_with_env(args: &[&str], env: EnvDefaults) -> Result<Option<Args>, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, env)
    }

    #[test]
    fn flags_toggle_simulation_knobs() {
        let args = parse(&["--instant", "--deny-camera", "--permission-timeout", "5"])
            .expect("parse")
            .expect("args");
        assert!(args.instant);
        assert!(args.deny_camera);
        assert!(!args.deny_microphone);
        assert_eq!(args.permission_timeout, Duration::from_secs(5));
        assert_eq!(args.delays(), Delays::instant());
        assert_eq!(
            args.proctor_config().permission_timeout,
            Duration::from_secs(5)
        );
    }

    #[test]
    fn env_timeout_is_used_and_flag_overrides_it() {
        let env = || EnvDefaults {
            db_url: None,
            permission_timeout: Some("12".into()),
        };
        let args = parse_with_env(&[], env()).expect("parse").expect("args");
        assert_eq!(args.permission_timeout, Duration::from_secs(12));

        let args = parse_with_env(&["--permission-timeout", "3"], env())
            .expect("parse")
            .expect("args");
        assert_eq!(args.permission_timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_env_values_are_rejected() {
        let bad_timeout = EnvDefaults {
            db_url: None,
            permission_timeout: Some("later".into()),
        };
        assert!(matches!(
            parse_with_env(&[], bad_timeout),
            Err(ArgsError::InvalidEnv {
                var: "VERIFY_PERMISSION_TIMEOUT",
                ..
            })
        ));

        let blank_db = EnvDefaults {
            db_url: Some("   ".into()),
            permission_timeout: None,
        };
        assert!(matches!(
            parse_with_env(&[], blank_db),
            Err(ArgsError::InvalidEnv {
                var: "VERIFY_DB_URL",
                ..
            })
        ));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["--help"]).expect("parse").is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            parse(&["--permission-timeout", "soon"]),
            Err(ArgsError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            parse(&["--permission-timeout", "0"]),
            Err(ArgsError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            parse(&["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(parse(&["--db", "  "]), Err(ArgsError::InvalidDbUrl { .. })));
        assert!(matches!(parse(&["--verbose"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn sqlite_urls_become_absolute() {
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/verify.db".into()),
            "sqlite:///tmp/verify.db"
        );
        let relative = normalize_sqlite_url("sqlite:data/verify.db".into());
        assert!(relative.starts_with("sqlite:///"), "{relative}");
        assert!(relative.ends_with("data/verify.db"), "{relative}");
    }

    #[test]
    fn prepare_creates_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("verify.sqlite3");
        let url = format!("sqlite://{}", path.display());
        prepare_sqlite_file(&url).expect("prepare");
        assert!(path.exists());
    }
}
