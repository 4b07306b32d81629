use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use roadmap_core::Locale;
use roadmap_core::model::Roadmap;
use services::ProgressService;
use storage::repository::Storage;
use tracing::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLocale { raw: String },
    InvalidRoadmapPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLocale { raw } => write!(f, "invalid --locale value: {raw}"),
            ArgsError::InvalidRoadmapPath { raw } => write!(f, "invalid --roadmap value: {raw:?}"),
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
    locale: Locale,
    progress_service: Arc<ProgressService>,
}

impl UiApp for DesktopApp {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--roadmap <path.json>] [--locale en|ru]");
    eprintln!("  cargo run -p app -- check [--roadmap <path.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in Python & Rust roadmap, --locale en");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ROADMAP_FILE, ROADMAP_LOCALE, RUST_LOG (default: info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

struct Args {
    roadmap: Option<PathBuf>,
    locale: Locale,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut roadmap = std::env::var("ROADMAP_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut locale = match std::env::var("ROADMAP_LOCALE") {
            Ok(raw) => parse_locale(raw)?,
            Err(_) => Locale::default(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--roadmap" => {
                    let value = require_value(args, "--roadmap")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidRoadmapPath { raw: value });
                    }
                    roadmap = Some(PathBuf::from(value));
                }
                "--locale" if cmd == Command::Ui => {
                    locale = parse_locale(require_value(args, "--locale")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { roadmap, locale })
    }
}

fn parse_locale(raw: String) -> Result<Locale, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidLocale { raw })
}

fn load_roadmap(path: Option<&PathBuf>) -> Result<Roadmap, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Roadmap::builtin()?);
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
    Roadmap::from_json(&raw).map_err(|err| format!("{}: {err}", path.display()).into())
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
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
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let roadmap = load_roadmap(parsed.roadmap.as_ref())?;

    match cmd {
        Command::Ui => {
            let title = roadmap.title().to_string();
            info!(
                phases = roadmap.phases().len(),
                total = roadmap.total_items(),
                locale = %parsed.locale,
                "launching roadmap"
            );

            // Progress lives for the lifetime of the window only.
            let storage = Storage::in_memory();
            let progress_service = Arc::new(ProgressService::new(
                Arc::new(roadmap),
                Arc::clone(&storage.progress),
            ));
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                locale: parsed.locale,
                progress_service,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            let frameworks = roadmap.framework_items().count();
            println!("{}", roadmap.title());
            println!("  phases:     {}", roadmap.phases().len());
            println!("  items:      {}", roadmap.total_items());
            println!("  frameworks: {frameworks}");
            Ok(())
        }
    }
}

fn main() {
    setup_logging();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
