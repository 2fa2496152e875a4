mod logging;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use services::{ExamDefaults, ExamSetup};
use ui::{App, UiApp, build_app_context};

use crate::logging::{LoggingConfig, init_logging};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidExam { minutes: i64, questions: i64 },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidExam { minutes, questions } => write!(
                f,
                "minutes and questions must be positive (got {minutes} and {questions})"
            ),
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

fn parse_number<T: std::str::FromStr>(raw: String, flag: &'static str) -> Result<T, ArgsError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    defaults: ExamDefaults,
}

impl UiApp for DesktopApp {
    fn exam_defaults(&self) -> ExamDefaults {
        self.defaults
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    defaults: ExamDefaults,
    log_filter: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--minutes <n>] [--questions <n>] [--tick-ms <ms>] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --minutes {}", ExamDefaults::DEFAULT_MINUTES);
    eprintln!("  --questions {}", ExamDefaults::DEFAULT_QUESTIONS);
    eprintln!("  --tick-ms {}", ExamDefaults::DEFAULT_TICK_PERIOD.as_millis());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ZIMER_MINUTES, ZIMER_QUESTIONS, ZIMER_TICK_MS, RUST_LOG");
}

impl Args {
    /// Built-in defaults, overridden by environment, overridden by flags.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut defaults = ExamDefaults::default();
        if let Some(minutes) = env("ZIMER_MINUTES").and_then(|v| v.trim().parse().ok()) {
            defaults = defaults.with_minutes(minutes);
        }
        if let Some(questions) = env("ZIMER_QUESTIONS").and_then(|v| v.trim().parse().ok()) {
            defaults = defaults.with_questions(questions);
        }
        if let Some(ms) = env("ZIMER_TICK_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
            defaults = defaults.with_tick_period(Duration::from_millis(ms));
        }
        let mut log_filter = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--minutes" => {
                    let value = require_value(args, "--minutes")?;
                    defaults = defaults.with_minutes(parse_number(value, "--minutes")?);
                }
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    defaults = defaults.with_questions(parse_number(value, "--questions")?);
                }
                "--tick-ms" => {
                    let value = require_value(args, "--tick-ms")?;
                    let ms: u64 = parse_number(value.clone(), "--tick-ms")?;
                    if ms == 0 {
                        return Err(ArgsError::InvalidNumber {
                            flag: "--tick-ms",
                            raw: value,
                        });
                    }
                    defaults = defaults.with_tick_period(Duration::from_millis(ms));
                }
                "--log" => {
                    log_filter = Some(require_value(args, "--log")?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        ExamSetup::new(defaults.minutes, defaults.questions)
            .validate()
            .map_err(|_| ArgsError::InvalidExam {
                minutes: defaults.minutes,
                questions: defaults.questions,
            })?;

        Ok(Parsed::Run(Self {
            defaults,
            log_filter,
        }))
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_logging(LoggingConfig {
        env_filter: args.log_filter,
        ..LoggingConfig::default()
    });
    log::info!(
        "launching with {} minutes, {} questions, tick every {:?}",
        args.defaults.minutes,
        args.defaults.questions,
        args.defaults.tick_period
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        defaults: args.defaults,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("ZIMER - Exam Time Divider")
            .with_inner_size(LogicalSize::new(560.0, 420.0))
            .with_resizable(false)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
