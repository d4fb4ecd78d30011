use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hms_clock::OutputFormat;
use hms_clock::clock::Operator;
use hms_clock::commands;
use hms_clock::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "hms")]
#[command(about = "Normalize, display and combine hours/minutes/seconds durations")]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to ~/.hms-clock/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a duration as HH:MM:SS
    Show(Triple),
    /// Add two durations
    Add(Pair),
    /// Subtract the second duration from the first (clamped at zero)
    Sub(Pair),
    /// Combine two durations with a textual operator (+, -, add, sub)
    Calc {
        #[arg(allow_negative_numbers = true)]
        h1: i64,
        #[arg(allow_negative_numbers = true)]
        m1: i64,
        #[arg(allow_negative_numbers = true)]
        s1: i64,
        op: String,
        #[arg(allow_negative_numbers = true)]
        h2: i64,
        #[arg(allow_negative_numbers = true)]
        m2: i64,
        #[arg(allow_negative_numbers = true)]
        s2: i64,
    },
    /// Run a sample session (ends with a rejected negative value)
    Demo,
    /// Show configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct Triple {
    #[arg(allow_negative_numbers = true)]
    hours: i64,
    #[arg(allow_negative_numbers = true)]
    minutes: i64,
    #[arg(allow_negative_numbers = true)]
    seconds: i64,
}

#[derive(Args)]
struct Pair {
    #[arg(allow_negative_numbers = true)]
    h1: i64,
    #[arg(allow_negative_numbers = true)]
    m1: i64,
    #[arg(allow_negative_numbers = true)]
    s1: i64,
    #[arg(allow_negative_numbers = true)]
    h2: i64,
    #[arg(allow_negative_numbers = true)]
    m2: i64,
    #[arg(allow_negative_numbers = true)]
    s2: i64,
}

impl Pair {
    fn split(&self) -> ([i64; 3], [i64; 3]) {
        ([self.h1, self.m1, self.s1], [self.h2, self.m2, self.s2])
    }
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the rendered values, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = config::load(cli.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let level = config.log_level(cli.log_level.as_deref())?;
    init_logging(&level);

    if let Err(e) = &loaded {
        tracing::warn!("Failed to load config, using defaults: {:#}", e);
    }

    let format = cli.format.unwrap_or(config.output.format);

    match &cli.command {
        Commands::Show(t) => {
            commands::clock::show([t.hours, t.minutes, t.seconds], format)?;
        }
        Commands::Add(pair) => {
            let (lhs, rhs) = pair.split();
            commands::clock::combine(lhs, rhs, Operator::Add, format)?;
        }
        Commands::Sub(pair) => {
            let (lhs, rhs) = pair.split();
            commands::clock::combine(lhs, rhs, Operator::Subtract, format)?;
        }
        Commands::Calc {
            h1,
            m1,
            s1,
            op,
            h2,
            m2,
            s2,
        } => {
            commands::clock::calc([*h1, *m1, *s1], op, [*h2, *m2, *s2], format)?;
        }
        Commands::Demo => {
            commands::clock::demo(format)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config, format)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
