use anyhow::Result;
use pico_args::Arguments;
use powerline_status::*;
use serde_json::{Map, Value};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    cwd: Option<String>,
    date_format: Option<String>,
    format: OutputFormat,
    color: ColorMode,
    watch: bool,
    interval: Duration,
    git_timeout: Option<Duration>,
    help: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        let parsed = Self {
            help: args.contains(["-h", "--help"]),
            watch: args.contains("--watch"),
            config: args
                .opt_value_from_str::<_, PathBuf>("--config")?
                .or_else(|| env::var("POWERLINE_STATUS_CONFIG").ok().map(PathBuf::from)),
            cwd: args.opt_value_from_str("--cwd")?,
            date_format: args.opt_value_from_str("--date-format")?,
            format: args
                .opt_value_from_str("--format")?
                .unwrap_or(OutputFormat::Ansi),
            color: args.opt_value_from_str("--color")?.unwrap_or(ColorMode::Auto),
            interval: Duration::from_millis(args.opt_value_from_str("--interval")?.unwrap_or(1000)),
            // 0 disables the timeout
            git_timeout: match args.opt_value_from_str::<_, u64>("--git-timeout")? {
                Some(0) => None,
                Some(ms) => Some(Duration::from_millis(ms)),
                None => Some(DEFAULT_COMMAND_TIMEOUT),
            },
        };

        let rest = args.finish();
        if !rest.is_empty() {
            anyhow::bail!("unexpected arguments: {:?}", rest);
        }

        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    args.color.apply();

    let mut overrides = Map::new();
    if let Some(format) = &args.date_format {
        overrides.insert("date_format".to_string(), Value::String(format.clone()));
    }
    let raw_options = config::load_options(args.config.clone(), overrides).await?;

    let host = SystemHost::new(args.format.formatter()).with_command_timeout(args.git_timeout);
    let mut status = StatusBar::setup(host, &raw_options)?;

    let pane = ProcessPane::new(args.cwd.clone());
    let window = StdoutWindow::new(args.watch);

    if !args.watch {
        return status.update(&window, &pane).await;
    }

    status
        .watch(&window, &pane, args.interval, tokio::signal::ctrl_c())
        .await?;
    println!();
    Ok(())
}

fn print_help() {
    println!("powerline-status - Powerline-style status line");
    println!();
    println!("USAGE:");
    println!("    powerline-status [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <FILE>         Options file (JSON)");
    println!("    --cwd <URI|PATH>        Working directory to show [default: $PWD]");
    println!("    --date-format <FMT>     strftime format of the clock [default: {}]", DEFAULT_DATE_FORMAT);
    println!("    --format <FORMAT>       Output: ansi, plain, json [default: ansi]");
    println!("    --color <WHEN>          auto, always, never [default: auto]");
    println!("    --watch                 Redraw the line until interrupted");
    println!("    --interval <MS>         Redraw interval in watch mode [default: 1000]");
    println!("    --git-timeout <MS>      Limit for the git lookup, 0 for none [default: 2000]");
    println!("    -h, --help              Show this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    POWERLINE_STATUS_CONFIG        Override config path");
    println!("    POWERLINE_STATUS_DATE_FORMAT   Override date_format");
    println!("    POWERLINE_STATUS_DEBUG         Enable debug logging");
    println!("    NO_COLOR                       Disable colors in auto mode");
    println!("    COLORTERM                      truecolor or 24bit for exact hex colors");
}
