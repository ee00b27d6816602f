use crate::cells::StyledText;
use crate::config::DEFAULT_DATE_FORMAT;
use crate::host::{BatteryReading, BatteryState, CommandOutput, CwdDescriptor, Host, Pane, Platform, Window};
use crate::render::Formatter;
use crate::utils::{debug_with_context, warn};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use sysinfo::System;
use tokio::process::Command;
use walkdir::WalkDir;

pub const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(2);

/// The local machine as a host
pub struct SystemHost {
    formatter: Box<dyn Formatter>,
    command_timeout: Option<Duration>,
    power_supply_dir: PathBuf,
    platform: Platform,
}

impl SystemHost {
    pub fn new(formatter: Box<dyn Formatter>) -> Self {
        Self {
            formatter,
            command_timeout: Some(DEFAULT_COMMAND_TIMEOUT),
            power_supply_dir: PathBuf::from(POWER_SUPPLY_DIR),
            platform: Platform::current(),
        }
    }

    /// `None` lets commands run for as long as they take
    pub fn with_command_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.command_timeout = timeout;
        self
    }

    pub fn with_power_supply_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.power_supply_dir = dir.into();
        self
    }
}

impl Host for SystemHost {
    fn hostname(&self) -> String {
        System::host_name()
            .or_else(|| env::var("HOSTNAME").ok())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "localhost".to_string())
    }

    fn home_dir(&self) -> Option<String> {
        dirs::home_dir().map(|home| home.to_string_lossy().into_owned())
    }

    fn batteries(&self) -> Vec<BatteryReading> {
        read_batteries(&self.power_supply_dir)
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn strftime(&self, format: &str) -> String {
        let now = chrono::Local::now();
        let mut rendered = String::new();
        if write!(rendered, "{}", now.format(format)).is_err() {
            debug_with_context("clock", &format!("Bad date format `{}`, using default", format));
            rendered.clear();
            // the default format is always valid
            let _ = write!(rendered, "{}", now.format(DEFAULT_DATE_FORMAT));
        }
        rendered
    }

    fn format(&self, text: &StyledText) -> String {
        self.formatter.format(text)
    }

    async fn run_command(&self, program: &str, args: &[&str]) -> CommandOutput {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let output = match self.command_timeout {
            Some(limit) => match tokio::time::timeout(limit, command.output()).await {
                Ok(output) => output,
                Err(_) => {
                    debug_with_context("command", &format!("{} timed out after {:?}", program, limit));
                    return CommandOutput::failed();
                }
            },
            None => command.output().await,
        };

        match output {
            Ok(output) => CommandOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            },
            Err(e) => {
                debug_with_context("command", &format!("Failed to run {}: {}", program, e));
                CommandOutput::failed()
            }
        }
    }

    fn log_error(&self, message: &str) {
        warn("powerline-status", message);
    }
}

/// Batteries under a sysfs `power_supply` directory, sorted by name.
///
/// Entries whose `type` is not `Battery` (AC adapters, peripherals reporting
/// `USB`) are skipped, as are entries without a readable capacity.
pub fn read_batteries(dir: &Path) -> Vec<BatteryReading> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| read_trimmed(&entry.path().join("type")).as_deref() == Some("Battery"))
        .filter_map(|entry| {
            let capacity: f64 = read_trimmed(&entry.path().join("capacity"))?.parse().ok()?;
            let state = read_trimmed(&entry.path().join("status"))
                .map(|status| BatteryState::from_status(&status))
                .unwrap_or(BatteryState::Unknown);

            Some(BatteryReading {
                state_of_charge: capacity / 100.0,
                state,
            })
        })
        .collect()
}

fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|content| content.trim().to_string())
}

/// Pane backed by the process environment
pub struct ProcessPane {
    cwd: Option<String>,
}

impl ProcessPane {
    /// `cwd` overrides the environment; a `file://` value is treated as a URI
    pub fn new(cwd: Option<String>) -> Self {
        Self { cwd }
    }
}

impl Pane for ProcessPane {
    fn current_working_dir(&self) -> Option<CwdDescriptor> {
        let cwd = self
            .cwd
            .clone()
            .or_else(|| env::var("PWD").ok())
            .or_else(|| env::current_dir().ok().map(|dir| dir.to_string_lossy().into_owned()))
            .filter(|cwd| !cwd.is_empty())?;

        if cwd.starts_with("file://") {
            Some(CwdDescriptor::Uri(cwd))
        } else {
            Some(CwdDescriptor::Structured {
                path: cwd,
                host: None,
            })
        }
    }
}

/// Writes the status line to stdout
pub struct StdoutWindow {
    redraw_in_place: bool,
}

impl StdoutWindow {
    /// With `redraw_in_place` every update overwrites the current terminal line
    pub fn new(redraw_in_place: bool) -> Self {
        Self { redraw_in_place }
    }
}

impl Window for StdoutWindow {
    fn set_right_status(&self, status: &str) {
        if self.redraw_in_place {
            let mut stdout = std::io::stdout().lock();
            let _ = write!(stdout, "\r\x1b[2K{}", status);
            let _ = stdout.flush();
        } else {
            println!("{}", status);
        }
    }
}
