//! Capabilities the status line needs from its host.
//!
//! The core never touches the machine directly: everything impure goes
//! through these traits, so a terminal embedding, the bundled
//! [`SystemHost`] and test fakes are interchangeable.

pub mod system;

pub use system::*;

use crate::cells::StyledText;

/// Operating system family of the host target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl Platform {
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryState {
    Charging,
    Discharging,
    Full,
    Empty,
    Unknown,
}

impl BatteryState {
    /// Parse a sysfs `status` value
    pub fn from_status(status: &str) -> Self {
        match status.trim() {
            "Charging" => BatteryState::Charging,
            "Discharging" | "Not charging" => BatteryState::Discharging,
            "Full" => BatteryState::Full,
            "Empty" => BatteryState::Empty,
            _ => BatteryState::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    /// Charge between 0 and 1
    pub state_of_charge: f64,
    pub state: BatteryState,
}

/// Working directory as reported by a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CwdDescriptor {
    /// Already split into path and host
    Structured { path: String, host: Option<String> },
    /// `file://host/path` URI, percent-encoded
    Uri(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
}

impl CommandOutput {
    pub fn failed() -> Self {
        Self::default()
    }
}

#[allow(async_fn_in_trait)]
pub trait Host {
    /// Hostname of the local machine
    fn hostname(&self) -> String;

    fn home_dir(&self) -> Option<String>;

    fn batteries(&self) -> Vec<BatteryReading>;

    fn platform(&self) -> Platform;

    /// Current local time rendered with a strftime-style format
    fn strftime(&self, format: &str) -> String;

    /// Turn styled text into whatever the host displays
    fn format(&self, text: &StyledText) -> String;

    /// Run an external program and capture its standard output.
    ///
    /// Invocation errors are reported as an unsuccessful output.
    async fn run_command(&self, program: &str, args: &[&str]) -> CommandOutput;

    fn log_error(&self, message: &str);
}

pub trait Pane {
    fn current_working_dir(&self) -> Option<CwdDescriptor>;
}

pub trait Window {
    fn set_right_status(&self, status: &str);
}
