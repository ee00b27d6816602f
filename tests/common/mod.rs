#![allow(dead_code)]

use powerline_status::*;
use std::cell::{Cell, RefCell};

/// Host with canned answers that records what it was asked to do
pub struct FakeHost {
    pub hostname: String,
    pub home: Option<String>,
    pub batteries: Vec<BatteryReading>,
    pub platform: Platform,
    pub time: String,
    pub command_output: CommandOutput,
    pub commands: RefCell<Vec<Vec<String>>>,
    pub date_formats: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
    pub formatted: Cell<usize>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            hostname: "devbox".to_string(),
            home: Some("/home/alice".to_string()),
            batteries: Vec::new(),
            platform: Platform::Linux,
            time: "Sun 12:34:56".to_string(),
            command_output: CommandOutput::failed(),
            commands: RefCell::new(Vec::new()),
            date_formats: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
            formatted: Cell::new(0),
        }
    }

    /// `git rev-parse` succeeds with `stdout`
    pub fn with_git_stdout(mut self, stdout: &str) -> Self {
        self.command_output = CommandOutput {
            success: true,
            stdout: stdout.to_string(),
        };
        self
    }

    pub fn with_batteries(mut self, batteries: Vec<BatteryReading>) -> Self {
        self.batteries = batteries;
        self
    }

    pub fn command_count(&self) -> usize {
        self.commands.borrow().len()
    }
}

impl Host for FakeHost {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn home_dir(&self) -> Option<String> {
        self.home.clone()
    }

    fn batteries(&self) -> Vec<BatteryReading> {
        self.batteries.clone()
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn strftime(&self, format: &str) -> String {
        self.date_formats.borrow_mut().push(format.to_string());
        self.time.clone()
    }

    fn format(&self, text: &StyledText) -> String {
        self.formatted.set(self.formatted.get() + 1);
        PlainFormatter.format(text)
    }

    async fn run_command(&self, program: &str, args: &[&str]) -> CommandOutput {
        let mut command = vec![program.to_string()];
        command.extend(args.iter().map(|arg| arg.to_string()));
        self.commands.borrow_mut().push(command);
        self.command_output.clone()
    }

    fn log_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

pub struct FakePane(pub Option<CwdDescriptor>);

impl FakePane {
    pub fn uri(uri: &str) -> Self {
        Self(Some(CwdDescriptor::Uri(uri.to_string())))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl Pane for FakePane {
    fn current_working_dir(&self) -> Option<CwdDescriptor> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct FakeWindow {
    pub statuses: RefCell<Vec<String>>,
}

impl Window for FakeWindow {
    fn set_right_status(&self, status: &str) {
        self.statuses.borrow_mut().push(status.to_string());
    }
}

pub fn reading(state_of_charge: f64, state: BatteryState) -> BatteryReading {
    BatteryReading {
        state_of_charge,
        state,
    }
}
