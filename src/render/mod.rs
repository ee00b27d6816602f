use crate::cells::StyledText;
use crate::themes::{Attribute, Color};
use anyhow::{bail, Error};
use colored::Colorize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Turns styled text into a displayable string
pub trait Formatter {
    fn format(&self, text: &StyledText) -> String;
}

/// ANSI escape sequences, one styled run per cell.
///
/// Hex colors are emitted as 24-bit codes only when `COLORTERM` is
/// `truecolor` or `24bit`; otherwise `colored` maps them to the closest of
/// the 16 ANSI colors.
pub struct AnsiFormatter;

impl Formatter for AnsiFormatter {
    fn format(&self, text: &StyledText) -> String {
        text.runs
            .iter()
            .map(|run| {
                let mut styled = run.text.as_str().normal();
                if let Some(fg) = to_colored(&run.style.fg) {
                    styled = styled.color(fg);
                }
                if let Some(bg) = to_colored(&run.style.bg) {
                    styled = styled.on_color(bg);
                }
                for attribute in &run.style.attributes {
                    styled = match attribute {
                        Attribute::Bold => styled.bold(),
                        Attribute::Italic => styled.italic(),
                        Attribute::Underline => styled.underline(),
                    };
                }
                styled.to_string()
            })
            .collect()
    }
}

fn to_colored(color: &Color) -> Option<colored::Color> {
    match color {
        Color::Default => None,
        Color::Rgb(r, g, b) => Some(colored::Color::TrueColor {
            r: *r,
            g: *g,
            b: *b,
        }),
        Color::Named(name) => colored::Color::from_str(name).ok(),
    }
}

pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, text: &StyledText) -> String {
        text.plain()
    }
}

/// WezTerm-style format items serialized as JSON
pub struct JsonFormatter;

#[derive(Debug, Serialize)]
enum FormatItem<'a> {
    Background(ColorSpec),
    Foreground(ColorSpec),
    Attribute(AttributeChange),
    Text(&'a str),
    ResetAttributes,
}

#[derive(Debug, Serialize)]
enum ColorSpec {
    Color(String),
    Default,
}

impl From<&Color> for ColorSpec {
    fn from(color: &Color) -> Self {
        match color {
            Color::Default => ColorSpec::Default,
            other => ColorSpec::Color(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
enum AttributeChange {
    Intensity(&'static str),
    Italic(bool),
    Underline(&'static str),
}

impl Formatter for JsonFormatter {
    fn format(&self, text: &StyledText) -> String {
        let mut items = Vec::with_capacity(text.runs.len() * 4);
        for run in &text.runs {
            items.push(FormatItem::Background((&run.style.bg).into()));
            items.push(FormatItem::Foreground((&run.style.fg).into()));
            for attribute in &run.style.attributes {
                items.push(FormatItem::Attribute(match attribute {
                    Attribute::Bold => AttributeChange::Intensity("Bold"),
                    Attribute::Italic => AttributeChange::Italic(true),
                    Attribute::Underline => AttributeChange::Underline("Single"),
                }));
            }
            items.push(FormatItem::Text(&run.text));
            items.push(FormatItem::ResetAttributes);
        }

        serde_json::to_string(&items).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ansi,
    Plain,
    Json,
}

impl OutputFormat {
    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Ansi => Box::new(AnsiFormatter),
            OutputFormat::Plain => Box::new(PlainFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ansi" => Ok(OutputFormat::Ansi),
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown format `{}`, expected ansi, plain or json", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => should_use_colors(),
        }
    }

    /// Make `colored` follow this mode for the rest of the process
    pub fn apply(self) {
        colored::control::set_override(self.enabled());
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => bail!("unknown color mode `{}`, expected auto, always or never", other),
        }
    }
}

fn should_use_colors() -> bool {
    atty::is(atty::Stream::Stdout)
        && env::var("NO_COLOR").is_err()
        && env::var("TERM").map_or(true, |term| term != "dumb")
}
