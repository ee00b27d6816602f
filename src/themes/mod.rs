use crate::cells::{Group, Part};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A renderer color: terminal default, 24-bit RGB or an ANSI color name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Default,
    Rgb(u8, u8, u8),
    Named(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("invalid hex color `{0}`, expected #rrggbb")]
    Hex(String),
    #[error("unknown color name `{0}`")]
    Name(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("default") {
            return Ok(Color::Default);
        }

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(ParseColorError::Hex(s.to_string()));
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError::Hex(s.to_string()))
            };
            return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        // colored knows the ANSI names, including the "bright" variants
        colored::Color::from_str(s)
            .map(|_| Color::Named(s.to_lowercase()))
            .map_err(|_| ParseColorError::Name(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Default => f.write_str("Default"),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Bold,
    Italic,
    Underline,
}

/// Foreground, background and text attributes of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attributes: Vec<Attribute>,
}

impl Style {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            attributes: Vec::new(),
        }
    }

    pub fn with(mut self, attribute: Attribute) -> Self {
        if !self.attributes.contains(&attribute) {
            self.attributes.push(attribute);
        }
        self
    }

    pub fn has(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Color::Default, Color::Default)
    }
}

/// Block colors of one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupColors {
    pub bg: Color,
    pub fg: Color,
}

pub struct Theme {
    colors: Vec<(Group, GroupColors)>,
}

impl Theme {
    pub fn get_colors(&self, group: Group) -> Option<&GroupColors> {
        self.colors
            .iter()
            .find(|(candidate, _)| *candidate == group)
            .map(|(_, colors)| colors)
    }

    fn background(&self, group: Group) -> Color {
        self.get_colors(group)
            .map(|colors| colors.bg.clone())
            .unwrap_or(Color::Default)
    }

    /// Style of the arrow glyph opening `group`.
    ///
    /// The arrow is drawn in the previous group's background over this
    /// group's background, which makes the blocks appear to flow into each
    /// other. The chain follows the full registration order and is fixed at
    /// setup.
    pub fn separator_style(&self, group: Group) -> Style {
        self.arrow_style(group.previous(), group)
    }

    /// Style of the arrow opening `group` when the block before it is `previous`
    pub fn arrow_style(&self, previous: Option<Group>, group: Group) -> Style {
        let fg = previous
            .map(|previous| self.background(previous))
            .unwrap_or(Color::Default);

        Style::new(fg, self.background(group))
    }

    /// Style of a non-separator cell in `group`
    pub fn cell_style(&self, group: Group, part: Part) -> Style {
        let (bg, fg) = match self.get_colors(group) {
            Some(colors) => (colors.bg.clone(), colors.fg.clone()),
            None => (Color::Default, Color::Default),
        };

        let style = Style::new(fg, bg);
        match (group, part) {
            (_, Part::Icon) => style.with(Attribute::Bold),
            (Group::Cwd, Part::Text) | (Group::Git, Part::Text) => style.with(Attribute::Bold),
            (Group::Date, Part::Text) => style.with(Attribute::Italic),
            _ => style,
        }
    }
}

pub fn get_theme() -> Theme {
    dark_theme()
}

fn dark_theme() -> Theme {
    let palette = [
        (Group::Cwd, "#2d3748", "#e2e8f0"),
        (Group::Hostname, "#3182ce", "#f7fafc"),
        (Group::Git, "#38a169", "#f7fafc"),
        (Group::Date, "#d69e2e", "#1a202c"),
        (Group::Battery, "#805ad5", "#f7fafc"),
    ];

    let colors = palette
        .iter()
        .map(|(group, bg, fg)| {
            (
                *group,
                GroupColors {
                    bg: hex(bg),
                    fg: hex(fg),
                },
            )
        })
        .collect();

    Theme { colors }
}

fn hex(color: &str) -> Color {
    color.parse().unwrap_or(Color::Default)
}
