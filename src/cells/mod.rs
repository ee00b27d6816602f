//! Ordered registry of named, styled status line cells.
//!
//! Every visual piece of the status line (arrow separator, icon, text,
//! padding) is a cell. Cells are registered once with their style, have their
//! text replaced on every tick, and are rendered in whatever order the caller
//! asks for.

use crate::themes::Style;
use std::fmt;
use thiserror::Error;

/// A visual block of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Cwd,
    Hostname,
    Git,
    Date,
    Battery,
}

impl Group {
    /// Default visual order
    pub const ALL: [Group; 5] = [
        Group::Cwd,
        Group::Hostname,
        Group::Git,
        Group::Date,
        Group::Battery,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Group::Cwd => "cwd",
            Group::Hostname => "hostname",
            Group::Git => "git",
            Group::Date => "date",
            Group::Battery => "battery",
        }
    }

    /// The group's cells in render order
    pub fn ids(self) -> [SegmentId; 4] {
        Part::ALL.map(|part| SegmentId::new(self, part))
    }

    /// Groups left out of a render when they have nothing to show
    pub fn is_optional(self) -> bool {
        self == Group::Git
    }

    /// The group drawn before this one in the default order
    pub fn previous(self) -> Option<Group> {
        let index = Group::ALL.iter().position(|group| *group == self)?;
        index.checked_sub(1).map(|index| Group::ALL[index])
    }
}

/// The role of a cell inside its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Separator,
    Icon,
    Text,
    Padding,
    /// Arrow opening the group when the optional group before it is skipped
    Bridge,
}

impl Part {
    /// Parts drawn for every group, in render order
    pub const ALL: [Part; 4] = [Part::Separator, Part::Icon, Part::Text, Part::Padding];
    const SLOTS: usize = 5;

    pub fn name(self) -> &'static str {
        match self {
            Part::Separator => "separator",
            Part::Icon => "icon",
            Part::Text => "text",
            Part::Padding => "padding",
            Part::Bridge => "bridge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId {
    pub group: Group,
    pub part: Part,
}

impl SegmentId {
    /// Number of distinct ids
    pub const COUNT: usize = Group::ALL.len() * Part::SLOTS;

    pub const fn new(group: Group, part: Part) -> Self {
        Self { group, part }
    }

    fn slot(self) -> usize {
        self.group as usize * Part::SLOTS + self.part as usize
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.group.name(), self.part.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellsError {
    #[error("segment `{0}` is already registered")]
    Duplicate(SegmentId),
    #[error("segment `{0}` is not registered")]
    Unknown(SegmentId),
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub id: SegmentId,
    pub text: String,
    pub style: Style,
}

/// One run of text under a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
}

/// Concatenation of styled runs, handed to a formatter for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    pub runs: Vec<StyledRun>,
}

impl StyledText {
    /// Text of all runs without any styling
    pub fn plain(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

pub struct Cells {
    cells: Vec<Cell>,
    slots: [Option<usize>; SegmentId::COUNT],
}

impl Cells {
    pub fn new() -> Self {
        Self {
            cells: Vec::with_capacity(SegmentId::COUNT),
            slots: [None; SegmentId::COUNT],
        }
    }

    pub fn register(
        &mut self,
        id: SegmentId,
        text: impl Into<String>,
        style: Style,
    ) -> Result<(), CellsError> {
        let slot = &mut self.slots[id.slot()];
        if slot.is_some() {
            return Err(CellsError::Duplicate(id));
        }

        *slot = Some(self.cells.len());
        self.cells.push(Cell {
            id,
            text: text.into(),
            style,
        });
        Ok(())
    }

    pub fn update_text(&mut self, id: SegmentId, text: impl Into<String>) -> Result<(), CellsError> {
        let index = self.index(id)?;
        self.cells[index].text = text.into();
        Ok(())
    }

    /// Render the requested cells, in request order.
    ///
    /// Cells left out of `order` are skipped for this call only.
    pub fn render(&self, order: &[SegmentId]) -> Result<StyledText, CellsError> {
        let runs = order
            .iter()
            .map(|id| -> Result<StyledRun, CellsError> {
                let cell = &self.cells[self.index(*id)?];
                Ok(StyledRun {
                    text: cell.text.clone(),
                    style: cell.style.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StyledText { runs })
    }

    /// Render every cell in registration order
    pub fn render_all(&self) -> StyledText {
        StyledText {
            runs: self
                .cells
                .iter()
                .map(|cell| StyledRun {
                    text: cell.text.clone(),
                    style: cell.style.clone(),
                })
                .collect(),
        }
    }

    pub fn get(&self, id: SegmentId) -> Option<&Cell> {
        self.slots[id.slot()].map(|index| &self.cells[index])
    }

    pub fn text(&self, id: SegmentId) -> Option<&str> {
        self.get(id).map(|cell| cell.text.as_str())
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.cells.iter().map(|cell| cell.id)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, id: SegmentId) -> Result<usize, CellsError> {
        self.slots[id.slot()].ok_or(CellsError::Unknown(id))
    }
}

impl Default for Cells {
    fn default() -> Self {
        Self::new()
    }
}
