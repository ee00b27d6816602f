use crate::cells::{Cells, Group, Part, SegmentId, StyledText};
use crate::config::StatusOptions;
use crate::host::{Host, Pane, Window};
use crate::segments::{glyphs, BatterySegment, ClockSegment, DirectorySegment, GitSegment};
use crate::themes::{get_theme, Theme};
use crate::utils::debug;
use anyhow::{Context, Result};
use serde_json::Value;
use std::future::Future;
use std::io;
use std::time::Duration;

/// Shortest redraw interval accepted by `StatusBar::watch`
pub const MIN_WATCH_INTERVAL: Duration = Duration::from_millis(50);

/// Owns the cells and runs one update per tick
pub struct StatusBar<H: Host> {
    host: H,
    cells: Cells,
    options: StatusOptions,
    directory: DirectorySegment,
    git: GitSegment,
    clock: ClockSegment,
    battery: BatterySegment,
}

impl<H: Host> StatusBar<H> {
    /// Validate `raw_options` and register every cell.
    ///
    /// Invalid options fall back to their defaults; the problem is logged
    /// through the host and setup carries on.
    pub fn setup(host: H, raw_options: &Value) -> Result<Self> {
        let resolved = StatusOptions::resolve(raw_options);
        if let Some(error) = &resolved.error {
            host.log_error(&error.to_string());
        }

        let cells = register_cells(&get_theme()).context("Failed to register status cells")?;
        let options = resolved.options;

        Ok(Self {
            host,
            cells,
            clock: ClockSegment::new(options.date_format.clone()),
            options,
            directory: DirectorySegment::new(),
            git: GitSegment::new(),
            battery: BatterySegment::new(),
        })
    }

    /// Collect everything, write it into the cells and render the sequence
    /// for this tick
    pub async fn render_status(&mut self, pane: &impl Pane) -> Result<StyledText> {
        let battery = self.battery.get_battery_info(&self.host);
        let directory = self.directory.get_directory_info(&self.host, pane);
        let branch = match directory.path.as_deref() {
            Some(path) => self.git.get_branch(&self.host, Some(path)).await,
            None => None,
        };
        let time = self.clock.get_time(&self.host);

        let cells = &mut self.cells;
        cells.update_text(text_id(Group::Cwd), padded(&directory.basename))?;
        cells.update_text(text_id(Group::Hostname), padded(&directory.hostname))?;
        cells.update_text(text_id(Group::Git), branch.as_deref().map(padded).unwrap_or_default())?;
        cells.update_text(text_id(Group::Date), padded(&time))?;
        cells.update_text(SegmentId::new(Group::Battery, Part::Icon), padded(&battery.icon))?;
        cells.update_text(text_id(Group::Battery), padded(&battery.percentage))?;

        let order = Self::layout(branch.is_some());
        debug(&format!("rendering {} of {} cells", order.len(), self.cells.len()));

        Ok(self.cells.render(&order)?)
    }

    /// One tick: render and hand the formatted line to the window
    pub async fn update(&mut self, window: &impl Window, pane: &impl Pane) -> Result<()> {
        let styled = self.render_status(pane).await?;
        window.set_right_status(&self.host.format(&styled));
        Ok(())
    }

    /// Update on every interval tick until `shutdown` resolves.
    ///
    /// `shutdown` is polled across ticks, so a signal arriving during an
    /// update ends the loop once that update finishes.
    pub async fn watch<F>(
        &mut self,
        window: &impl Window,
        pane: &impl Pane,
        interval: Duration,
        shutdown: F,
    ) -> Result<()>
    where
        F: Future<Output = io::Result<()>>,
    {
        let mut ticker = tokio::time::interval(interval.max(MIN_WATCH_INTERVAL));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                result = &mut shutdown => {
                    return result.context("Failed to wait for shutdown");
                }
                _ = ticker.tick() => self.update(window, pane).await?,
            }
        }
    }

    /// Cells to render, in order; the git group only when a branch was found.
    ///
    /// A group following a skipped one opens with its bridge arrow, whose
    /// colors chain from the last group actually drawn.
    pub fn layout(has_branch: bool) -> Vec<SegmentId> {
        let mut order = Vec::with_capacity(Group::ALL.len() * Part::ALL.len());
        let mut skipped = false;

        for group in Group::ALL {
            if group.is_optional() && !has_branch {
                skipped = true;
                continue;
            }

            let mut ids = group.ids();
            if skipped {
                ids[0] = SegmentId::new(group, Part::Bridge);
                skipped = false;
            }
            order.extend(ids);
        }

        order
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn options(&self) -> &StatusOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

fn register_cells(theme: &Theme) -> Result<Cells, crate::cells::CellsError> {
    let mut cells = Cells::new();

    for group in Group::ALL {
        for id in group.ids() {
            let (text, style) = match id.part {
                Part::Separator | Part::Bridge => (glyphs::ARROW.to_string(), theme.separator_style(group)),
                Part::Icon => (padded(fixed_icon(group)), theme.cell_style(group, Part::Icon)),
                Part::Text => (String::new(), theme.cell_style(group, Part::Text)),
                Part::Padding => (" ".to_string(), theme.cell_style(group, Part::Padding)),
            };
            cells.register(id, text, style)?;
        }
    }

    // arrows used in place of a separator when the group before is skipped
    for group in Group::ALL {
        if let Some(skippable) = group.previous().filter(|previous| previous.is_optional()) {
            let style = theme.arrow_style(skippable.previous(), group);
            cells.register(SegmentId::new(group, Part::Bridge), glyphs::ARROW, style)?;
        }
    }

    Ok(cells)
}

fn fixed_icon(group: Group) -> &'static str {
    match group {
        Group::Cwd => glyphs::FOLDER,
        Group::Hostname => glyphs::HOST,
        Group::Git => glyphs::BRANCH,
        Group::Date => glyphs::CLOCK,
        // written on every tick from the charge level
        Group::Battery => "",
    }
}

fn text_id(group: Group) -> SegmentId {
    SegmentId::new(group, Part::Text)
}

/// Leading space before non-empty text
fn padded(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!(" {}", text)
    }
}
