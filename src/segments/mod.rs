pub mod battery;
pub mod clock;
pub mod directory;
pub mod git;

pub use battery::*;
pub use clock::*;
pub use directory::*;
pub use git::*;

/// Nerd Font glyphs of the fixed icons
pub mod glyphs {
    pub const ARROW: &str = "\u{e0b0}";
    pub const FOLDER: &str = "\u{f07c}";
    pub const HOST: &str = "\u{f108}";
    pub const BRANCH: &str = "\u{e0a0}";
    pub const CLOCK: &str = "\u{f017}";
}
