pub mod cells;
pub mod config;
pub mod host;
pub mod render;
pub mod segments;
pub mod status;
pub mod themes;
pub mod utils;

pub use cells::*;
pub use config::*;
pub use host::*;
pub use render::*;
pub use segments::*;
pub use status::*;
pub use themes::*;
pub use utils::*;
