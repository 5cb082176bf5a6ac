//! Drawing and plain-text dumps for the addon step.

mod content;
mod dump;
mod render;

pub use content::help_text;
pub use dump::dump_step;
pub use render::draw;
