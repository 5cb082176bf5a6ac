//! Addon download shortcuts.
//!
//! The shipped list is embedded from `docs/addon-links.toml`; a TOML file with
//! the same shape can replace it at runtime.

mod index;
mod types;

pub use index::{addon_links, load_links, parse_links};
pub use types::{AddonLink, AddonLinkIndex};
