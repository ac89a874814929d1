//! pilcrow keeps a living help document as a two-level tree of numbered sections.
//!
//! Sections carry their position in their label ("2 Setup", "2.1 Install"); the
//! label is the ordering, so a collection is just a flat map of sections with
//! optional parent links. Everything else derives from that: [`renumber`]
//! restores contiguous numbering after edits, [`hierarchy`] rebuilds adjacency
//! for display, [`search`] filters without orphaning matches, and [`export`]
//! flattens the tree to HTML. The [`app_state`] and [`ui`] modules wrap it all
//! in a terminal interface backed by a pluggable [`store`].
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod error;
pub mod export;
pub mod hierarchy;
pub mod label;
pub mod outline;
pub mod renumber;
pub mod search;
pub mod section;
pub mod store;
pub mod ui;

pub use error::{StoreError, ValidationError};
pub use outline::Outline;
pub use section::{Depth, Section, SectionId};
