//! rollcore — shared library for the pianoroll gallery
//!
//! Pure geometry, colors, selection logic, and note data access shared by
//! the gallery application. Everything here is independent of a running UI
//! and testable on its own.

pub mod geometry;
pub mod gradient;
pub mod notes;
pub mod remote;
pub mod selection;
pub mod theme;

pub use geometry::RollGeometry;
pub use notes::Note;
pub use selection::{SelectionTool, TimeSelection};
