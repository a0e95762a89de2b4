//! Layout calculation modules
//!
//! This module handles all the geometric calculations for tiling items:
//! - Grid packing (columns, rows, centering margins)
//! - Sheet selection (smallest sheet that packs efficiently)
//! - Orientation advice (turn an image to match its item)
//! - Placement sequencing (per-item positions, mirrored on the back)

mod grid;
mod orientation;
mod placement;
mod select;
mod types;

pub use grid::*;
pub use orientation::*;
pub use placement::*;
pub use select::*;
pub use types::*;
