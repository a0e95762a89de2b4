//! PDF rendering for composed sheets
//!
//! This module handles all PDF-specific operations:
//! - Embedding decoded artwork as image XObjects
//! - Building sheet pages from placement records
//! - Cut guides and placeholder boxes

mod page;
mod xobject;

pub use page::*;
pub use xobject::{create_image_xobject, embed_images};
