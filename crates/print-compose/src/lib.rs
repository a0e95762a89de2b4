mod compose;
pub mod constants;
pub mod images;
pub mod render;
mod types;

pub use compose::{ComposedJob, build_document, compose, save_pdf};
pub use images::{DecodedImage, load_image, load_images};
pub use types::*;
