//! Image loading
//!
//! Artwork is read with tokio and decoded on the blocking pool. A file that
//! cannot be read or decoded is logged and left out; the renderer draws a
//! placeholder in its place.

use crate::types::*;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Decoded artwork as 8-bit RGB
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub path: PathBuf,
    pub width_px: u32,
    pub height_px: u32,
    /// Row-major RGB triplets
    pub rgb: Vec<u8>,
}

impl DecodedImage {
    pub fn from_dynamic(path: impl Into<PathBuf>, image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        Self {
            path: path.into(),
            width_px: rgb.width(),
            height_px: rgb.height(),
            rgb: rgb.into_raw(),
        }
    }
}

/// Load and decode a single image
pub async fn load_image(path: impl AsRef<Path>) -> Result<DecodedImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let decoded = tokio::task::spawn_blocking(move || {
        let image = image::load_from_memory(&bytes)?;
        Ok::<_, ComposeError>(DecodedImage::from_dynamic(path, &image))
    })
    .await??;
    Ok(decoded)
}

/// Load every image in order.
///
/// The result has one slot per path; failed entries are `None`.
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Vec<Option<DecodedImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match load_image(path).await {
            Ok(image) => {
                log::debug!(
                    "loaded {} ({}x{}px)",
                    path.display(),
                    image.width_px,
                    image.height_px
                );
                images.push(Some(image));
            }
            Err(e) => {
                log::warn!("Could not load {}: {}", path.display(), e);
                images.push(None);
            }
        }
    }
    images
}
