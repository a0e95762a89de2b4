//! Image orientation advice
//!
//! Decides whether turning an image 90° brings its aspect ratio closer to
//! the item it is printed on.

/// Result of comparing an image against its target item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAdvice {
    /// Turn the image 90° before drawing
    pub rotate: bool,
    /// Image width after the decision (pixels)
    pub final_width_px: u32,
    /// Image height after the decision (pixels)
    pub final_height_px: u32,
}

impl RotationAdvice {
    pub fn degrees(&self) -> u32 {
        if self.rotate { 90 } else { 0 }
    }
}

/// Compare the image's aspect ratio, as-is and turned, against the item's.
///
/// Ties keep the image unrotated. Zero-sized inputs never rotate.
pub fn decide_rotation(
    image_width_px: u32,
    image_height_px: u32,
    item_width_mm: f32,
    item_height_mm: f32,
) -> RotationAdvice {
    let rotate = needs_rotation(image_width_px, image_height_px, item_width_mm, item_height_mm);
    let (final_width_px, final_height_px) = if rotate {
        (image_height_px, image_width_px)
    } else {
        (image_width_px, image_height_px)
    };

    RotationAdvice {
        rotate,
        final_width_px,
        final_height_px,
    }
}

fn needs_rotation(
    image_width_px: u32,
    image_height_px: u32,
    item_width_mm: f32,
    item_height_mm: f32,
) -> bool {
    if image_width_px == 0 || image_height_px == 0 || item_width_mm <= 0.0 || item_height_mm <= 0.0
    {
        return false;
    }

    let item_aspect = f64::from(item_width_mm) / f64::from(item_height_mm);
    let image_aspect = f64::from(image_width_px) / f64::from(image_height_px);

    let landscape_diff = (image_aspect - item_aspect).abs();
    let portrait_diff = (1.0 / image_aspect - item_aspect).abs();

    portrait_diff < landscape_diff
}
