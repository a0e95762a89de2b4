//! Product policies
//!
//! Business cards, custom layouts and canvas wraps all run through the same
//! packer. What differs is configuration: which sheets are offered, the
//! accepted item range, the filename prefix and whether cut borders are drawn.

use crate::catalog::{BUSINESS_CARD_SHEETS, ISO_A_SERIES, PaperSize};
use crate::constants::{
    BUSINESS_CARD_HEIGHT_MM, BUSINESS_CARD_WIDTH_MM, ITEM_RANGE_MM,
    DEFAULT_CANVAS_EXTRA_MM, DEFAULT_CANVAS_THICKNESS_MM,
};
use crate::types::Orientation;

/// What is being printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Product {
    /// Fixed 90×50mm cards tiled on A4/A3
    BusinessCard,
    /// Arbitrary rectangle tiled on A4..A0
    #[default]
    CustomLayout,
    /// Stretched canvas print, one per sheet with wrap bleed
    CanvasWrap,
}

impl Product {
    /// Sheets offered for this product, smallest first
    pub fn default_catalog(self) -> &'static [PaperSize] {
        match self {
            Product::BusinessCard => &BUSINESS_CARD_SHEETS,
            Product::CustomLayout | Product::CanvasWrap => &ISO_A_SERIES,
        }
    }

    /// Accepted item width/height range in mm.
    ///
    /// Fixed-size products have no range; their size must match exactly.
    pub fn dimension_range(self) -> Option<(f32, f32)> {
        match self {
            Product::CustomLayout | Product::CanvasWrap => Some(ITEM_RANGE_MM),
            Product::BusinessCard => None,
        }
    }

    /// Nominal item size for products with a fixed size
    pub fn fixed_size_mm(self) -> Option<(f32, f32)> {
        match self {
            Product::BusinessCard => Some((BUSINESS_CARD_WIDTH_MM, BUSINESS_CARD_HEIGHT_MM)),
            Product::CustomLayout | Product::CanvasWrap => None,
        }
    }

    /// Prefix used in generated filenames
    pub fn file_prefix(self) -> &'static str {
        match self {
            Product::BusinessCard => "business-cards",
            Product::CustomLayout => "custom-layout",
            Product::CanvasWrap => "canvas-wrap",
        }
    }

    /// Whether a thin cutting guide is drawn around each item
    pub fn draws_cut_borders(self) -> bool {
        !matches!(self, Product::CanvasWrap)
    }

    /// Whether images are turned to match the item's aspect ratio
    pub fn rotates_images(self) -> bool {
        matches!(self, Product::CustomLayout)
    }
}

// =============================================================================
// Canvas Wrap
// =============================================================================

/// Wrap allowance for a stretched canvas
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasWrap {
    /// Depth of the stretcher frame the print wraps around
    pub thickness_mm: f32,
    /// Extra allowance for each 90° turn
    pub extra_mm: f32,
    /// Swap canvas width/height to match the first image's orientation
    pub auto_rotate: bool,
}

impl Default for CanvasWrap {
    fn default() -> Self {
        Self {
            thickness_mm: DEFAULT_CANVAS_THICKNESS_MM,
            extra_mm: DEFAULT_CANVAS_EXTRA_MM,
            auto_rotate: true,
        }
    }
}

impl CanvasWrap {
    /// Bleed added on every side of the visible canvas face
    pub fn total_bleed_mm(&self) -> f32 {
        self.thickness_mm + self.extra_mm
    }

    /// Printed size for a canvas face
    pub fn print_dimensions_mm(&self, width_mm: f32, height_mm: f32) -> (f32, f32) {
        let bleed = self.total_bleed_mm();
        (width_mm + 2.0 * bleed, height_mm + 2.0 * bleed)
    }
}

/// Canvas face size turned to match an image's orientation.
///
/// Returns the dimensions unchanged when the orientations already agree.
pub fn match_canvas_to_image(
    width_mm: f32,
    height_mm: f32,
    image_width_px: u32,
    image_height_px: u32,
) -> (f32, f32) {
    let canvas_landscape = width_mm > height_mm;
    let image_landscape = image_width_px > image_height_px;
    if canvas_landscape != image_landscape {
        (height_mm, width_mm)
    } else {
        (width_mm, height_mm)
    }
}

/// Standard canvas face sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CanvasPreset {
    /// 300×200mm, typically printed on A3
    Small,
    /// 400×300mm, typically printed on A2
    Medium,
    /// 600×400mm, typically printed on A1
    Large,
    /// 800×600mm, typically printed on A0
    ExtraLarge,
    /// 1200×800mm, larger than any catalog sheet
    Gallery,
    /// 300×300mm
    Square,
}

impl CanvasPreset {
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            CanvasPreset::Small => (300.0, 200.0),
            CanvasPreset::Medium => (400.0, 300.0),
            CanvasPreset::Large => (600.0, 400.0),
            CanvasPreset::ExtraLarge => (800.0, 600.0),
            CanvasPreset::Gallery => (1200.0, 800.0),
            CanvasPreset::Square => (300.0, 300.0),
        }
    }

    pub fn orientation(self) -> Orientation {
        let (w, h) = self.dimensions_mm();
        Orientation::of(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_bleed() {
        let wrap = CanvasWrap::default();
        assert_eq!(wrap.total_bleed_mm(), 40.0);
        assert_eq!(wrap.print_dimensions_mm(400.0, 300.0), (480.0, 380.0));
    }

    #[test]
    fn test_match_canvas_to_image() {
        // Portrait image swaps a landscape canvas
        assert_eq!(match_canvas_to_image(400.0, 300.0, 600, 900), (300.0, 400.0));
        // Landscape image keeps a landscape canvas
        assert_eq!(match_canvas_to_image(400.0, 300.0, 900, 600), (400.0, 300.0));
        // Landscape image swaps a portrait canvas
        assert_eq!(match_canvas_to_image(300.0, 400.0, 900, 600), (400.0, 300.0));
    }

    #[test]
    fn test_product_policies() {
        assert_eq!(Product::BusinessCard.default_catalog().len(), 2);
        assert_eq!(Product::CustomLayout.default_catalog().len(), 5);
        assert_eq!(Product::CustomLayout.dimension_range(), Some((10.0, 2000.0)));
        assert_eq!(Product::CanvasWrap.dimension_range(), Some((10.0, 2000.0)));
        assert_eq!(Product::BusinessCard.dimension_range(), None);
        assert_eq!(Product::BusinessCard.fixed_size_mm(), Some((90.0, 50.0)));
        assert!(!Product::CanvasWrap.draws_cut_borders());
        assert!(Product::CustomLayout.rotates_images());
        assert!(!Product::BusinessCard.rotates_images());
    }

    #[test]
    fn test_presets() {
        assert_eq!(CanvasPreset::Medium.dimensions_mm(), (400.0, 300.0));
        assert_eq!(CanvasPreset::Square.orientation(), Orientation::Portrait);
        assert_eq!(CanvasPreset::Gallery.orientation(), Orientation::Landscape);
    }
}
