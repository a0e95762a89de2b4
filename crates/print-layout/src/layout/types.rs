//! Layout data types
//!
//! These types carry the packer's output to the placement sequencer and,
//! from there, to the renderer.

use crate::catalog::SheetSize;
use crate::constants::mm_to_pt;
use crate::types::SheetSide;

/// The thing being tiled.
///
/// Bleed is added to the footprint on every side before packing; spacing
/// is the gap left between footprints.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub width_mm: f32,
    pub height_mm: f32,
    pub spacing_mm: f32,
    pub bleed_mm: f32,
}

impl ItemSpec {
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
            spacing_mm: 0.0,
            bleed_mm: 0.0,
        }
    }

    pub fn with_spacing(mut self, spacing_mm: f32) -> Self {
        self.spacing_mm = spacing_mm;
        self
    }

    pub fn with_bleed(mut self, bleed_mm: f32) -> Self {
        self.bleed_mm = bleed_mm;
        self
    }

    /// Footprint width including bleed on both sides
    pub fn effective_width_mm(&self) -> f32 {
        self.width_mm + 2.0 * self.bleed_mm
    }

    /// Footprint height including bleed on both sides
    pub fn effective_height_mm(&self) -> f32 {
        self.height_mm + 2.0 * self.bleed_mm
    }
}

/// Centering margins around the packed grid
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMargins {
    /// Left and right margin in mm
    pub horizontal_mm: f32,
    /// Top and bottom margin in mm
    pub vertical_mm: f32,
}

/// Grid of items on one sheet, as chosen by the packer.
///
/// Unless `oversized` is set, `cols * item_width + (cols - 1) * spacing`
/// fits inside the sheet width, and likewise for rows.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
    /// Items on one sheet (1 when oversized)
    pub items_per_sheet: usize,
    /// Centering margins
    pub margins: GridMargins,
    /// The sheet the grid was packed onto
    pub sheet: SheetSize,
    /// Item footprint width (bleed included)
    pub item_width_mm: f32,
    /// Item footprint height (bleed included)
    pub item_height_mm: f32,
    /// Gap between adjacent items
    pub spacing_mm: f32,
    /// Single centered item that does not tile on this sheet
    pub oversized: bool,
}

impl GridLayout {
    /// Width covered by the grid, spacing included
    pub fn occupied_width_mm(&self) -> f32 {
        self.cols as f32 * self.item_width_mm + (self.cols.saturating_sub(1)) as f32 * self.spacing_mm
    }

    /// Height covered by the grid, spacing included
    pub fn occupied_height_mm(&self) -> f32 {
        self.rows as f32 * self.item_height_mm + (self.rows.saturating_sub(1)) as f32 * self.spacing_mm
    }

    /// Sheets needed for `quantity` items
    pub fn total_sheets(&self, quantity: usize) -> usize {
        quantity.div_ceil(self.items_per_sheet.max(1))
    }

    /// Fraction of the sheet area covered by items; 0 when oversized
    pub fn efficiency(&self) -> f32 {
        if self.oversized {
            return 0.0;
        }
        let sheet_area = self.sheet.width_mm() * self.sheet.height_mm();
        (self.items_per_sheet as f32 * self.item_width_mm * self.item_height_mm) / sheet_area
    }

    /// Short grid description used in filenames and summaries
    pub fn grid_label(&self) -> String {
        if self.oversized {
            "oversized".to_string()
        } else {
            format!("{}x{}", self.cols, self.rows)
        }
    }
}

/// A rectangular area in points, bottom-left origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// One item instance on one sheet side.
///
/// `x_mm`/`y_mm` locate the bottom-left corner of the item footprint with
/// the origin at the sheet's bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRecord {
    /// Position in the overall sequence (0..quantity)
    pub item_index: usize,
    /// Zero-based sheet this item lands on
    pub sheet_index: usize,
    /// Grid row (0 = top)
    pub row: usize,
    /// Grid column on this side (0 = left; mirrored on the back)
    pub col: usize,
    pub x_mm: f32,
    pub y_mm: f32,
    /// Draw the image turned 90°
    pub rotate: bool,
    /// Source image, cycling through the list (`None` when there are no images)
    pub image_index: Option<usize>,
    pub side: SheetSide,
}

impl PlacementRecord {
    /// Item bounds in points for a footprint of the given size
    pub fn bounds_pt(&self, item_width_mm: f32, item_height_mm: f32) -> Rect {
        Rect::new(
            mm_to_pt(self.x_mm),
            mm_to_pt(self.y_mm),
            mm_to_pt(item_width_mm),
            mm_to_pt(item_height_mm),
        )
    }
}
