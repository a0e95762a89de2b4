//! Sheet catalog
//!
//! Named physical sheet sizes and the ordered catalogs the sheet selector
//! walks through.

use crate::types::{LayoutError, Orientation, Result};
use std::fmt;

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A4,
    A3,
    A2,
    A1,
    A0,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width <= height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A2 => (420.0, 594.0),
            PaperSize::A1 => (594.0, 841.0),
            PaperSize::A0 => (841.0, 1189.0),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        let (short, long) = if w <= h { (w, h) } else { (h, w) };
        match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }

    /// Look up a standard size by name ("A4", "a3", ...)
    pub fn by_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "A4" => Ok(PaperSize::A4),
            "A3" => Ok(PaperSize::A3),
            "A2" => Ok(PaperSize::A2),
            "A1" => Ok(PaperSize::A1),
            "A0" => Ok(PaperSize::A0),
            _ => Err(LayoutError::UnknownSheetSize(name.to_string())),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperSize::A4 => f.write_str("A4"),
            PaperSize::A3 => f.write_str("A3"),
            PaperSize::A2 => f.write_str("A2"),
            PaperSize::A1 => f.write_str("A1"),
            PaperSize::A0 => f.write_str("A0"),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => write!(f, "{}x{}mm", width_mm, height_mm),
        }
    }
}

/// A paper size laid out in a particular orientation.
///
/// This is what the packer tiles onto: `width_mm`/`height_mm` already have
/// the orientation applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetSize {
    pub paper: PaperSize,
    pub orientation: Orientation,
}

impl SheetSize {
    pub fn new(paper: PaperSize, orientation: Orientation) -> Self {
        Self { paper, orientation }
    }

    pub fn portrait(paper: PaperSize) -> Self {
        Self::new(paper, Orientation::Portrait)
    }

    /// Case-insensitive catalog lookup, portrait orientation
    pub fn by_name(name: &str) -> Result<Self> {
        PaperSize::by_name(name).map(Self::portrait)
    }

    /// Same paper, different orientation
    pub fn oriented(self, orientation: Orientation) -> Self {
        Self::new(self.paper, orientation)
    }

    pub fn width_mm(&self) -> f32 {
        self.paper.dimensions_with_orientation(self.orientation).0
    }

    pub fn height_mm(&self) -> f32 {
        self.paper.dimensions_with_orientation(self.orientation).1
    }

    pub fn area_mm2(&self) -> f32 {
        let (w, h) = self.paper.dimensions_mm();
        w * h
    }

    pub fn name(&self) -> String {
        self.paper.to_string()
    }

    /// Whether an item of the given size fits in either orientation
    pub fn fits_either_way(&self, width_mm: f32, height_mm: f32) -> bool {
        let (w, h) = self.paper.dimensions_mm();
        (width_mm <= w && height_mm <= h) || (width_mm <= h && height_mm <= w)
    }
}

impl fmt::Display for SheetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.paper)
    }
}

// =============================================================================
// Catalogs
// =============================================================================

/// ISO A-series from smallest to largest
pub const ISO_A_SERIES: [PaperSize; 5] = [
    PaperSize::A4,
    PaperSize::A3,
    PaperSize::A2,
    PaperSize::A1,
    PaperSize::A0,
];

/// Sheets offered for business cards
pub const BUSINESS_CARD_SHEETS: [PaperSize; 2] = [PaperSize::A4, PaperSize::A3];

/// Portrait sheets for the given papers, ordered smallest to largest by area.
pub fn sorted_by_area(papers: &[PaperSize]) -> Vec<SheetSize> {
    let mut sheets: Vec<SheetSize> = papers.iter().copied().map(SheetSize::portrait).collect();
    sheets.sort_by(|a, b| a.area_mm2().total_cmp(&b.area_mm2()));
    sheets
}
