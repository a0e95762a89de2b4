use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("Invalid quantity {quantity} (must be between 1 and {max})")]
    InvalidQuantity { quantity: usize, max: usize },
    #[error("Unknown sheet size: {0}")]
    UnknownSheetSize(String),
    #[error("No front images provided")]
    NoImages,
    #[error("Back images required for double-sided printing")]
    MissingBackImages,
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Sheet orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height >= width (catalog entries are stored this way)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

impl Orientation {
    /// Orientation implied by a width/height pair. Squares count as portrait.
    pub fn of(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    #[default]
    Front,
    /// Back of the sheet; columns are mirrored so items line up after a flip
    Back,
}
