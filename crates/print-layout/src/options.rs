use crate::catalog::{PaperSize, SheetSize, sorted_by_area};
use crate::constants::{DEFAULT_MAX_QUANTITY, DEFAULT_SPACING_MM, FIT_TOLERANCE_MM};
use crate::layout::{ItemSpec, SelectionPolicy};
use crate::product::{CanvasWrap, Product, match_canvas_to_image};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many items to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quantity {
    /// Exact number of items
    Items(usize),
    /// Whole sheets; every sheet is filled
    Sheets(usize),
}

impl Quantity {
    /// The number the user asked for, whichever unit it is in
    pub fn requested(self) -> usize {
        match self {
            Quantity::Items(n) | Quantity::Sheets(n) => n,
        }
    }
}

/// Sheet selection mode
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SheetMode {
    /// Smallest catalog sheet that packs efficiently
    Auto,
    /// A specific sheet from the catalog
    Manual {
        paper: PaperSize,
        orientation: Orientation,
    },
}

/// Order of back pages in a double-sided job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplexOrder {
    /// All fronts, then all backs
    #[default]
    Appended,
    /// Front and back of each sheet next to each other
    Interleaved,
}

/// Full description of one print job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobOptions {
    // Input
    pub front_images: Vec<PathBuf>,
    pub back_images: Vec<PathBuf>,

    // Item
    pub product: Product,
    pub item_width_mm: f32,
    pub item_height_mm: f32,
    pub spacing_mm: f32,
    pub bleed_mm: f32,
    pub canvas: CanvasWrap,

    // Quantity
    pub quantity: Quantity,
    pub max_quantity: usize,

    // Sheets
    pub sheet_mode: SheetMode,
    pub catalog: Vec<PaperSize>,
    pub selection: SelectionPolicy,

    // Output
    pub double_sided: bool,
    pub duplex_order: DuplexOrder,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self::for_product(Product::CustomLayout)
    }
}

impl JobOptions {
    /// Defaults for a product: its catalog, nominal size and spacing
    pub fn for_product(product: Product) -> Self {
        let (item_width_mm, item_height_mm) = match product {
            Product::BusinessCard => product.fixed_size_mm().unwrap_or((90.0, 50.0)),
            Product::CustomLayout => (100.0, 70.0),
            Product::CanvasWrap => (400.0, 300.0),
        };
        let (spacing_mm, sheet_mode, quantity) = match product {
            Product::BusinessCard => (
                DEFAULT_SPACING_MM,
                SheetMode::Manual {
                    paper: PaperSize::A4,
                    orientation: Orientation::Portrait,
                },
                Quantity::Sheets(1),
            ),
            Product::CustomLayout => (DEFAULT_SPACING_MM, SheetMode::Auto, Quantity::Items(50)),
            Product::CanvasWrap => (0.0, SheetMode::Auto, Quantity::Items(1)),
        };

        Self {
            front_images: Vec::new(),
            back_images: Vec::new(),
            product,
            item_width_mm,
            item_height_mm,
            spacing_mm,
            bleed_mm: 0.0,
            canvas: CanvasWrap::default(),
            quantity,
            max_quantity: DEFAULT_MAX_QUANTITY,
            sheet_mode,
            catalog: product.default_catalog().to_vec(),
            selection: SelectionPolicy::default(),
            double_sided: false,
            duplex_order: DuplexOrder::default(),
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// The item the packer tiles
    pub fn item_spec(&self) -> ItemSpec {
        match self.product {
            Product::CanvasWrap => ItemSpec::new(self.item_width_mm, self.item_height_mm)
                .with_bleed(self.canvas.total_bleed_mm()),
            Product::BusinessCard | Product::CustomLayout => {
                ItemSpec::new(self.item_width_mm, self.item_height_mm)
                    .with_spacing(self.spacing_mm)
                    .with_bleed(self.bleed_mm)
            }
        }
    }

    /// Catalog sheets ordered smallest first
    pub fn sorted_catalog(&self) -> Vec<SheetSize> {
        sorted_by_area(&self.catalog)
    }

    /// Turn a canvas to match the first image's orientation when auto-rotate is on.
    ///
    /// Returns true when the canvas dimensions were swapped.
    pub fn match_canvas_to_image(&mut self, image_width_px: u32, image_height_px: u32) -> bool {
        if self.product != Product::CanvasWrap || !self.canvas.auto_rotate {
            return false;
        }
        let (w, h) = match_canvas_to_image(
            self.item_width_mm,
            self.item_height_mm,
            image_width_px,
            image_height_px,
        );
        let swapped = (w, h) != (self.item_width_mm, self.item_height_mm);
        self.item_width_mm = w;
        self.item_height_mm = h;
        swapped
    }

    /// Validate the options, including the image lists
    pub fn validate(&self) -> Result<()> {
        if self.front_images.is_empty() {
            return Err(LayoutError::NoImages);
        }
        if self.double_sided && self.back_images.is_empty() {
            return Err(LayoutError::MissingBackImages);
        }
        self.validate_layout()
    }

    /// Validate everything the layout engine depends on
    pub fn validate_layout(&self) -> Result<()> {
        self.validate_dimensions()?;
        self.validate_quantity()?;
        self.validate_sheets()
    }

    fn validate_dimensions(&self) -> Result<()> {
        let (w, h) = (self.item_width_mm, self.item_height_mm);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(LayoutError::InvalidDimension(format!(
                "item size {}x{}mm must be positive",
                w, h
            )));
        }

        if let Some((fixed_w, fixed_h)) = self.product.fixed_size_mm() {
            let matches = |a: f32, b: f32| {
                (a - fixed_w).abs() <= FIT_TOLERANCE_MM && (b - fixed_h).abs() <= FIT_TOLERANCE_MM
            };
            if !(matches(w, h) || matches(h, w)) {
                return Err(LayoutError::InvalidDimension(format!(
                    "{:?} items are {}x{}mm, got {}x{}mm",
                    self.product, fixed_w, fixed_h, w, h
                )));
            }
        }

        if let Some((min, max)) = self.product.dimension_range() {
            if w < min || h < min || w > max || h > max {
                return Err(LayoutError::InvalidDimension(format!(
                    "item size {}x{}mm must be between {}-{}mm",
                    w, h, min, max
                )));
            }
        }

        for (name, value) in [
            ("spacing", self.spacing_mm),
            ("bleed", self.bleed_mm),
            ("canvas thickness", self.canvas.thickness_mm),
            ("canvas extra", self.canvas.extra_mm),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::InvalidDimension(format!(
                    "{} must be zero or more, got {}mm",
                    name, value
                )));
            }
        }

        Ok(())
    }

    fn validate_quantity(&self) -> Result<()> {
        // Canvas wraps print one sheet per image
        let requested = if self.product == Product::CanvasWrap && !self.front_images.is_empty() {
            self.front_images.len()
        } else {
            self.quantity.requested()
        };
        if requested == 0 || requested > self.max_quantity {
            return Err(LayoutError::InvalidQuantity {
                quantity: requested,
                max: self.max_quantity,
            });
        }
        Ok(())
    }

    fn validate_sheets(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(LayoutError::Config("Sheet catalog is empty".to_string()));
        }

        let threshold = self.selection.efficiency_threshold;
        if !(0.0..1.0).contains(&threshold) {
            return Err(LayoutError::Config(format!(
                "Efficiency threshold must be in [0, 1), got {}",
                threshold
            )));
        }

        if let Some(large) = &self.selection.large_item {
            if !(0.0..1.0).contains(&large.efficiency_threshold) {
                return Err(LayoutError::Config(format!(
                    "Large-item efficiency threshold must be in [0, 1), got {}",
                    large.efficiency_threshold
                )));
            }
            if !(large.cutoff_mm.is_finite() && large.cutoff_mm > 0.0) {
                return Err(LayoutError::Config(format!(
                    "Large-item cutoff must be positive, got {}mm",
                    large.cutoff_mm
                )));
            }
        }

        if let SheetMode::Manual { paper, .. } = self.sheet_mode {
            if !self.catalog.contains(&paper) {
                return Err(LayoutError::UnknownSheetSize(paper.to_string()));
            }
        }

        Ok(())
    }
}
