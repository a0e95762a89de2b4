use crate::catalog::SheetSize;
use crate::layout::*;
use crate::options::{JobOptions, Quantity, SheetMode};
use crate::product::Product;
use crate::types::*;

/// Everything needed to render a job, computed up front
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobPlan {
    pub product: Product,
    /// Item as packed (bleed and spacing applied)
    pub item: ItemSpec,
    pub layout: GridLayout,
    pub efficiency: f32,
    /// Number of items to place per side
    pub quantity: usize,
    pub total_sheets: usize,
    pub double_sided: bool,
}

/// Plan a job: pick the sheet, pack the grid and count sheets.
///
/// Image lists are not required here, so this also serves stats-only runs.
/// Canvas wraps place one print per front image (or the requested quantity
/// when no images are listed).
pub fn plan_job(options: &JobOptions) -> Result<JobPlan> {
    options.validate_layout()?;

    let item = options.item_spec();
    let catalog = options.sorted_catalog();

    let choice = match (options.product, options.sheet_mode) {
        (Product::CanvasWrap, SheetMode::Auto) => select_fitting_sheet(&item, &catalog),
        (Product::CanvasWrap, SheetMode::Manual { paper, .. }) => {
            let sheet = SheetSize::portrait(paper).oriented(Orientation::of(
                item.effective_width_mm(),
                item.effective_height_mm(),
            ));
            select_fitting_sheet(&item, &[sheet])
        }
        (_, SheetMode::Auto) => select_best_sheet(&item, &catalog, &options.selection),
        (_, SheetMode::Manual { paper, orientation }) => {
            let layout = pack(&item, SheetSize::new(paper, orientation));
            Some(SheetChoice {
                sheet: layout.sheet,
                efficiency: layout.efficiency(),
                layout,
            })
        }
    }
    .ok_or_else(|| LayoutError::Config("Sheet catalog is empty".to_string()))?;

    let layout = choice.layout;
    let quantity = if options.product == Product::CanvasWrap && !options.front_images.is_empty() {
        options.front_images.len()
    } else {
        match options.quantity {
            Quantity::Items(n) => n,
            Quantity::Sheets(n) => n * layout.items_per_sheet,
        }
    };

    // Card sheet counts are capped directly; other products cap the items they expand to
    if options.product != Product::BusinessCard && quantity > options.max_quantity {
        return Err(LayoutError::InvalidQuantity {
            quantity,
            max: options.max_quantity,
        });
    }
    let total_sheets = layout.total_sheets(quantity);

    log::debug!(
        "planned {:?}: {} on {} ({}), {} per sheet, {} sheets, efficiency {:.1}%",
        options.product,
        quantity,
        layout.sheet,
        layout.grid_label(),
        layout.items_per_sheet,
        total_sheets,
        choice.efficiency * 100.0
    );

    Ok(JobPlan {
        product: options.product,
        item,
        layout,
        efficiency: choice.efficiency,
        quantity,
        total_sheets,
        double_sided: options.double_sided,
    })
}

impl JobPlan {
    /// Front-side placements
    pub fn front_placements(&self, image_count: usize) -> PlacementSequence<'static> {
        sequence(&self.layout, self.quantity, image_count, SheetSide::Front)
    }

    /// Back-side placements, columns mirrored
    pub fn back_placements(&self, image_count: usize) -> PlacementSequence<'static> {
        sequence(&self.layout, self.quantity, image_count, SheetSide::Back)
    }

    /// Pages in the output document
    pub fn page_count(&self) -> usize {
        if self.double_sided {
            self.total_sheets * 2
        } else {
            self.total_sheets
        }
    }

    pub fn summary(&self) -> LayoutSummary {
        LayoutSummary {
            sheet: self.layout.sheet.name(),
            orientation: self.layout.sheet.orientation,
            grid: self.layout.grid_label(),
            items_per_sheet: self.layout.items_per_sheet,
            quantity: self.quantity,
            total_sheets: self.total_sheets,
            efficiency_percent: (self.efficiency * 1000.0).round() / 10.0,
            oversized: self.layout.oversized,
            double_sided: self.double_sided,
        }
    }

    /// Suggested output filename.
    ///
    /// Item dimensions are the nominal ones, without bleed.
    pub fn filename(&self) -> String {
        let suffix = if self.double_sided { "-doublesided" } else { "" };
        let sheet = self.layout.sheet.name();

        match self.product {
            Product::BusinessCard => format!(
                "{}-{}-{}sheets{}.pdf",
                self.product.file_prefix(),
                sheet,
                self.total_sheets,
                suffix
            ),
            Product::CustomLayout => format!(
                "{}-{}x{}mm-{}-{}-{}sheets{}.pdf",
                self.product.file_prefix(),
                self.item.width_mm,
                self.item.height_mm,
                sheet,
                self.layout.grid_label(),
                self.total_sheets,
                suffix
            ),
            Product::CanvasWrap => format!(
                "{}-{}x{}mm-{}pcs.pdf",
                self.product.file_prefix(),
                self.item.width_mm,
                self.item.height_mm,
                self.quantity
            ),
        }
    }
}

/// Layout report for a job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutSummary {
    pub sheet: String,
    pub orientation: Orientation,
    pub grid: String,
    pub items_per_sheet: usize,
    pub quantity: usize,
    pub total_sheets: usize,
    /// Sheet utilization in percent, one decimal
    pub efficiency_percent: f32,
    pub oversized: bool,
    pub double_sided: bool,
}

impl LayoutSummary {
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize summary: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PaperSize;

    #[test]
    fn test_business_cards_by_sheet_count() {
        let mut options = JobOptions::for_product(Product::BusinessCard);
        options.quantity = Quantity::Sheets(3);

        let plan = plan_job(&options).unwrap();
        assert_eq!(plan.layout.items_per_sheet, 10);
        assert_eq!(plan.quantity, 30);
        assert_eq!(plan.total_sheets, 3);
        assert_eq!(plan.filename(), "business-cards-A4-3sheets.pdf");
    }

    #[test]
    fn test_custom_layout_filename() {
        let mut options = JobOptions::default();
        options.item_width_mm = 100.0;
        options.item_height_mm = 70.0;
        options.quantity = Quantity::Items(20);
        options.double_sided = true;

        let plan = plan_job(&options).unwrap();
        assert_eq!(plan.layout.sheet.paper, PaperSize::A4);
        assert_eq!(plan.total_sheets, 3);
        assert_eq!(plan.page_count(), 6);
        assert_eq!(
            plan.filename(),
            "custom-layout-100x70mm-A4-2x4-3sheets-doublesided.pdf"
        );
    }

    #[test]
    fn test_canvas_counts_images() {
        let mut options = JobOptions::for_product(Product::CanvasWrap);
        options.front_images = vec!["a.png".into(), "b.png".into()];

        let plan = plan_job(&options).unwrap();
        assert_eq!(plan.quantity, 2);
        assert_eq!(plan.total_sheets, 2);
        assert_eq!(plan.layout.sheet.paper, PaperSize::A2);
        assert_eq!(plan.layout.sheet.orientation, Orientation::Landscape);
        assert_eq!(plan.filename(), "canvas-wrap-400x300mm-2pcs.pdf");
    }

    #[test]
    fn test_summary_rounds_efficiency() {
        let options = JobOptions::for_product(Product::BusinessCard);
        let summary = plan_job(&options).unwrap().summary();

        // 10 × 90 × 50 / (210 × 297) = 72.15...%
        assert_eq!(summary.efficiency_percent, 72.2);
        assert_eq!(summary.grid, "2x5");
        assert!(!summary.oversized);
    }
}
