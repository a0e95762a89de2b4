//! Sheet selection
//!
//! Walks a catalog from the smallest sheet upward and picks the first one
//! the item packs onto efficiently enough.

use crate::catalog::SheetSize;
use crate::constants::{
    DEFAULT_EFFICIENCY_THRESHOLD, LARGE_ITEM_CUTOFF_MM, LARGE_ITEM_EFFICIENCY_THRESHOLD,
};
use crate::types::Orientation;

use super::{GridLayout, ItemSpec, pack, pack_single};

/// Thresholds that decide when a sheet is good enough
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionPolicy {
    /// Accept a sheet once its efficiency is strictly above this
    pub efficiency_threshold: f32,
    /// Lower threshold for items with a side longer than the cutoff
    pub large_item: Option<LargeItemPolicy>,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            efficiency_threshold: DEFAULT_EFFICIENCY_THRESHOLD,
            large_item: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LargeItemPolicy {
    pub cutoff_mm: f32,
    pub efficiency_threshold: f32,
}

impl Default for LargeItemPolicy {
    fn default() -> Self {
        Self {
            cutoff_mm: LARGE_ITEM_CUTOFF_MM,
            efficiency_threshold: LARGE_ITEM_EFFICIENCY_THRESHOLD,
        }
    }
}

impl SelectionPolicy {
    pub fn with_threshold(efficiency_threshold: f32) -> Self {
        Self {
            efficiency_threshold,
            ..Default::default()
        }
    }

    /// Threshold that applies to this item
    pub fn threshold_for(&self, item: &ItemSpec) -> f32 {
        match self.large_item {
            Some(large)
                if item.effective_width_mm() > large.cutoff_mm
                    || item.effective_height_mm() > large.cutoff_mm =>
            {
                large.efficiency_threshold
            }
            _ => self.efficiency_threshold,
        }
    }
}

/// Outcome of sheet selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetChoice {
    pub layout: GridLayout,
    pub sheet: SheetSize,
    pub efficiency: f32,
}

impl SheetChoice {
    fn from_layout(layout: GridLayout) -> Self {
        Self {
            sheet: layout.sheet,
            efficiency: layout.efficiency(),
            layout,
        }
    }
}

/// Pick the best sheet for an item from a catalog ordered smallest first.
///
/// Returns the first sheet whose efficiency beats the threshold, or the
/// last catalog entry (oversized if need be). Returns `None` only for an
/// empty catalog.
pub fn select_best_sheet(
    item: &ItemSpec,
    catalog: &[SheetSize],
    policy: &SelectionPolicy,
) -> Option<SheetChoice> {
    let threshold = policy.threshold_for(item);
    let last = catalog.len().checked_sub(1)?;

    for (idx, &sheet) in catalog.iter().enumerate() {
        let choice = SheetChoice::from_layout(pack(item, sheet));
        log::debug!(
            "sheet {}: {} per sheet, efficiency {:.3} (threshold {:.3})",
            sheet,
            choice.layout.items_per_sheet,
            choice.efficiency,
            threshold
        );

        if choice.efficiency > threshold || idx == last {
            return Some(choice);
        }
    }

    None
}

/// Pick the smallest sheet that holds one item in either orientation.
///
/// The sheet is turned to match the item's shape and the item is centered
/// on it, one per sheet. Falls back to the largest entry when nothing fits.
pub fn select_fitting_sheet(item: &ItemSpec, catalog: &[SheetSize]) -> Option<SheetChoice> {
    let width = item.effective_width_mm();
    let height = item.effective_height_mm();

    let sheet = catalog
        .iter()
        .copied()
        .find(|sheet| sheet.fits_either_way(width, height))
        .or_else(|| catalog.last().copied())?;

    let sheet = sheet.oriented(Orientation::of(width, height));
    log::debug!("single-up sheet for {}x{}mm: {} {:?}", width, height, sheet, sheet.orientation);

    Some(SheetChoice::from_layout(pack_single(item, sheet)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ISO_A_SERIES, PaperSize, sorted_by_area};

    fn catalog() -> Vec<SheetSize> {
        sorted_by_area(&ISO_A_SERIES)
    }

    #[test]
    fn test_small_item_stops_at_a4() {
        let item = ItemSpec::new(100.0, 70.0).with_spacing(1.0);
        let choice = select_best_sheet(&item, &catalog(), &SelectionPolicy::default()).unwrap();

        assert_eq!(choice.sheet.paper, PaperSize::A4);
        assert_eq!(choice.layout.items_per_sheet, 8);
        assert!(choice.efficiency > 0.15);
    }

    #[test]
    fn test_skips_sheets_below_threshold() {
        // One 220x220 item on A3 covers ~39%; A4 cannot hold it at all.
        let item = ItemSpec::new(220.0, 220.0).with_spacing(1.0);
        let choice = select_best_sheet(&item, &catalog(), &SelectionPolicy::default()).unwrap();
        assert_eq!(choice.sheet.paper, PaperSize::A3);

        // A3 and A2 both sit near 39%; A1 holds 6 for ~58%.
        let choice =
            select_best_sheet(&item, &catalog(), &SelectionPolicy::with_threshold(0.5)).unwrap();
        assert_eq!(choice.sheet.paper, PaperSize::A1);
        assert_eq!(choice.layout.items_per_sheet, 6);
    }

    #[test]
    fn test_huge_item_falls_through_to_largest() {
        let item = ItemSpec::new(2500.0, 2500.0).with_spacing(1.0);
        let choice = select_best_sheet(&item, &catalog(), &SelectionPolicy::default()).unwrap();

        assert_eq!(choice.sheet.paper, PaperSize::A0);
        assert!(choice.layout.oversized);
        assert_eq!(choice.efficiency, 0.0);
    }

    #[test]
    fn test_large_item_policy_lowers_threshold() {
        let item = ItemSpec::new(600.0, 600.0);
        let strict = SelectionPolicy::with_threshold(0.9);
        let relaxed = SelectionPolicy {
            large_item: Some(LargeItemPolicy::default()),
            ..strict
        };

        assert_eq!(strict.threshold_for(&item), 0.9);
        assert_eq!(relaxed.threshold_for(&item), 0.10);
        assert_eq!(relaxed.threshold_for(&ItemSpec::new(90.0, 50.0)), 0.9);

        // 600x600 on A1 (594 wide) is oversized; on A0 it covers ~36%
        let choice = select_best_sheet(&item, &catalog(), &relaxed).unwrap();
        assert_eq!(choice.sheet.paper, PaperSize::A0);
        assert!(!choice.layout.oversized);
    }

    #[test]
    fn test_empty_catalog() {
        let item = ItemSpec::new(90.0, 50.0);
        assert!(select_best_sheet(&item, &[], &SelectionPolicy::default()).is_none());
        assert!(select_fitting_sheet(&item, &[]).is_none());
    }

    #[test]
    fn test_fitting_sheet_turns_to_match_item() {
        // 400x300 canvas with 40mm wrap → 480x380 print
        let item = ItemSpec::new(400.0, 300.0).with_bleed(40.0);
        let choice = select_fitting_sheet(&item, &catalog()).unwrap();

        assert_eq!(choice.sheet.paper, PaperSize::A2);
        assert_eq!(choice.sheet.orientation, Orientation::Landscape);
        assert_eq!(choice.layout.items_per_sheet, 1);
        assert!(!choice.layout.oversized);
        assert_eq!(choice.layout.margins.horizontal_mm, 57.0);
        assert_eq!(choice.layout.margins.vertical_mm, 20.0);
    }

    #[test]
    fn test_fitting_sheet_falls_back_to_largest() {
        let item = ItemSpec::new(1200.0, 800.0).with_bleed(40.0);
        let choice = select_fitting_sheet(&item, &catalog()).unwrap();

        assert_eq!(choice.sheet.paper, PaperSize::A0);
        assert!(choice.layout.oversized);
    }
}
