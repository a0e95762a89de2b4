//! Placement sequencing
//!
//! Turns a grid layout and a quantity into per-item placement records,
//! sheet by sheet in row-major order. Back sides mirror the columns so the
//! artwork lines up once the sheet is flipped on its vertical axis.

use std::iter::FusedIterator;

use crate::types::SheetSide;

use super::{GridLayout, PlacementRecord};

/// Lazy, finite sequence of placements for one sheet side.
///
/// A clone continues independently from the same position; calling
/// [`sequence`] again always starts from the first item.
#[derive(Debug, Clone)]
pub struct PlacementSequence<'a> {
    layout: GridLayout,
    quantity: usize,
    image_count: usize,
    side: SheetSide,
    rotations: &'a [bool],
    next_index: usize,
}

/// Start a placement sequence.
///
/// Image indices cycle through `0..image_count`; with no images every
/// record carries `image_index: None`.
pub fn sequence(
    layout: &GridLayout,
    quantity: usize,
    image_count: usize,
    side: SheetSide,
) -> PlacementSequence<'static> {
    PlacementSequence {
        layout: *layout,
        quantity,
        image_count,
        side,
        rotations: &[],
        next_index: 0,
    }
}

impl<'a> PlacementSequence<'a> {
    /// Per-image rotation flags, indexed like the image list.
    /// Images without an entry are drawn unrotated.
    pub fn with_rotations<'b>(self, rotations: &'b [bool]) -> PlacementSequence<'b> {
        PlacementSequence {
            layout: self.layout,
            quantity: self.quantity,
            image_count: self.image_count,
            side: self.side,
            rotations,
            next_index: self.next_index,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn side(&self) -> SheetSide {
        self.side
    }

    /// Sheets the full sequence spans
    pub fn sheet_count(&self) -> usize {
        self.layout.total_sheets(self.quantity)
    }

    fn record_at(&self, item_index: usize) -> PlacementRecord {
        let layout = &self.layout;
        let per_sheet = layout.items_per_sheet.max(1);
        let sheet_index = item_index / per_sheet;
        let within = item_index % per_sheet;
        let cols = layout.cols.max(1);

        let image_index = (self.image_count > 0).then(|| item_index % self.image_count);
        let rotate = image_index
            .and_then(|idx| self.rotations.get(idx).copied())
            .unwrap_or(false);

        let (row, col, x_mm, y_mm) = if layout.oversized {
            let x = ((layout.sheet.width_mm() - layout.item_width_mm) / 2.0).max(0.0);
            let y = ((layout.sheet.height_mm() - layout.item_height_mm) / 2.0).max(0.0);
            (0, 0, x, y)
        } else {
            let row = within / cols;
            let col = column_on_side(cols, within % cols, self.side);
            let x = layout.margins.horizontal_mm
                + col as f32 * (layout.item_width_mm + layout.spacing_mm);
            // Row 0 is the visual top; the page origin is bottom-left.
            let y = layout.sheet.height_mm()
                - layout.margins.vertical_mm
                - row as f32 * (layout.item_height_mm + layout.spacing_mm)
                - layout.item_height_mm;
            (row, col, x, y)
        };

        PlacementRecord {
            item_index,
            sheet_index,
            row,
            col,
            x_mm,
            y_mm,
            rotate,
            image_index,
            side: self.side,
        }
    }
}

impl Iterator for PlacementSequence<'_> {
    type Item = PlacementRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.quantity {
            return None;
        }
        let record = self.record_at(self.next_index);
        self.next_index += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.quantity.saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlacementSequence<'_> {}

impl FusedIterator for PlacementSequence<'_> {}

/// Physical column for a grid column on the given side
pub fn column_on_side(cols: usize, col: usize, side: SheetSide) -> usize {
    match side {
        SheetSide::Front => col,
        SheetSide::Back => cols - 1 - col,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PaperSize, SheetSize};
    use crate::layout::{GridMargins, ItemSpec, pack};

    fn grid(cols: usize, rows: usize) -> GridLayout {
        GridLayout {
            cols,
            rows,
            items_per_sheet: cols * rows,
            margins: GridMargins {
                horizontal_mm: 10.0,
                vertical_mm: 20.0,
            },
            sheet: SheetSize::portrait(PaperSize::A4),
            item_width_mm: 50.0,
            item_height_mm: 40.0,
            spacing_mm: 1.0,
            oversized: false,
        }
    }

    #[test]
    fn test_partial_single_sheet() {
        let records: Vec<_> = sequence(&grid(2, 5), 7, 3, SheetSide::Front).collect();

        assert_eq!(records.len(), 7);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.item_index, i);
            assert_eq!(record.sheet_index, 0);
            assert_eq!(record.row, i / 2);
            assert_eq!(record.col, i % 2);
            assert_eq!(record.image_index, Some(i % 3));
        }
    }

    #[test]
    fn test_spills_onto_next_sheet() {
        let records: Vec<_> = sequence(&grid(2, 2), 9, 1, SheetSide::Front).collect();

        let sheets: Vec<usize> = records.iter().map(|r| r.sheet_index).collect();
        assert_eq!(sheets, vec![0, 0, 0, 0, 1, 1, 1, 1, 2]);
        assert_eq!((records[4].row, records[4].col), (0, 0));
        assert_eq!(records[8].image_index, Some(0));
    }

    #[test]
    fn test_front_positions() {
        let layout = grid(2, 5);
        let records: Vec<_> = sequence(&layout, 4, 1, SheetSide::Front).collect();

        // Top-left item
        assert_eq!(records[0].x_mm, 10.0);
        assert_eq!(records[0].y_mm, 297.0 - 20.0 - 40.0);
        // Second column
        assert_eq!(records[1].x_mm, 10.0 + 51.0);
        // Second row sits one pitch lower
        assert_eq!(records[2].y_mm, 297.0 - 20.0 - 41.0 - 40.0);
    }

    #[test]
    fn test_back_mirrors_columns() {
        let layout = grid(3, 2);
        let front: Vec<_> = sequence(&layout, 6, 1, SheetSide::Front).collect();
        let back: Vec<_> = sequence(&layout, 6, 1, SheetSide::Back).collect();

        let back_cols: Vec<usize> = back.iter().take(3).map(|r| r.col).collect();
        assert_eq!(back_cols, vec![2, 1, 0]);

        for (f, b) in front.iter().zip(&back) {
            assert_eq!(f.row, b.row);
            assert_eq!(f.y_mm, b.y_mm);
            assert_eq!(b.side, SheetSide::Back);
        }
        assert_eq!(back[0].x_mm, front[2].x_mm);
        assert_eq!(back[1].x_mm, front[1].x_mm);
        assert_eq!(back[2].x_mm, front[0].x_mm);
    }

    #[test]
    fn test_column_on_side() {
        assert_eq!(column_on_side(3, 0, SheetSide::Back), 2);
        assert_eq!(column_on_side(3, 1, SheetSide::Back), 1);
        assert_eq!(column_on_side(3, 2, SheetSide::Back), 0);
        assert_eq!(column_on_side(3, 2, SheetSide::Front), 2);
    }

    #[test]
    fn test_oversized_is_centered_and_not_mirrored() {
        let sheet = SheetSize::portrait(PaperSize::A4);
        let layout = pack(&ItemSpec::new(150.0, 400.0), sheet);
        assert!(layout.oversized);

        for side in [SheetSide::Front, SheetSide::Back] {
            let records: Vec<_> = sequence(&layout, 3, 2, side).collect();
            assert_eq!(records.len(), 3);
            for (i, record) in records.iter().enumerate() {
                assert_eq!(record.sheet_index, i);
                assert_eq!((record.row, record.col), (0, 0));
                assert_eq!(record.x_mm, 30.0);
                assert_eq!(record.y_mm, 0.0);
            }
        }
    }

    #[test]
    fn test_rotations_follow_images() {
        let rotations = [true, false];
        let records: Vec<_> = sequence(&grid(2, 2), 4, 2, SheetSide::Front)
            .with_rotations(&rotations)
            .collect();

        let rotate: Vec<bool> = records.iter().map(|r| r.rotate).collect();
        assert_eq!(rotate, vec![true, false, true, false]);
    }

    #[test]
    fn test_no_images() {
        let records: Vec<_> = sequence(&grid(2, 2), 3, 0, SheetSide::Front).collect();
        assert!(records.iter().all(|r| r.image_index.is_none() && !r.rotate));
    }

    #[test]
    fn test_zero_quantity_is_empty() {
        assert_eq!(sequence(&grid(2, 2), 0, 1, SheetSide::Front).count(), 0);
    }

    #[test]
    fn test_exact_size_and_restart() {
        let seq = sequence(&grid(2, 5), 23, 4, SheetSide::Back);
        assert_eq!(seq.len(), 23);
        assert_eq!(seq.sheet_count(), 3);

        let first: Vec<_> = seq.clone().collect();
        let second: Vec<_> = seq.collect();
        assert_eq!(first, second);
    }
}
