//! Grid packing
//!
//! Finds the column × row grid that puts the most items on a sheet and
//! centers it. When nothing tiles, falls back to a single centered item
//! flagged as oversized instead of failing.

use crate::catalog::SheetSize;
use crate::constants::FIT_TOLERANCE_MM;

use super::{GridLayout, GridMargins, ItemSpec};

// =============================================================================
// Packing
// =============================================================================

/// Pack an item onto a sheet.
///
/// Every `(cols, rows)` pair up to the bounds implied by the sheet is tried
/// and the first pair with the largest `cols * rows` wins. The result is
/// always a valid layout; check `oversized` to see whether the item tiled.
pub fn pack(item: &ItemSpec, sheet: SheetSize) -> GridLayout {
    let item_width = item.effective_width_mm();
    let item_height = item.effective_height_mm();
    let spacing = item.spacing_mm.max(0.0);
    let sheet_width = sheet.width_mm();
    let sheet_height = sheet.height_mm();

    if !(item_width > 0.0 && item_height > 0.0)
        || item_width > sheet_width + FIT_TOLERANCE_MM
        || item_height > sheet_height + FIT_TOLERANCE_MM
    {
        return oversized_layout(item, sheet);
    }

    let max_cols = max_count(sheet_width, item_width, spacing);
    let max_rows = max_count(sheet_height, item_height, spacing);

    let mut best: Option<(usize, usize, f32, f32)> = None;
    for cols in 1..=max_cols {
        for rows in 1..=max_rows {
            let total_width = span(cols, item_width, spacing);
            let total_height = span(rows, item_height, spacing);

            if total_width > sheet_width + FIT_TOLERANCE_MM
                || total_height > sheet_height + FIT_TOLERANCE_MM
            {
                continue;
            }

            let beats_best = match best {
                Some((c, r, _, _)) => cols * rows > c * r,
                None => true,
            };
            if beats_best {
                best = Some((cols, rows, total_width, total_height));
            }
        }
    }

    match best {
        Some((cols, rows, total_width, total_height)) => GridLayout {
            cols,
            rows,
            items_per_sheet: cols * rows,
            margins: GridMargins {
                horizontal_mm: ((sheet_width - total_width) / 2.0).max(0.0),
                vertical_mm: ((sheet_height - total_height) / 2.0).max(0.0),
            },
            sheet,
            item_width_mm: item_width,
            item_height_mm: item_height,
            spacing_mm: spacing,
            oversized: false,
        },
        None => oversized_layout(item, sheet),
    }
}

/// Place exactly one centered item per sheet.
///
/// Used where each sheet carries a single piece of artwork (canvas wraps).
/// Flagged oversized only when the item does not fit the sheet.
pub fn pack_single(item: &ItemSpec, sheet: SheetSize) -> GridLayout {
    let item_width = item.effective_width_mm();
    let item_height = item.effective_height_mm();
    let fits = item_width > 0.0
        && item_height > 0.0
        && item_width <= sheet.width_mm() + FIT_TOLERANCE_MM
        && item_height <= sheet.height_mm() + FIT_TOLERANCE_MM;

    GridLayout {
        oversized: !fits,
        spacing_mm: item.spacing_mm.max(0.0),
        ..oversized_layout(item, sheet)
    }
}

/// Single-item fallback centered on the sheet with non-negative margins.
fn oversized_layout(item: &ItemSpec, sheet: SheetSize) -> GridLayout {
    let item_width = item.effective_width_mm();
    let item_height = item.effective_height_mm();

    GridLayout {
        cols: 1,
        rows: 1,
        items_per_sheet: 1,
        margins: GridMargins {
            horizontal_mm: ((sheet.width_mm() - item_width) / 2.0).max(0.0),
            vertical_mm: ((sheet.height_mm() - item_height) / 2.0).max(0.0),
        },
        sheet,
        item_width_mm: item_width,
        item_height_mm: item_height,
        spacing_mm: item.spacing_mm.max(0.0),
        oversized: true,
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Upper bound on how many items fit along one axis
fn max_count(sheet_len: f32, item_len: f32, spacing: f32) -> usize {
    ((sheet_len + spacing + FIT_TOLERANCE_MM) / (item_len + spacing)).floor() as usize
}

/// Length covered by `count` items with gaps between them
fn span(count: usize, item_len: f32, spacing: f32) -> f32 {
    count as f32 * item_len + (count - 1) as f32 * spacing
}

// =============================================================================
// Tests
// =============================================================================
