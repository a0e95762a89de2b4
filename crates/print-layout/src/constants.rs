//! Shared constants for sheet layout
//!
//! This module centralizes unit conversion and the policy defaults that
//! product variants share.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.834645669

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Packing
// =============================================================================

/// Gap left between adjacent items on a sheet (mm)
pub const DEFAULT_SPACING_MM: f32 = 1.0;

/// Slack allowed when testing whether a grid fits a sheet (mm).
/// Keeps exact fits such as 2 × 104.5 + 1 = 210 from failing on float rounding.
pub const FIT_TOLERANCE_MM: f32 = 1e-3;

// =============================================================================
// Sheet Selection
// =============================================================================

/// Minimum area utilization for a sheet to be accepted in auto mode
pub const DEFAULT_EFFICIENCY_THRESHOLD: f32 = 0.15;

/// Item side length above which the large-item threshold applies (mm)
pub const LARGE_ITEM_CUTOFF_MM: f32 = 500.0;

/// Relaxed utilization threshold for large items
pub const LARGE_ITEM_EFFICIENCY_THRESHOLD: f32 = 0.10;

// =============================================================================
// Request Limits
// =============================================================================

/// Upper bound on the number of items (or sheets) in one job
pub const DEFAULT_MAX_QUANTITY: usize = 10_000;

/// Accepted item dimension range for custom layouts and canvas faces (mm)
pub const ITEM_RANGE_MM: (f32, f32) = (10.0, 2000.0);

// =============================================================================
// Products
// =============================================================================

/// Standard business card width (mm)
pub const BUSINESS_CARD_WIDTH_MM: f32 = 90.0;

/// Standard business card height (mm)
pub const BUSINESS_CARD_HEIGHT_MM: f32 = 50.0;

/// Default canvas frame depth wrapped around the stretcher bars (mm)
pub const DEFAULT_CANVAS_THICKNESS_MM: f32 = 35.0;

/// Extra allowance for each 90° canvas turn (mm)
pub const DEFAULT_CANVAS_EXTRA_MM: f32 = 5.0;
