//! Drawing constants for composed sheets

// =============================================================================
// Cut Borders
// =============================================================================

/// Gray level of the cut guide drawn around each item
pub const CUT_BORDER_GRAY: f32 = 0.8;

/// Cut guide line width in points
pub const CUT_BORDER_WIDTH: f32 = 1.0;

// =============================================================================
// Placeholders
// =============================================================================

/// Fill gray for items whose image could not be drawn
pub const PLACEHOLDER_FILL_GRAY: f32 = 0.95;

/// Border gray for placeholders
pub const PLACEHOLDER_BORDER_GRAY: f32 = 0.7;

/// Placeholder border width in points
pub const PLACEHOLDER_BORDER_WIDTH: f32 = 1.0;

/// Gray level of the placeholder label text
pub const PLACEHOLDER_LABEL_GRAY: f32 = 0.5;

/// Placeholder label font size in points
pub const PLACEHOLDER_FONT_SIZE: f32 = 8.0;

/// Approximate width of a Helvetica character relative to font size
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

// =============================================================================
// Oversized Items
// =============================================================================

/// Clearance kept on every side when an oversized item is shrunk to the sheet (mm)
pub const OVERSIZED_MARGIN_MM: f32 = 5.0;
