//! Sheet page rendering
//!
//! Draws one side of one printed sheet: every placement gets its image (or a
//! placeholder), optionally framed by a light cut guide.

use crate::constants::*;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use print_layout::constants::mm_to_pt;
use print_layout::layout::{GridLayout, PlacementRecord, Rect};

// =============================================================================
// Public API
// =============================================================================

/// Render one side of a sheet.
///
/// `images` holds the embedded XObject for each entry of the side's image
/// list; `None` entries (and records without an image) get a placeholder.
pub fn render_sheet_side(
    output: &mut Document,
    parent_pages_id: ObjectId,
    layout: &GridLayout,
    records: &[PlacementRecord],
    images: &[Option<ObjectId>],
    cut_borders: bool,
) -> Result<ObjectId> {
    let sheet_width_pt = mm_to_pt(layout.sheet.width_mm());
    let sheet_height_pt = mm_to_pt(layout.sheet.height_mm());

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet_width_pt),
            Object::Real(sheet_height_pt),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();
    let mut needs_font = false;

    for record in records {
        let rect = item_rect(layout, record);
        let xobject = record
            .image_index
            .and_then(|idx| images.get(idx).copied().flatten().map(|id| (idx, id)));

        match xobject {
            Some((idx, xobject_id)) => {
                let name = format!("Im{}", idx);
                xobjects.set(name.as_bytes(), Object::Reference(xobject_id));
                content_ops.push(image_placement_command(&name, &rect, record.rotate));

                if cut_borders && !layout.oversized {
                    content_ops.push(cut_border_ops(&rect));
                }
            }
            None => {
                let label = match record.image_index {
                    Some(idx) => format!("Image {} unavailable", idx + 1),
                    None => "No image".to_string(),
                };
                content_ops.push(placeholder_ops(&rect, &label));
                needs_font = true;
            }
        }
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));
    if needs_font {
        let font_id = output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(b"Helvetica".to_vec())),
        ]));
        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Reference(font_id));
        resources.set("Font", Object::Dictionary(fonts));
    }

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Where an item is drawn, in points.
///
/// Grid items use their placement. Oversized items are shrunk (never
/// enlarged) to fit inside the sheet less a margin, and centered.
pub fn item_rect(layout: &GridLayout, record: &PlacementRecord) -> Rect {
    if !layout.oversized {
        return record.bounds_pt(layout.item_width_mm, layout.item_height_mm);
    }

    let sheet_width = layout.sheet.width_mm();
    let sheet_height = layout.sheet.height_mm();
    let available_width = (sheet_width - 2.0 * OVERSIZED_MARGIN_MM).max(0.0);
    let available_height = (sheet_height - 2.0 * OVERSIZED_MARGIN_MM).max(0.0);

    let scale = (available_width / layout.item_width_mm)
        .min(available_height / layout.item_height_mm)
        .min(1.0);
    let width = layout.item_width_mm * scale;
    let height = layout.item_height_mm * scale;

    Rect::new(
        mm_to_pt((sheet_width - width) / 2.0),
        mm_to_pt((sheet_height - height) / 2.0),
        mm_to_pt(width),
        mm_to_pt(height),
    )
}

// =============================================================================
// Content Stream Operations
// =============================================================================

/// Place an image XObject so it fills `rect`.
///
/// A rotated image is turned 90° counterclockwise about the rect's
/// bottom-right corner, so it still covers exactly `rect`.
pub fn image_placement_command(xobject_name: &str, rect: &Rect, rotate: bool) -> String {
    if rotate {
        format!(
            "q 0 {} {} 0 {} {} cm /{} Do Q\n",
            rect.height,
            -rect.width,
            rect.right(),
            rect.y,
            xobject_name
        )
    } else {
        format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            rect.width, rect.height, rect.x, rect.y, xobject_name
        )
    }
}

/// Thin gray cut guide around an item
pub fn cut_border_ops(rect: &Rect) -> String {
    format!(
        "q {g} {g} {g} RG {w} w {} {} {} {} re S Q\n",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        g = CUT_BORDER_GRAY,
        w = CUT_BORDER_WIDTH,
    )
}

/// Filled gray box with a centered label, drawn in place of missing artwork.
///
/// Expects a Helvetica font resource named `F1`.
pub fn placeholder_ops(rect: &Rect, label: &str) -> String {
    let text_width = label.len() as f32 * PLACEHOLDER_FONT_SIZE * HELVETICA_CHAR_WIDTH_RATIO;
    let text_x = rect.x + (rect.width - text_width).max(0.0) / 2.0;
    let text_y = rect.y + (rect.height - PLACEHOLDER_FONT_SIZE).max(0.0) / 2.0;

    format!(
        "q {f} {f} {f} rg {b} {b} {b} RG {w} w {} {} {} {} re B \
         BT /F1 {size} Tf {l} {l} {l} rg {} {} Td ({}) Tj ET Q\n",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        text_x,
        text_y,
        escape_text(label),
        f = PLACEHOLDER_FILL_GRAY,
        b = PLACEHOLDER_BORDER_GRAY,
        w = PLACEHOLDER_BORDER_WIDTH,
        size = PLACEHOLDER_FONT_SIZE,
        l = PLACEHOLDER_LABEL_GRAY,
    )
}

fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}
