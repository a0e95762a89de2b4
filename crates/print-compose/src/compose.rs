//! Document assembly
//!
//! Loads the artwork, plans the job and writes every sheet side into a single
//! PDF. Backs are appended after all fronts unless the job asks for
//! interleaved duplex order.

use crate::images::{DecodedImage, load_images};
use crate::render::{embed_images, render_sheet_side};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use print_layout::layout::{PlacementRecord, decide_rotation};
use print_layout::{DuplexOrder, JobOptions, JobPlan, plan_job};
use std::path::Path;

/// A rendered job and the plan it was built from
#[derive(Debug)]
pub struct ComposedJob {
    pub document: Document,
    pub plan: JobPlan,
}

/// Load images, plan the layout and build the document
pub async fn compose(options: &JobOptions) -> Result<ComposedJob> {
    options.validate()?;

    let fronts = load_images(&options.front_images).await;
    let backs = if options.double_sided {
        load_images(&options.back_images).await
    } else {
        Vec::new()
    };

    let mut options = options.clone();
    if let Some(first) = fronts.iter().flatten().next() {
        if options.match_canvas_to_image(first.width_px, first.height_px) {
            log::info!(
                "Canvas turned to {}x{}mm to match {}",
                options.item_width_mm,
                options.item_height_mm,
                first.path.display()
            );
        }
    }

    let plan = plan_job(&options)?;
    let duplex_order = options.duplex_order;
    let document =
        tokio::task::spawn_blocking(move || build_document(&plan, &fronts, &backs, duplex_order))
            .await??;

    Ok(ComposedJob { document, plan })
}

/// Build the PDF for a plan from already-decoded images.
///
/// Each image list keeps one slot per input file; `None` slots are drawn as
/// placeholders.
pub fn build_document(
    plan: &JobPlan,
    fronts: &[Option<DecodedImage>],
    backs: &[Option<DecodedImage>],
    duplex_order: DuplexOrder,
) -> Result<Document> {
    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();

    let front_pages = render_side(&mut output, pages_id, plan, fronts, false)?;
    let back_pages = if plan.double_sided {
        render_side(&mut output, pages_id, plan, backs, true)?
    } else {
        Vec::new()
    };

    let page_refs: Vec<Object> = match duplex_order {
        DuplexOrder::Appended => front_pages
            .into_iter()
            .chain(back_pages)
            .map(Object::Reference)
            .collect(),
        DuplexOrder::Interleaved => {
            let mut refs = Vec::with_capacity(front_pages.len() + back_pages.len());
            let mut backs = back_pages.into_iter();
            for front in front_pages {
                refs.push(Object::Reference(front));
                if let Some(back) = backs.next() {
                    refs.push(Object::Reference(back));
                }
            }
            refs
        }
    };

    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// Render every sheet for one side, returning the page IDs in sheet order
fn render_side(
    output: &mut Document,
    pages_id: ObjectId,
    plan: &JobPlan,
    images: &[Option<DecodedImage>],
    is_back: bool,
) -> Result<Vec<ObjectId>> {
    let xobjects = embed_images(output, images);

    let rotations: Vec<bool> = images
        .iter()
        .map(|image| match image {
            Some(image) if plan.product.rotates_images() => {
                decide_rotation(
                    image.width_px,
                    image.height_px,
                    plan.item.width_mm,
                    plan.item.height_mm,
                )
                .rotate
            }
            _ => false,
        })
        .collect();

    let placements = if is_back {
        plan.back_placements(images.len())
    } else {
        plan.front_placements(images.len())
    };
    let records: Vec<PlacementRecord> = placements.with_rotations(&rotations).collect();

    let per_sheet = plan.layout.items_per_sheet.max(1);
    let cut_borders = plan.product.draws_cut_borders();

    let mut pages = Vec::with_capacity(plan.total_sheets);
    for (sheet_index, sheet_records) in records.chunks(per_sheet).enumerate() {
        let page_id = render_sheet_side(
            output,
            pages_id,
            &plan.layout,
            sheet_records,
            &xobjects,
            cut_borders,
        )?;
        log::debug!(
            "rendered {} of sheet {} ({} items)",
            if is_back { "back" } else { "front" },
            sheet_index + 1,
            sheet_records.len()
        );
        pages.push(page_id);
    }

    Ok(pages)
}

/// Save the composed document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ComposeError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
