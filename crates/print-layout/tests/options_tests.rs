use print_layout::layout::LargeItemPolicy;
use print_layout::*;
use std::path::PathBuf;

fn with_images(product: Product) -> JobOptions {
    let mut options = JobOptions::for_product(product);
    options.front_images.push(PathBuf::from("front.png"));
    options
}

#[test]
fn test_validation_no_images() {
    let options = JobOptions::default();
    assert!(matches!(options.validate(), Err(LayoutError::NoImages)));

    // Layout-only validation does not care about images
    assert!(options.validate_layout().is_ok());
}

#[test]
fn test_validation_double_sided_needs_backs() {
    let mut options = with_images(Product::BusinessCard);
    options.double_sided = true;
    assert!(matches!(
        options.validate(),
        Err(LayoutError::MissingBackImages)
    ));

    options.back_images.push(PathBuf::from("back.png"));
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_dimension_range() {
    let mut options = with_images(Product::CustomLayout);

    options.item_width_mm = 9.5;
    assert!(matches!(
        options.validate(),
        Err(LayoutError::InvalidDimension(_))
    ));

    options.item_width_mm = 2000.0;
    options.item_height_mm = 10.0;
    assert!(options.validate().is_ok());

    options.item_height_mm = 2000.5;
    assert!(options.validate().is_err());

    options.item_height_mm = 0.0;
    assert!(options.validate().is_err());

    options.item_height_mm = f32::NAN;
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_business_card_size_is_fixed() {
    let mut options = with_images(Product::BusinessCard);

    options.item_width_mm = 0.02;
    options.item_height_mm = 0.02;
    options.spacing_mm = 0.0;
    assert!(matches!(
        options.validate_layout(),
        Err(LayoutError::InvalidDimension(_))
    ));
    assert!(plan_job(&options).is_err());

    options.item_width_mm = 85.0;
    options.item_height_mm = 55.0;
    assert!(options.validate().is_err());

    // Portrait cards are the same card turned
    options.item_width_mm = 50.0;
    options.item_height_mm = 90.0;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_canvas_dimension_range() {
    let mut options = with_images(Product::CanvasWrap);

    options.item_width_mm = 5.0;
    assert!(matches!(
        options.validate(),
        Err(LayoutError::InvalidDimension(_))
    ));

    options.item_width_mm = 2500.0;
    assert!(options.validate().is_err());

    let (w, h) = CanvasPreset::Gallery.dimensions_mm();
    options.item_width_mm = w;
    options.item_height_mm = h;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_negative_bleed_and_spacing() {
    let mut options = with_images(Product::CustomLayout);
    options.bleed_mm = -1.0;
    assert!(matches!(
        options.validate(),
        Err(LayoutError::InvalidDimension(msg)) if msg.contains("bleed")
    ));

    options.bleed_mm = 3.0;
    options.spacing_mm = -0.5;
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_quantity_bounds() {
    let mut options = with_images(Product::CustomLayout);

    options.quantity = Quantity::Items(0);
    assert!(matches!(
        options.validate(),
        Err(LayoutError::InvalidQuantity { quantity: 0, max: 10_000 })
    ));

    options.quantity = Quantity::Items(10_000);
    assert!(options.validate().is_ok());

    options.quantity = Quantity::Items(10_001);
    assert!(options.validate().is_err());

    options.max_quantity = 20_000;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_canvas_quantity_bounds() {
    // Without images the requested quantity is checked
    let mut options = JobOptions::for_product(Product::CanvasWrap);
    options.quantity = Quantity::Items(0);
    assert!(matches!(
        options.validate_layout(),
        Err(LayoutError::InvalidQuantity { quantity: 0, max: 10_000 })
    ));

    options.quantity = Quantity::Items(50_000);
    assert!(matches!(
        plan_job(&options),
        Err(LayoutError::InvalidQuantity { quantity: 50_000, .. })
    ));

    // With images, one print per image counts against the ceiling
    options.front_images = vec![
        PathBuf::from("a.png"),
        PathBuf::from("b.png"),
        PathBuf::from("c.png"),
    ];
    assert!(options.validate().is_ok());

    options.max_quantity = 2;
    assert!(matches!(
        options.validate(),
        Err(LayoutError::InvalidQuantity { quantity: 3, max: 2 })
    ));
}

#[test]
fn test_validation_manual_sheet_must_be_in_catalog() {
    let mut options = with_images(Product::BusinessCard);
    options.sheet_mode = SheetMode::Manual {
        paper: PaperSize::A0,
        orientation: Orientation::Portrait,
    };
    assert!(matches!(
        options.validate(),
        Err(LayoutError::UnknownSheetSize(name)) if name == "A0"
    ));

    options.sheet_mode = SheetMode::Manual {
        paper: PaperSize::A3,
        orientation: Orientation::Portrait,
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_threshold_and_catalog() {
    let mut options = with_images(Product::CustomLayout);
    options.selection.efficiency_threshold = 1.5;
    assert!(matches!(options.validate(), Err(LayoutError::Config(_))));

    options.selection.efficiency_threshold = 0.2;
    options.catalog.clear();
    assert!(matches!(options.validate(), Err(LayoutError::Config(_))));
}

#[test]
fn test_item_spec_per_product() {
    let cards = JobOptions::for_product(Product::BusinessCard);
    let item = cards.item_spec();
    assert_eq!((item.width_mm, item.height_mm), (90.0, 50.0));
    assert_eq!(item.spacing_mm, 1.0);
    assert_eq!(item.bleed_mm, 0.0);

    let canvas = JobOptions::for_product(Product::CanvasWrap);
    let item = canvas.item_spec();
    assert_eq!(item.spacing_mm, 0.0);
    assert_eq!(item.bleed_mm, 40.0);
    assert_eq!(item.effective_width_mm(), 480.0);
}

#[test]
fn test_canvas_auto_rotate() {
    let mut options = JobOptions::for_product(Product::CanvasWrap);
    assert!(options.match_canvas_to_image(600, 900));
    assert_eq!((options.item_width_mm, options.item_height_mm), (300.0, 400.0));

    assert!(!options.match_canvas_to_image(600, 900));

    options.canvas.auto_rotate = false;
    assert!(!options.match_canvas_to_image(900, 600));
    assert_eq!((options.item_width_mm, options.item_height_mm), (300.0, 400.0));

    // Other products never swap
    let mut cards = JobOptions::for_product(Product::BusinessCard);
    assert!(!cards.match_canvas_to_image(100, 900));
}

#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = with_images(Product::CustomLayout);
    options.item_width_mm = 148.0;
    options.item_height_mm = 105.0;
    options.bleed_mm = 3.0;
    options.quantity = Quantity::Sheets(4);
    options.sheet_mode = SheetMode::Manual {
        paper: PaperSize::A3,
        orientation: Orientation::Landscape,
    };
    options.double_sided = true;
    options.back_images.push(PathBuf::from("back.png"));
    options.duplex_order = DuplexOrder::Interleaved;
    options.selection.large_item = Some(LargeItemPolicy::default());

    let temp = NamedTempFile::new().unwrap();
    let path = temp.path();

    options.save(path).await.unwrap();
    let loaded = JobOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_load_rejects_bad_json() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    tokio::fs::write(temp.path(), b"{ not json").await.unwrap();

    let result = JobOptions::load(temp.path()).await;
    assert!(matches!(result, Err(LayoutError::Config(msg)) if msg.contains("parse")));
}

#[test]
fn test_validation_large_item_policy() {
    let mut options = with_images(Product::CustomLayout);
    options.selection.large_item = Some(LargeItemPolicy {
        cutoff_mm: 500.0,
        efficiency_threshold: f32::NAN,
    });
    assert!(matches!(options.validate(), Err(LayoutError::Config(_))));

    options.selection.large_item = Some(LargeItemPolicy {
        cutoff_mm: -1.0,
        efficiency_threshold: 0.1,
    });
    assert!(matches!(
        options.validate(),
        Err(LayoutError::Config(msg)) if msg.contains("cutoff")
    ));

    options.selection.large_item = Some(LargeItemPolicy::default());
    assert!(options.validate().is_ok());
}
