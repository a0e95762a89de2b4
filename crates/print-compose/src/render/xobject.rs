//! Image XObjects
//!
//! Each decoded image is embedded once and referenced by every placement
//! that uses it.

use crate::images::DecodedImage;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Embed an RGB image as a Flate-compressed image XObject.
pub fn create_image_xobject(output: &mut Document, image: &DecodedImage) -> Result<ObjectId> {
    let dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(image.width_px as i64)),
        ("Height", Object::Integer(image.height_px as i64)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
    ]);

    let mut stream = Stream::new(dict, image.rgb.clone());
    stream.compress()?;

    Ok(output.add_object(stream))
}

/// Embed a list of optional images, keeping one slot per input.
///
/// Missing images stay `None`, as do images that fail to embed.
pub fn embed_images(output: &mut Document, images: &[Option<DecodedImage>]) -> Vec<Option<ObjectId>> {
    images
        .iter()
        .map(|image| {
            let image = image.as_ref()?;
            match create_image_xobject(output, image) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("Could not embed {}: {}", image.path.display(), e);
                    None
                }
            }
        })
        .collect()
}
