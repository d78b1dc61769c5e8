// src/server/upload.rs

//! Image upload persistence
//!
//! Uploaded files are renamed before they touch disk: the stored name is
//! `{field}-{unix_millis}-{random}{original extension}`, with the extension
//! sanitized so a crafted filename cannot escape the image directory.

use crate::error::Result;
use rand::Rng;
use std::path::Path;

/// Generate a storage filename for an uploaded file.
///
/// Only the extension of the client-supplied name survives, stripped of
/// anything that is not alphanumeric.
pub fn generate_filename(field: &str, original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext: String = ext.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

    let millis = chrono::Utc::now().timestamp_millis();
    let random: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    if ext.is_empty() {
        format!("{}-{}-{}", field, millis, random)
    } else {
        format!("{}-{}-{}.{}", field, millis, random, ext)
    }
}

/// Write uploaded image bytes under the image directory.
///
/// Returns the public URL path of the stored file, rooted at the /images
/// static namespace.
pub fn store_image(image_dir: &Path, original_name: &str, bytes: &[u8]) -> Result<String> {
    std::fs::create_dir_all(image_dir)?;

    let filename = generate_filename("image", original_name);
    std::fs::write(image_dir.join(&filename), bytes)?;

    Ok(format!("/images/{}", filename))
}
