//! Utility functions

use std::path::{Path, PathBuf};

use tracing::error;

// ============================================================================
// Image Extensions
// ============================================================================

/// Common image file extensions for cache lookup
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "gif", "webp", "bmp"];

/// Find an existing cached image file with any common extension
///
/// # Arguments
/// * `dir` - The directory to search in
/// * `stem` - The filename without extension (e.g., "product_42")
///
/// # Returns
/// The path to the existing file if found, None otherwise
pub fn find_cached_image(dir: &Path, stem: &str) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|p| p.exists())
}

// ============================================================================
// Cache Directories
// ============================================================================

/// Get the app cache directory
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stockroom")
}

/// Get the product images cache directory
pub fn product_images_cache_dir() -> PathBuf {
    cache_dir().join("product-images")
}

/// Detect image format from magic bytes
/// Returns the correct file extension (without dot)
fn detect_image_format(bytes: &[u8]) -> &'static str {
    if bytes.len() < 8 {
        return "jpg"; // Default fallback
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "png";
    }

    // JPEG: FF D8 FF
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "jpg";
    }

    // GIF: 47 49 46 38
    if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
        return "gif";
    }

    // WebP: 52 49 46 46 ... 57 45 42 50
    if bytes.len() >= 12 && bytes.starts_with(&[0x52, 0x49, 0x46, 0x46]) && &bytes[8..12] == b"WEBP"
    {
        return "webp";
    }

    // BMP: 42 4D
    if bytes.starts_with(&[0x42, 0x4D]) {
        return "bmp";
    }

    "jpg" // Default fallback
}

/// Sanitize an entity id into a cache filename stem
fn image_stem(product_id: &str) -> String {
    let safe: String = product_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("product_{}", safe)
}

/// Download a product image into the cache, or return the cached copy
///
/// Failures are logged and reduced to None; the table falls back to
/// its placeholder cell.
pub async fn download_product_image(
    client: &crate::api::ShopClient,
    product_id: &str,
    url: &str,
) -> Option<PathBuf> {
    if url.trim().is_empty() {
        return None;
    }

    let dir = product_images_cache_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        error!("Failed to create image cache directory: {}", e);
        return None;
    }

    let stem = image_stem(product_id);
    if let Some(existing) = find_cached_image(&dir, &stem) {
        return Some(existing);
    }

    let bytes = match client.fetch_bytes(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to download product image {}: {}", url, e);
            return None;
        }
    };

    // Reject payloads that don't decode as an image before caching
    if image::guess_format(&bytes).is_err() {
        error!("Product image {} is not a recognized image format", url);
        return None;
    }

    let ext = detect_image_format(&bytes);
    let path = dir.join(format!("{}.{}", stem, ext));
    if let Err(e) = std::fs::write(&path, &bytes) {
        error!("Failed to write cached image {:?}: {}", path, e);
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_image_formats() {
        assert_eq!(
            detect_image_format(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
            "png"
        );
        assert_eq!(
            detect_image_format(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46]),
            "jpg"
        );
        assert_eq!(detect_image_format(&[0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0, 0]), "gif");
        // Unknown payloads fall back to jpg
        assert_eq!(detect_image_format(b"plain text"), "jpg");
    }

    #[test]
    fn image_stem_flattens_awkward_ids() {
        assert_eq!(image_stem("c0ffee-1"), "product_c0ffee_1");
        assert_eq!(image_stem("../etc"), "product____etc");
    }
}
