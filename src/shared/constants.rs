/// Default page size for pagination (unified across search and moderation
/// listings)
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// IMAGE UPLOAD LIMITS
// =============================================================================

/// Maximum number of images accepted per listing submission
pub const MAX_IMAGES_PER_BEACH: usize = 5;

/// Maximum size of a single uploaded image in bytes
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// MIME types accepted for beach images
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/webp", "image/gif"];

pub fn is_image_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_MIME_TYPES.contains(&content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_image_mime_types() {
        assert!(is_image_mime_type_allowed("image/jpeg"));
        assert!(is_image_mime_type_allowed("image/png"));
        assert!(!is_image_mime_type_allowed("application/pdf"));
        assert!(!is_image_mime_type_allowed("text/html"));
    }
}
