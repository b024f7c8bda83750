//! Image URL resolution for product cards.

use std::collections::HashSet;

/// Shown when a product has no `imageUrl`
pub const NO_IMAGE_PLACEHOLDER: &str =
    "https://via.placeholder.com/400x300/EAEAEA/444444?text=No+Image";

/// Shown after an image failed to load
pub const BRANDED_PLACEHOLDER: &str =
    "https://via.placeholder.com/400x300/EAEAEA/444444?text=SarTrends+Luxury";

/// Root-relative paths are served from the storefront `origin`; anything
/// else is used as-is.
pub fn resolve_image_url(image_url: Option<&str>, origin: &str) -> String {
    match image_url {
        None | Some("") => NO_IMAGE_PLACEHOLDER.to_string(),
        Some(path) if path.starts_with('/') => {
            format!("{}{}", origin.trim_end_matches('/'), path)
        }
        Some(url) => url.to_string(),
    }
}

/// Products whose image failed to load, by id
#[derive(Debug, Default, Clone)]
pub struct ImageErrors {
    failed: HashSet<String>,
}

impl ImageErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the id was already marked.
    pub fn mark_failed(&mut self, product_id: &str) -> bool {
        self.failed.insert(product_id.to_string())
    }

    pub fn has_failed(&self, product_id: &str) -> bool {
        self.failed.contains(product_id)
    }

    pub fn len(&self) -> usize {
        self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }

    /// Resolved URL, or the branded placeholder once loading failed
    pub fn url_for(&self, product_id: &str, image_url: Option<&str>, origin: &str) -> String {
        if self.has_failed(product_id) {
            BRANDED_PLACEHOLDER.to_string()
        } else {
            resolve_image_url(image_url, origin)
        }
    }
}
