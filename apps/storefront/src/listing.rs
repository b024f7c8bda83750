//! Listing state for a category page

use tracing::{error, info, warn};

use crate::client::CatalogClient;
use crate::images::ImageErrors;
use crate::pricing::format_pkr;
use crate::product::{CatalogProduct, ListingQuery};

/// What a rendered card shows
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub product: CatalogProduct,
    /// Upper-cased category
    pub category_label: String,
    pub display_price: String,
    pub image_url: String,
    pub detail_route: String,
}

impl ProductCard {
    pub fn new(product: CatalogProduct, origin: &str, image_errors: &ImageErrors) -> Self {
        if product.image_url.as_deref().map_or(true, str::is_empty) {
            warn!(product = %product.name, "No imageUrl for product");
        }

        Self {
            category_label: product.category.to_uppercase(),
            display_price: format_pkr(product.price()),
            image_url: image_errors.url_for(&product.id, product.image_url.as_deref(), origin),
            detail_route: product.detail_route(),
            product,
        }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    /// Nothing fetched yet
    Loading,
    Loaded(Vec<ProductCard>),
    /// Fetched, no matches
    Empty { message: String },
    /// Fetch failed; the reason is shown to the shopper
    Failed(String),
}

impl ListingState {
    pub fn from_products(
        products: Vec<CatalogProduct>,
        query: &ListingQuery,
        origin: &str,
        image_errors: &ImageErrors,
    ) -> Self {
        if products.is_empty() {
            return ListingState::Empty {
                message: empty_message(query.category.as_deref()),
            };
        }

        ListingState::Loaded(
            products
                .into_iter()
                .map(|p| ProductCard::new(p, origin, image_errors))
                .collect(),
        )
    }

    pub fn cards(&self) -> &[ProductCard] {
        match self {
            ListingState::Loaded(cards) => cards,
            _ => &[],
        }
    }
}

/// `No fragrance products currently listed.`
pub fn empty_message(category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => format!("No {} products currently listed.", category),
        None => "No products currently listed.".to_string(),
    }
}

/// One category page: fetches once per `load` and tracks image failures.
#[derive(Debug)]
pub struct ListingView {
    client: CatalogClient,
    query: ListingQuery,
    origin: String,
    image_errors: ImageErrors,
    state: ListingState,
}

impl ListingView {
    /// `origin` prefixes root-relative image paths
    pub fn new(client: CatalogClient, query: ListingQuery, origin: impl Into<String>) -> Self {
        Self {
            client,
            query,
            origin: origin.into(),
            image_errors: ImageErrors::new(),
            state: ListingState::Loading,
        }
    }

    pub async fn load(&mut self) -> &ListingState {
        self.state = match self.client.list_products(&self.query).await {
            Ok(products) => {
                info!(
                    count = products.len(),
                    category = ?self.query.category,
                    "Fetched listing"
                );
                ListingState::from_products(products, &self.query, &self.origin, &self.image_errors)
            }
            Err(e) => {
                error!(error = %e, category = ?self.query.category, "Failed to fetch products");
                ListingState::Failed(e.to_string())
            }
        };
        &self.state
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    /// Swap the card's image for the branded placeholder.
    pub fn image_failed(&mut self, product_id: &str) {
        if !self.image_errors.mark_failed(product_id) {
            return;
        }
        error!(product_id, "Image failed to load");

        if let ListingState::Loaded(cards) = &mut self.state {
            for card in cards.iter_mut().filter(|c| c.product.id == product_id) {
                card.image_url = self.image_errors.url_for(product_id, None, &self.origin);
            }
        }
    }

    pub fn has_image_error(&self, product_id: &str) -> bool {
        self.image_errors.has_failed(product_id)
    }

    pub fn card(&self, product_id: &str) -> Option<&ProductCard> {
        self.state.cards().iter().find(|c| c.id() == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{BRANDED_PLACEHOLDER, NO_IMAGE_PLACEHOLDER};
    use serde_json::json;

    const ORIGIN: &str = "https://sartrends.pk";

    fn product(value: serde_json::Value) -> CatalogProduct {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_card_fields() {
        let card = ProductCard::new(
            product(json!({
                "_id": "a1",
                "name": "Oud Royale",
                "category": "Fragrance",
                "description": "Smoky oud",
                "rate": 12500,
                "imageUrl": "/uploads/oud.jpg"
            })),
            ORIGIN,
            &ImageErrors::new(),
        );

        assert_eq!(card.category_label, "FRAGRANCE");
        assert_eq!(card.display_price, "Rs 12,500");
        assert_eq!(card.image_url, "https://sartrends.pk/uploads/oud.jpg");
        assert_eq!(card.detail_route, "/product/a1");
        assert_eq!(card.product.description, "Smoky oud");
    }

    #[test]
    fn test_card_without_rate_or_image() {
        let card = ProductCard::new(product(json!({ "_id": "b2", "name": "Musk" })), ORIGIN, &ImageErrors::new());

        assert_eq!(card.display_price, "Rs 0");
        assert_eq!(card.image_url, NO_IMAGE_PLACEHOLDER);
        assert_eq!(card.product.rate, None);
    }

    #[test]
    fn test_empty_state_message() {
        let state = ListingState::from_products(
            vec![],
            &ListingQuery::by_category("fragrance"),
            ORIGIN,
            &ImageErrors::new(),
        );

        assert_eq!(
            state,
            ListingState::Empty {
                message: "No fragrance products currently listed.".to_string()
            }
        );
        assert!(state.cards().is_empty());
        assert_eq!(empty_message(None), "No products currently listed.");
    }

    #[test]
    fn test_image_failure_swaps_only_that_card() {
        let mut view = ListingView::new(
            CatalogClient::new("http://localhost:8080"),
            ListingQuery::by_category("fragrance"),
            ORIGIN,
        );
        view.state = ListingState::from_products(
            vec![
                product(json!({ "_id": "a1", "imageUrl": "/a.jpg" })),
                product(json!({ "_id": "b2", "imageUrl": "/b.jpg" })),
            ],
            &ListingQuery::by_category("fragrance"),
            ORIGIN,
            &ImageErrors::new(),
        );

        view.image_failed("a1");

        assert!(view.has_image_error("a1"));
        assert!(!view.has_image_error("b2"));
        assert_eq!(view.card("a1").unwrap().image_url, BRANDED_PLACEHOLDER);
        assert_eq!(view.card("b2").unwrap().image_url, "https://sartrends.pk/b.jpg");
    }
}
