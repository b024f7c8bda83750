//! SarTrends storefront listing
//!
//! Client side of the catalog: fetches a category listing, turns it into
//! renderable cards and hands shopper actions to a cart and a navigator.
//!
//! - [`client`]: `CatalogClient` over `GET /api/products`
//! - [`listing`]: `ListingView`, `ListingState`, `ProductCard`
//! - [`pricing`]: rupee display formatting
//! - [`images`]: image URL resolution and load-failure tracking
//! - [`actions`]: `Cart` / `Navigator` seams and the card actions
//!
//! ```rust,no_run
//! use storefront::{CatalogClient, ListingQuery, ListingState, ListingView};
//!
//! # async fn example() {
//! let client = CatalogClient::new("http://localhost:8080");
//! let mut view = ListingView::new(client, ListingQuery::by_category("fragrance"), "https://sartrends.pk");
//!
//! match view.load().await {
//!     ListingState::Loaded(cards) => println!("{} products", cards.len()),
//!     ListingState::Empty { message } => println!("{message}"),
//!     ListingState::Failed(reason) => eprintln!("{reason}"),
//!     ListingState::Loading => unreachable!(),
//! }
//! # }
//! ```

pub mod actions;
pub mod client;
pub mod error;
pub mod images;
pub mod listing;
pub mod pricing;
pub mod product;

pub use actions::{Cart, InMemoryCart, ListingActions, Navigator, RecordingNavigator};
pub use client::CatalogClient;
pub use error::{StorefrontError, StorefrontResult};
pub use images::{resolve_image_url, ImageErrors};
pub use listing::{ListingState, ListingView, ProductCard};
pub use pricing::format_pkr;
pub use product::{CatalogProduct, ListingQuery};
