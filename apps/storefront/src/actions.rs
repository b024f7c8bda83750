//! Card actions and the collaborators they drive.

use crate::product::CatalogProduct;

/// Route the buy-now flow continues to
pub const CHECKOUT_ROUTE: &str = "/checkout";

/// Shopping cart owned outside the listing
pub trait Cart {
    fn add_to_cart(&mut self, product: &CatalogProduct);

    /// Put the product in the cart ahead of checkout
    fn buy_now(&mut self, product: &CatalogProduct);
}

pub trait Navigator {
    fn navigate(&mut self, route: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Process-local cart: repeated adds bump the quantity.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCart {
    lines: Vec<CartLine>,
    checkout_pending: bool,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Set by `buy_now`
    pub fn checkout_pending(&self) -> bool {
        self.checkout_pending
    }

    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }

    fn add(&mut self, product: &CatalogProduct) {
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price(),
                quantity: 1,
            }),
        }
    }
}

impl Cart for InMemoryCart {
    fn add_to_cart(&mut self, product: &CatalogProduct) {
        self.add(product);
    }

    fn buy_now(&mut self, product: &CatalogProduct) {
        self.add(product);
        self.checkout_pending = true;
    }
}

/// Records routes instead of changing pages
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    routes: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    pub fn current(&self) -> Option<&str> {
        self.routes.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: &str) {
        tracing::debug!(route, "Navigating");
        self.routes.push(route.to_string());
    }
}

/// Buy now / add to bag / view detail, wired to a cart and a navigator.
#[derive(Debug)]
pub struct ListingActions<C, N> {
    cart: C,
    navigator: N,
}

impl<C: Cart, N: Navigator> ListingActions<C, N> {
    pub fn new(cart: C, navigator: N) -> Self {
        Self { cart, navigator }
    }

    /// Adds to the cart and moves to checkout. Returns the confirmation text.
    pub fn buy_now(&mut self, product: &CatalogProduct) -> String {
        self.cart.buy_now(product);
        let message = format!("Added {} to cart. Proceeding to Checkout...", product.name);
        self.navigator.navigate(CHECKOUT_ROUTE);
        message
    }

    pub fn add_to_bag(&mut self, product: &CatalogProduct) -> String {
        self.cart.add_to_cart(product);
        format!("Added {} to your shopping bag!", product.name)
    }

    pub fn view_detail(&mut self, product: &CatalogProduct) {
        self.navigator.navigate(&product.detail_route());
    }

    pub fn cart(&self) -> &C {
        &self.cart
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_parts(self) -> (C, N) {
        (self.cart, self.navigator)
    }
}
