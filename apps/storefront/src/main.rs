//! Storefront CLI
//!
//! Renders a catalog listing in the terminal and exercises the card actions.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::Environment;
use eyre::Result;
use storefront::{
    CatalogClient, ImageErrors, InMemoryCart, ListingActions, ListingQuery, ListingState,
    ListingView, ProductCard, RecordingNavigator,
};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the SarTrends catalog from the terminal")]
struct Cli {
    /// Catalog API root
    #[arg(long, env = "STOREFRONT_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Origin for root-relative image paths. Defaults to the API URL.
    #[arg(long, env = "STOREFRONT_ORIGIN")]
    origin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in a category
    Browse {
        #[arg(short, long)]
        category: Option<String>,

        /// Product type within the category, e.g. eau-de-parfum
        #[arg(short = 't', long = "type")]
        product_type: Option<String>,
    },

    /// Show one product
    Show { id: String },

    /// Buy a product now and continue to checkout
    Buy { id: String },

    /// Add a product to the shopping bag
    Add { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let cli = Cli::parse();
    let origin = cli.origin.unwrap_or_else(|| cli.api_url.clone());
    let client = CatalogClient::new(cli.api_url);

    match cli.command {
        Commands::Browse {
            category,
            product_type,
        } => {
            let query = ListingQuery {
                category,
                product_type,
            };
            let mut view = ListingView::new(client, query, origin);

            match view.load().await {
                ListingState::Loaded(cards) => {
                    for card in cards {
                        print_card(card);
                    }
                }
                ListingState::Empty { message } => println!("{message}"),
                ListingState::Failed(reason) => {
                    eyre::bail!("Could not load products: {reason}");
                }
                ListingState::Loading => {}
            }
        }

        Commands::Show { id } => {
            let product = client.get_product(&id).await?;
            print_card(&ProductCard::new(product, &origin, &ImageErrors::new()));
        }

        Commands::Buy { id } => {
            let product = client.get_product(&id).await?;
            let mut actions = ListingActions::new(InMemoryCart::new(), RecordingNavigator::new());

            println!("{}", actions.buy_now(&product));
            if let Some(route) = actions.navigator().current() {
                println!("-> {route}");
            }
        }

        Commands::Add { id } => {
            let product = client.get_product(&id).await?;
            let mut actions = ListingActions::new(InMemoryCart::new(), RecordingNavigator::new());

            println!("{}", actions.add_to_bag(&product));
        }
    }

    Ok(())
}

fn print_card(card: &ProductCard) {
    println!("{}  [{}]  {}", card.product.name, card.category_label, card.display_price);
    if !card.product.description.is_empty() {
        println!("    {}", card.product.description);
    }
    println!("    image: {}", card.image_url);
    println!("    info:  {}", card.detail_route);
}
