use bottle_sniper::catalog::{self, CatalogSource, FileCatalog};
use bottle_sniper::config::load_config;
use bottle_sniper::engine::Engine;
use bottle_sniper::model::IndexedEntry;
use bottle_sniper::report::render_text;
use bottle_sniper::scraper::{ConfiguredScraper, PageHandle, PriceScraper};
use futures::future::join_all;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let records = match FileCatalog::new(&config.catalog_path).load().await {
        Ok(records) => records,
        Err(e) => {
            error!("Catalog load error: {}", e);
            return;
        }
    };
    let index = catalog::index(&records);
    info!(
        "Indexed {} listings ({} skipped)",
        index.len(),
        index.skipped.len()
    );

    let engine = Engine::new(&config.matching, config.product_url_base.clone());
    let scraper = ConfiguredScraper::new(config.products);

    info!("Products to compare: {}", scraper.pages().count());
    let tasks: Vec<_> = scraper
        .pages()
        .map(|page| process_product(page, &scraper, &engine, &index.entries))
        .collect();
    let reports = join_all(tasks).await;

    for report in reports.into_iter().flatten() {
        println!("{}", report);
    }
}

/// Scrapes, matches and renders a single product. Failures are logged and yield no report.
async fn process_product(
    page: PageHandle,
    scraper: &ConfiguredScraper,
    engine: &Engine,
    catalog: &[IndexedEntry],
) -> Option<String> {
    let product = match scraper.scrape(&page).await {
        Ok(product) => product,
        Err(e) => {
            warn!("Scraper error: {}", e);
            return None;
        }
    };

    info!("Processing product: {:?}", product.name);
    match engine.compare_product(&product, catalog) {
        Ok(comparison) => Some(render_text(&comparison)),
        Err(e) => {
            warn!("Comparison failed for {:?}: {}", product.name, e);
            None
        }
    }
}
