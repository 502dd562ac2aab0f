use std::sync::Arc;
use std::time::Duration;

use dotenv::dotenv;
use pricelist::config::AppConfig;
use pricelist::controller::{ControllerHandle, ControllerSettings, SearchRefreshController};
use pricelist::data::FileDataSource;
use pricelist::fetcher::CryptoPriceFetcher;
use pricelist::flags::FeatureFlagStore;
use pricelist::formatter::CryptoFormatter;
use pricelist::presentation::{DetailPresenter, ListPresenter, SettingsModel};
use tokio::time;
use tracing::info;

fn print_list(title: &str, handle: &ControllerHandle, presenter: &ListPresenter) {
    let snapshot = handle.snapshot();
    println!(
        "--- {title} ({} items, loading: {}, EUR: {}) ---",
        snapshot.items.len(),
        snapshot.is_loading,
        snapshot.show_eur_price
    );
    for row in presenter.rows(&snapshot) {
        println!("{row}");
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Logging configuration
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("Failed to load configuration");
    info!("Using fixtures from {}", config.fixtures_dir.display());

    // Everything is built once here and passed down
    let flags = Arc::new(FeatureFlagStore::new());
    let formatter = Arc::new(CryptoFormatter::new());
    let source = FileDataSource::new(&config.fixtures_dir).with_latency(config.simulated_latency);
    let fetcher = Arc::new(CryptoPriceFetcher::new(source));

    let handle = SearchRefreshController::spawn(
        fetcher,
        &flags,
        ControllerSettings {
            search_debounce: config.search_debounce,
            command_buffer: config.command_buffer,
        },
    );
    let presenter = ListPresenter::new(formatter.clone());
    let mut settings = SettingsModel::new(Arc::clone(&flags));

    // Screen appeared
    handle
        .refresh_with_loading_indicator()
        .await
        .expect("Failed to refresh price list");
    print_list("All coins", &handle, &presenter);

    // Typing a search, one keystroke at a time
    for text in ["b", "bt", "btc"] {
        handle
            .set_search_text(text)
            .await
            .expect("Failed to send search text");
        time::sleep(Duration::from_millis(50)).await;
    }
    time::sleep(config.search_debounce + config.simulated_latency + Duration::from_millis(100)).await;
    print_list("Search \"btc\"", &handle, &presenter);

    // Settings screen turns EUR on
    settings.toggle_support_eur();
    let snapshot = handle
        .wait_for(|s| s.show_eur_price)
        .await
        .expect("Controller stopped before EUR prices arrived");
    print_list("Search \"btc\" with EUR", &handle, &presenter);

    if let Some(record) = snapshot.items.first().cloned() {
        let detail = DetailPresenter::new(record, formatter.clone(), Arc::clone(&flags));
        let show_eur = detail.show_eur_price();
        println!(
            "--- Detail {} --- USD {} | EUR {} (shown: {})",
            detail.record().name,
            detail.formatted_usd_price(),
            detail.formatted_eur_price(),
            show_eur
        );
    }

    handle
        .shutdown()
        .await
        .expect("Failed to send shutdown to controller");

    info!("Main function is exiting.");
}
