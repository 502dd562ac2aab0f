mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::{init_test_logger, record, spawn_controller, MockFormatter, ScriptedFetcher, Step};
use pricelist::controller::{ControllerSettings, SearchRefreshController};
use pricelist::data::FileDataSource;
use pricelist::fetcher::CryptoPriceFetcher;
use pricelist::flags::FeatureFlagStore;
use pricelist::formatter::CryptoFormatter;
use pricelist::model::FeatureFlag;
use pricelist::presentation::{DetailPresenter, ListPresenter, SettingsModel};
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_search_bt_keeps_btc_only() {
    init_test_logger();
    let flags = FeatureFlagStore::new();
    let fetcher = ScriptedFetcher::new(vec![Step::ok(
        0,
        vec![record(1, "BTC", 100, None), record(2, "ETH", 50, None)],
    )]);
    let handle = spawn_controller(fetcher, &flags);
    handle.refresh_with_loading_indicator().await.unwrap();

    handle.set_search_text("bt").await.unwrap();
    let snapshot = handle.wait_for(|s| s.items.len() == 1).await.unwrap();

    assert_eq!(snapshot.items, vec![record(1, "BTC", 100, None)]);
}

#[tokio::test(start_paused = true)]
async fn test_price_text_follows_flag() {
    init_test_logger();
    let flags = Arc::new(FeatureFlagStore::new());
    let fetcher = ScriptedFetcher::new(vec![
        Step::ok(0, vec![record(1, "BTC", 100, None)]),
        Step::ok(0, vec![record(1, "BTC", 100, Some(90))]),
    ]);
    let handle = spawn_controller(fetcher, &flags);
    let presenter = ListPresenter::new(Arc::new(MockFormatter));

    handle.refresh_with_loading_indicator().await.unwrap();
    handle.set_search_text("BTC").await.unwrap();
    sleep(Duration::from_millis(300)).await;

    let snapshot = handle.snapshot();
    assert_eq!(
        presenter.price_text(&snapshot.items[0], snapshot.show_eur_price),
        "Price: formatted_100"
    );

    let mut settings = SettingsModel::new(Arc::clone(&flags));
    settings.set_support_eur(true);
    let snapshot = handle.wait_for(|s| s.show_eur_price).await.unwrap();

    assert_eq!(
        presenter.price_text(&snapshot.items[0], snapshot.show_eur_price),
        "USD: formatted_100 EUR: formatted_90"
    );
}

#[tokio::test(start_paused = true)]
async fn test_detail_of_listed_record_follows_settings() {
    init_test_logger();
    let flags = Arc::new(FeatureFlagStore::new());
    let handle = spawn_controller(ScriptedFetcher::new(Vec::new()), &flags);
    handle.refresh_with_loading_indicator().await.unwrap();

    let mut settings = SettingsModel::new(Arc::clone(&flags));
    settings.toggle_support_eur();
    let snapshot = handle.wait_for(|s| s.show_eur_price).await.unwrap();

    let detail = DetailPresenter::new(
        snapshot.items[0].clone(),
        Arc::new(MockFormatter),
        Arc::clone(&flags),
    );
    let show_eur = detail.show_eur_price();
    assert_eq!(detail.record().name, "BTC");
    assert_eq!(detail.formatted_usd_price(), "formatted_100");
    assert_eq!(detail.formatted_eur_price(), "formatted_90");
    assert!(show_eur);

    settings.toggle_support_eur();
    assert!(!detail.show_eur_price());
}

#[tokio::test]
async fn test_bundled_fixtures_end_to_end() {
    init_test_logger();
    let flags = Arc::new(FeatureFlagStore::new());
    let fixtures = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    let fetcher = Arc::new(CryptoPriceFetcher::new(FileDataSource::new(fixtures)));
    let handle = SearchRefreshController::spawn(
        fetcher,
        &flags,
        ControllerSettings {
            search_debounce: Duration::from_millis(20),
            ..ControllerSettings::default()
        },
    );
    let presenter = ListPresenter::new(Arc::new(CryptoFormatter::new()));

    handle.refresh_with_loading_indicator().await.unwrap();
    let snapshot = handle.snapshot();
    assert!(!snapshot.items.is_empty());
    assert!(snapshot.items.iter().all(|r| r.eur_price.is_none()));

    handle.set_search_text("btc").await.unwrap();
    let snapshot = handle
        .wait_for(|s| s.items.iter().all(|r| r.name.to_lowercase().contains("btc")))
        .await
        .unwrap();
    assert!(snapshot.items.iter().any(|r| r.name == "BTC"));
    assert!(presenter.rows(&snapshot)[0].contains("Price: "));

    flags.update(FeatureFlag::SupportEur, true);
    let snapshot = handle.wait_for(|s| s.show_eur_price).await.unwrap();
    assert!(snapshot.items.iter().all(|r| r.eur_price.is_some()));
    assert!(presenter.rows(&snapshot)[0].contains("EUR: "));
}
