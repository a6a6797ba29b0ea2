use tempfile::tempdir;
use vakantieteller::models::{QueryContext, Region};
use vakantieteller::storage::SettingsStore;

#[tokio::test]
async fn test_fresh_install_loads_defaults() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::new(dir.path());

    let context = store.load().await;
    assert_eq!(context.region, Region::Midden);
    assert_eq!(context.school_year, "2025-2026");
}

#[tokio::test]
async fn test_saved_settings_round_trip() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::new(dir.path());

    let saved = QueryContext::new(Region::Noord, "2026-2027");
    store.save(&saved).await.unwrap();

    assert_eq!(store.load().await, saved);
}

#[tokio::test]
async fn test_invalid_stored_region_falls_back_to_default() {
    let dir = tempdir().unwrap();
    let store = SettingsStore::new(dir.path());

    store
        .save(&QueryContext::new(Region::Zuid, "2026-2027"))
        .await
        .unwrap();
    tokio::fs::write(dir.path().join("region"), b"oost").await.unwrap();

    let context = store.load().await;
    assert_eq!(context.region, Region::Midden);
    // The school year key is independent and still honored.
    assert_eq!(context.school_year, "2026-2027");
}
