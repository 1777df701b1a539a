//! JsonFileStore on a temp directory.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;

use common::{days_ago, gauge, now, rules};
use tempfile::TempDir;
use wpgauge_api::service::{GaugeService, ServiceOptions};
use wpgauge_api::store::{GaugeStore, JsonFileStore};
use wpgauge_core::clock::FixedClock;
use wpgauge_core::{GaugeData, GaugeError};

#[tokio::test]
async fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("gauges.json"));
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn load_save_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("gauges.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{"gauges":[
            {"name":"Water","value":3,"lastIncrease":"2026-10-18T07:15:00+02:00"},
            {"name":"Read","value":0,"lastIncrease":"garbage"},
            {"name":"Run","value":12,"lastIncrease":"2026-10-01T00:00:00Z"}
        ]}"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let first = store.load().await.unwrap();
    store.save(&first).await.unwrap();
    let second = store.load().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(second.len(), 3);
    assert_eq!(second.gauges[1].last_increase, "garbage");
    assert!(!dir.path().join("nested").join("gauges.json.tmp").exists());
}

#[tokio::test]
async fn save_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("gauges.json");
    let store = JsonFileStore::new(&path);

    let data = GaugeData::new(vec![gauge("Water", 1, days_ago(1))]);
    store.save(&data).await.unwrap();

    assert_eq!(store.load().await.unwrap(), data);
}

#[tokio::test]
async fn corrupt_file_is_a_store_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gauges.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = JsonFileStore::new(&path).load().await.unwrap_err();
    assert!(matches!(err, GaugeError::Store(_)));
}

#[tokio::test]
async fn service_persists_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gauges.json");
    let store = Arc::new(JsonFileStore::new(&path));
    let svc = GaugeService::new(
        store.clone(),
        rules(),
        Arc::new(FixedClock(now())),
        ServiceOptions::default(),
    );

    svc.add_gauge("Water").await.unwrap();
    svc.add_gauge("Read").await.unwrap();
    svc.remove_gauge("Water").await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"lastIncrease\": \"2026-10-19T12:00:00+02:00\""));

    let data = store.load().await.unwrap();
    assert_eq!(data.gauges, vec![gauge("Read", 0, "2026-10-19T12:00:00+02:00".into())]);
}
