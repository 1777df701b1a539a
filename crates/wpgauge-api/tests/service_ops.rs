//! GaugeService against an in-memory store with a frozen clock.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;

use common::{days_ago, gauge, now, rules, service, service_with};
use wpgauge_api::service::ServiceOptions;
use wpgauge_core::{CycleReport, GaugeError, GaugeRules};

#[tokio::test]
async fn add_appends_zeroed_gauge_stamped_now() {
    let (svc, store) = service(vec![gauge("Water", 2, days_ago(1))]);

    svc.add_gauge("Read").await.unwrap();

    let data = store.snapshot().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data.gauges[0].name, "Water");
    assert_eq!(data.gauges[1], gauge("Read", 0, "2026-10-19T12:00:00+02:00".into()));
}

#[tokio::test]
async fn add_duplicate_conflicts_and_rewrites_unchanged() {
    let initial = vec![gauge("Water", 2, days_ago(1)), gauge("Read", 5, days_ago(3))];
    let (svc, store) = service(initial.clone());

    let err = svc.add_gauge("Water").await.unwrap_err();
    assert!(matches!(err, GaugeError::Conflict(_)));
    assert_eq!(store.snapshot().unwrap().gauges, initial);
    assert_eq!(store.saves(), 1);

    // Case-sensitive: a different spelling is a new gauge.
    svc.add_gauge("water").await.unwrap();
    assert_eq!(store.snapshot().unwrap().len(), 3);
}

#[tokio::test]
async fn invalid_name_is_rejected_without_write() {
    let (svc, store) = service(vec![gauge("Water", 2, days_ago(1))]);

    for bad in ["Water1", "two words", "semi;colon"] {
        let err = svc.add_gauge(bad).await.unwrap_err();
        assert!(matches!(err, GaugeError::Validation(_)), "{bad}");
        let err = svc.remove_gauge(bad).await.unwrap_err();
        assert!(matches!(err, GaugeError::Validation(_)), "{bad}");
        let err = svc.increase_gauge(bad).await.unwrap_err();
        assert!(matches!(err, GaugeError::Validation(_)), "{bad}");
    }
    assert_eq!(store.saves(), 0);
}

#[tokio::test]
async fn empty_name_passes_validation() {
    let (svc, store) = service(vec![]);
    svc.add_gauge("").await.unwrap();
    assert_eq!(store.snapshot().unwrap().gauges[0].name, "");
}

#[tokio::test]
async fn remove_keeps_order_of_the_rest() {
    let (svc, store) = service(vec![
        gauge("A", 1, days_ago(1)),
        gauge("B", 2, days_ago(1)),
        gauge("C", 3, days_ago(1)),
    ]);

    svc.remove_gauge("B").await.unwrap();

    let names: Vec<_> = store
        .snapshot()
        .unwrap()
        .gauges
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, ["A", "C"]);
}

#[tokio::test]
async fn remove_unknown_is_not_found_and_unchanged() {
    let initial = vec![gauge("A", 1, days_ago(1))];
    let (svc, store) = service(initial.clone());

    let err = svc.remove_gauge("Z").await.unwrap_err();
    assert!(matches!(err, GaugeError::NotFound(ref n) if n == "Z"));
    assert_eq!(store.snapshot().unwrap().gauges, initial);
}

#[tokio::test]
async fn increase_once_per_day() {
    let (svc, store) = service(vec![gauge("Water", 2, days_ago(1))]);

    svc.increase_gauge("Water").await.unwrap();
    let g = store.snapshot().unwrap().gauges[0].clone();
    assert_eq!(g.value, 3);
    assert_eq!(g.last_increase, "2026-10-19T12:00:00+02:00");

    let err = svc.increase_gauge("Water").await.unwrap_err();
    assert!(matches!(err, GaugeError::AlreadyIncreased(_)));
    assert_eq!(store.snapshot().unwrap().gauges[0].value, 3);
    // Written back on both paths.
    assert_eq!(store.saves(), 2);
}

#[tokio::test]
async fn increase_at_max_keeps_value_and_refreshes_stamp() {
    let (svc, store) = service(vec![gauge("Water", 10, days_ago(2))]);

    svc.increase_gauge("Water").await.unwrap();

    let data = store.snapshot().unwrap();
    let g = &data.gauges[0];
    assert_eq!(g.value, 10);
    assert_eq!(g.last_increase, svc.rules().stamp(now()));
}

#[tokio::test]
async fn increase_overshoots_max_without_clamping() {
    let r = GaugeRules {
        increase_step: 5,
        ..rules()
    };
    let (svc, store) = service_with(
        vec![gauge("Water", 9, days_ago(1))],
        r,
        ServiceOptions::default(),
    );

    svc.increase_gauge("Water").await.unwrap();
    assert_eq!(store.snapshot().unwrap().gauges[0].value, 14);
}

#[tokio::test]
async fn increase_unknown_is_not_found_but_rewrites() {
    let (svc, store) = service(vec![gauge("Water", 2, days_ago(1))]);

    let err = svc.increase_gauge("Milk").await.unwrap_err();
    assert!(matches!(err, GaugeError::NotFound(_)));
    assert_eq!(store.saves(), 1);
}

#[tokio::test]
async fn daily_cycle_decays_stale_only() {
    let (svc, store) = service(vec![
        gauge("Old", 10, days_ago(15)),
        gauge("Fresh", 3, days_ago(0)),
        gauge("Low", 2, days_ago(2)),
    ]);

    let report = svc.daily_cycle().await.unwrap();
    assert_eq!(report, CycleReport { decayed: 2, skipped: 1 });

    let data = store.snapshot().unwrap();
    assert_eq!(data.gauges[0].value, 6);
    assert_eq!(data.gauges[0].last_increase, days_ago(15));
    assert_eq!(data.gauges[1].value, 3);
    assert_eq!(data.gauges[2].value, 0);
}

#[tokio::test]
async fn daily_cycle_load_failure_writes_empty_collection() {
    let (svc, store) = service(vec![gauge("Water", 5, days_ago(2))]);
    store.set_fail_loads(true);

    let report = svc.daily_cycle().await.unwrap();
    assert_eq!(report, CycleReport::default());
    assert_eq!(store.saves(), 1);
    assert!(store.snapshot().unwrap().is_empty());
}

#[tokio::test]
async fn strict_daily_cycle_aborts_on_load_failure() {
    let opts = ServiceOptions {
        strict_daily_cycle: true,
        ..ServiceOptions::default()
    };
    let (svc, store) = service_with(vec![gauge("Water", 5, days_ago(2))], rules(), opts);
    store.set_fail_loads(true);

    let err = svc.daily_cycle().await.unwrap_err();
    assert!(matches!(err, GaugeError::Store(_)));
    assert_eq!(store.saves(), 0);
    assert_eq!(store.snapshot().unwrap().gauges[0].value, 5);
}

#[tokio::test]
async fn load_failure_aborts_other_operations() {
    let (svc, store) = service(vec![gauge("Water", 5, days_ago(2))]);
    store.set_fail_loads(true);

    assert!(matches!(svc.get_all().await, Err(GaugeError::Store(_))));
    assert!(matches!(svc.add_gauge("New").await, Err(GaugeError::Store(_))));
    assert!(matches!(svc.remove_gauge("Water").await, Err(GaugeError::Store(_))));
    assert!(matches!(svc.increase_gauge("Water").await, Err(GaugeError::Store(_))));
    assert_eq!(store.saves(), 0);
}

#[tokio::test]
async fn rejections_survive_failed_write_back() {
    let (svc, store) = service(vec![gauge("Water", 3, days_ago(0))]);
    store.set_fail_saves(true);

    let err = svc.increase_gauge("Water").await.unwrap_err();
    assert!(matches!(err, GaugeError::AlreadyIncreased(_)), "{err:?}");
    let err = svc.increase_gauge("Milk").await.unwrap_err();
    assert!(matches!(err, GaugeError::NotFound(_)), "{err:?}");
    let err = svc.add_gauge("Water").await.unwrap_err();
    assert!(matches!(err, GaugeError::Conflict(_)), "{err:?}");
    let err = svc.remove_gauge("Milk").await.unwrap_err();
    assert!(matches!(err, GaugeError::NotFound(_)), "{err:?}");

    // A successful mutation that cannot be saved reports the store error.
    let err = svc.add_gauge("Read").await.unwrap_err();
    assert!(matches!(err, GaugeError::Store(_)), "{err:?}");

    assert_eq!(store.saves(), 0);
    assert_eq!(store.snapshot().unwrap().gauges, vec![gauge("Water", 3, days_ago(0))]);
}

#[tokio::test]
async fn serialized_writes_do_not_lose_adds() {
    let (svc, store) = service(vec![]);
    let svc = Arc::new(svc);

    let names = ["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel"];
    let mut tasks = Vec::new();
    for name in names {
        let svc = svc.clone();
        tasks.push(tokio::spawn(async move { svc.add_gauge(name).await }));
    }
    for t in tasks {
        t.await.unwrap().unwrap();
    }

    assert_eq!(store.snapshot().unwrap().len(), names.len());
}
