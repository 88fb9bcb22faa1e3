use integration_tests::harness::run_fixture;
use pretty_assertions::assert_eq;
use reqstat_core::ingest::Classification;
use reqstat_core::stats::{AccumulatorKey, CollectedStats, StatAccumulator};
use rust_decimal::Decimal;

static LOG: &str = "access.log";

fn get<'a>(stats: &'a CollectedStats, key: &AccumulatorKey) -> &'a StatAccumulator {
    stats
        .registry
        .get(key)
        .unwrap_or_else(|| panic!("missing accumulator {key}"))
}

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

#[test]
fn default_run_collects_all_only() {
    // Act
    let (stats, summary) = run_fixture(LOG, |_| {});

    // Assert
    assert_eq!(summary.published, 12);
    assert_eq!(summary.skipped, 2);
    assert_eq!(stats.registry.len(), 1);

    let all = get(&stats, &AccumulatorKey::total(Classification::All));
    assert_eq!(all.count(), 12);
    assert_eq!(all.sum(), dec("145"));
    assert_eq!(all.min(), dec("0.75"));
    assert_eq!(all.max(), dec("48"));
}

#[test]
fn static_and_dynamic_split_the_total() {
    // Act
    let (stats, _) = run_fixture(LOG, |cfg| {
        cfg.collect.static_requests = true;
        cfg.collect.dynamic_requests = true;
    });

    // Assert
    let fixed = get(&stats, &AccumulatorKey::total(Classification::Static));
    let dynamic = get(&stats, &AccumulatorKey::total(Classification::Dynamic));

    assert_eq!(fixed.count(), 6);
    assert_eq!(fixed.sum(), dec("9.5"));
    assert_eq!(dynamic.count(), 6);
    assert_eq!(dynamic.sum(), dec("135.5"));
}

#[test]
fn methods_are_broken_down() {
    // Act
    let (stats, _) = run_fixture(LOG, |cfg| cfg.collect.methods = true);

    // Assert
    let methods: Vec<(String, u64)> = stats
        .registry
        .by_classification(Classification::Generic)
        .map(|(key, acc)| (key.to_string(), acc.count()))
        .collect();
    assert_eq!(
        methods,
        vec![
            ("GET".to_string(), 9),
            ("POST".to_string(), 1),
            ("PUT".to_string(), 1),
            ("DELETE".to_string(), 1),
        ]
    );
}

#[test]
fn windows_accumulate_per_family() {
    // Act
    let (stats, _) = run_fixture(LOG, |cfg| {
        cfg.collect.static_requests = true;
        cfg.collect.dynamic_requests = true;
        cfg.window.step = Some(5);
    });

    // Assert
    let counts = |classification| -> Vec<u64> {
        [5, 10, 15]
            .into_iter()
            .map(|threshold| get(&stats, &AccumulatorKey::window(classification, threshold)).count())
            .collect()
    };

    assert_eq!(counts(Classification::All), vec![5, 10, 12]);
    assert_eq!(counts(Classification::Static), vec![3, 5, 6]);
    assert_eq!(counts(Classification::Dynamic), vec![2, 5, 6]);

    // the last window covers the whole run
    assert_eq!(
        get(&stats, &AccumulatorKey::window(Classification::All, 15)),
        get(&stats, &AccumulatorKey::total(Classification::All))
    );
}

#[test]
fn limit_stops_reading() {
    // Act
    let (stats, summary) = run_fixture(LOG, |cfg| {
        cfg.window.step = Some(5);
        cfg.window.limit = Some(7);
    });

    // Assert
    assert_eq!(summary.published, 7);
    assert_eq!(stats.published, 7);
    assert_eq!(get(&stats, &AccumulatorKey::window(Classification::All, 5)).count(), 5);
    assert_eq!(get(&stats, &AccumulatorKey::window(Classification::All, 10)).count(), 7);
    assert_eq!(
        stats.registry.get(&AccumulatorKey::window(Classification::All, 15)),
        None
    );
}

#[test]
fn minutes_cover_every_record() {
    // Act
    let (stats, _) = run_fixture(LOG, |_| {});

    // Assert
    let minutes: Vec<(i64, u64)> = stats.minutes.iter().collect();
    assert_eq!(minutes, vec![(1_717_999_980, 7), (1_718_000_040, 5)]);
}
