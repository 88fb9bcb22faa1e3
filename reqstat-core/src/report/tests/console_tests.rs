use super::sample_stats;
use crate::report::render_console;
use crate::stats::CollectPlan;
use pretty_assertions::assert_eq;

fn cells(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[test]
fn all_section_is_always_rendered() {
    // Arrange
    let stats = sample_stats(&CollectPlan::default());

    // Act
    let out = render_console(&stats.registry, false);

    // Assert
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "REQUEST STATISTICS: ALL");
    assert!(lines[2].starts_with("Kind"));
    assert_eq!(lines[3], "-".repeat(190));
    assert_eq!(
        cells(lines[4]),
        vec![
            "ALL", "3", "70.00", "23.33", "155.56", "40.00", "40.00", "40.00", "10.00", "40.00",
            "0"
        ]
    );
    assert_eq!(lines.len(), 5);
    assert!(!out.contains("STATIC"));
}

#[test]
fn requested_sections_follow_all() {
    // Arrange
    let plan = CollectPlan {
        collect_static: true,
        collect_dynamic: true,
        ..CollectPlan::default()
    };
    let stats = sample_stats(&plan);

    // Act
    let out = render_console(&stats.registry, false);

    // Assert
    let titles: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("REQUEST STATISTICS"))
        .collect();
    assert_eq!(
        titles,
        vec![
            "REQUEST STATISTICS: ALL",
            "REQUEST STATISTICS: STATIC",
            "REQUEST STATISTICS: DYNAMIC"
        ]
    );

    let dynamic = out
        .lines()
        .find(|l| l.starts_with("DYNAMIC "))
        .unwrap();
    // a single request has no mean, variance or rate
    assert_eq!(
        cells(dynamic),
        vec![
            "DYNAMIC", "1", "40.00", "0.00", "0.00", "40.00", "40.00", "40.00", "40.00", "40.00",
            "0"
        ]
    );
}

#[test]
fn header_columns_are_padded() {
    // Arrange
    let stats = sample_stats(&CollectPlan::default());

    // Act
    let out = render_console(&stats.registry, false);

    // Assert
    let header = out.lines().nth(2).unwrap();
    assert!(header.starts_with(&format!("{:<15} {:<15} Total Time", "Kind", "Total")));
    assert!(header.ends_with("RPS"));
}

#[test]
fn rule_spans_every_column() {
    // Arrange
    let stats = sample_stats(&CollectPlan::default());

    // Act
    let out = render_console(&stats.registry, false);

    // Assert
    let rule = out.lines().nth(3).unwrap();
    let header = out.lines().nth(2).unwrap();
    assert_eq!(rule.len(), 190);
    assert!(header.len() <= rule.len());
}

#[test]
fn color_only_changes_titles() {
    // Arrange
    let stats = sample_stats(&CollectPlan::default());

    // Act
    let plain = render_console(&stats.registry, false);
    let colored = render_console(&stats.registry, true);

    // Assert
    assert_ne!(plain, colored);
    assert_eq!(plain.lines().nth(4), colored.lines().nth(4));
}
