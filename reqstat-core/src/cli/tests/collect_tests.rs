use crate::cli::collect::CollectArgs;
use crate::conf::ReqstatConfig;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[test]
fn flags_override_config() {
    // Arrange
    let mut config = ReqstatConfig::default();
    config.window.step = Some(10);
    let args = CollectArgs {
        file: PathBuf::from("access.log"),
        limit: Some(500),
        step: Some(50),
        collect_static: true,
        json: true,
        no_console: true,
        output_dir: Some(PathBuf::from("out")),
        ..CollectArgs::default()
    };

    // Act
    args.apply(&mut config);

    // Assert
    assert!(config.collect.static_requests);
    assert!(!config.collect.dynamic_requests);
    assert_eq!(config.window.step, Some(50));
    assert_eq!(config.window.limit, Some(500));
    assert!(config.report.json);
    assert!(!config.report.console);
    assert_eq!(config.report.output_dir, PathBuf::from("out"));
}

#[test]
fn absent_flags_keep_config_values() {
    // Arrange
    let mut config = ReqstatConfig::default();
    config.collect.dynamic_requests = true;
    config.collect.methods = true;
    config.window.step = Some(10);
    config.window.limit = Some(99);
    config.report.json = true;
    let expected = config.clone();

    // Act
    CollectArgs::default().apply(&mut config);

    // Assert
    assert_eq!(config, expected);
}
