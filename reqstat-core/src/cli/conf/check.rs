use crate::conf::{ConfigError, ReqstatConfig, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            for line in summary(&cfg) {
                println!("✔ {line}");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            if let Some(hint) = config_error_hint(&err) {
                eprintln!();
                eprintln!("{hint}");
            }
            std::process::exit(1);
        }
    }
}

pub fn summary(cfg: &ReqstatConfig) -> Vec<String> {
    let mut families = vec!["ALL"];
    if cfg.collect.static_requests {
        families.push("STATIC");
    }
    if cfg.collect.dynamic_requests {
        families.push("DYNAMIC");
    }
    if cfg.collect.methods {
        families.push("methods");
    }

    let window = match cfg.window.step {
        Some(step) => format!("windows of {step} requests"),
        None => "windowed statistics disabled".to_string(),
    };

    vec![
        "Config loaded successfully".to_string(),
        format!("collecting {}", families.join(", ")),
        window,
        format!("{} static markers", cfg.classifier.static_markers.len()),
    ]
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ZeroStep => Some(
            "Windows are measured in requests and must be at least one wide.\n\
             \n\
             Example:\n\
             \n\
             [window]\n\
             step = 1000",
        ),

        ConfigError::ZeroLimit => Some(
            "Remove `limit` to read the whole file, or set it to the number of requests to read.",
        ),

        ConfigError::EmptyStaticMarker { .. } => Some(
            "An empty marker matches every URI and would classify all requests as static.",
        ),

        _ => None,
    }
}
