use crate::conf::{ReqstatConfig, load_config};
use anyhow::Result;
use std::path::PathBuf;

/// Prints the effective configuration, defaults filled in. JSON unless `yaml` is set.
pub fn dump(path: PathBuf, yaml: bool) -> Result<()> {
    let cfg = load_config(&path)?;
    println!("{}", render(&cfg, yaml)?);
    Ok(())
}

pub fn render(cfg: &ReqstatConfig, yaml: bool) -> Result<String> {
    let out = if yaml {
        serde_yaml::to_string(cfg)?
    } else {
        serde_json::to_string_pretty(cfg)?
    };
    Ok(out)
}
