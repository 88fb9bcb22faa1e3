use crate::conf::{CONFIG_TEMPLATE, ConfigError};
use std::fs;
use std::path::{Path, PathBuf};

pub fn init(path: PathBuf, force: bool) -> anyhow::Result<()> {
    write_template(&path, force)?;
    println!("✔ Wrote {}", path.display());
    Ok(())
}

pub fn write_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::WriteFile {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, CONFIG_TEMPLATE).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
