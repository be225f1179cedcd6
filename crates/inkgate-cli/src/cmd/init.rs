use anyhow::Context;
use inkgate_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path, name: Option<&str>) -> anyhow::Result<()> {
    let name = match name {
        Some(n) => n.to_string(),
        None => root
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "studio".to_string()),
    };

    io::ensure_dir(&paths::artists_dir(root))?;
    io::ensure_dir(&paths::bookings_dir(root))?;

    let config_path = paths::config_path(root);
    if config_path.exists() {
        println!("already initialized: {}", config_path.display());
        return Ok(());
    }

    Config::new(&name)
        .save(root)
        .context("failed to write config")?;
    println!(
        "initialized inkgate for '{}' in {}",
        name,
        paths::inkgate_dir(root).display()
    );
    Ok(())
}
