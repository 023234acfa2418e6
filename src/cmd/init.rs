//! `yeartab init`: write the default project config.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use yeartab::config::default_config_content;
use yeartab::paths::{CONFIG_FILE, YEARTAB_DIR};
use yeartab::ui::{self, colors};

pub fn cmd_init(force: bool) -> Result<()> {
    init_in(Path::new("."), force)?;
    if !ui::is_quiet() {
        println!("{} Created {}", colors::success("✓"), colors::identifier(CONFIG_FILE));
    }
    Ok(())
}

fn init_in(root: &Path, force: bool) -> Result<()> {
    let dir = root.join(YEARTAB_DIR);
    let config_path = root.join(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        );
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&config_path, default_config_content())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!("Wrote {}", config_path.display());

    Ok(())
}
