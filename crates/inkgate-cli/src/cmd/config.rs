use crate::output::print_json;
use anyhow::{bail, Context};
use clap::Subcommand;
use inkgate_core::{
    artist::Artist,
    config::{Config, ConfigWarning, WarnLevel},
    error::InkgateError,
};
use std::path::Path;

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the studio configuration
    Show,
    /// Check the configuration for problems
    Validate,
}

pub fn run(root: &Path, subcommand: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        ConfigSubcommand::Show => {
            let config = Config::load(root).context("failed to load config")?;
            if json {
                print_json(&config)?;
            } else {
                print!("{}", serde_yaml::to_string(&config)?);
            }
            Ok(())
        }
        ConfigSubcommand::Validate => {
            let config = Config::load(root).context("failed to load config")?;
            let mut warnings = config.validate();

            // The pure check can't see the filesystem; confirm the primary
            // artist actually has a manifest.
            if let Some(ref slug) = config.primary_artist {
                if matches!(
                    Artist::load(root, slug),
                    Err(InkgateError::ArtistNotFound(_))
                ) {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Warning,
                        message: format!(
                            "primary_artist '{slug}' has no artist record; the gate \
                             will treat it as unrestricted"
                        ),
                    });
                }
            }

            if json {
                print_json(&warnings)?;
            } else if warnings.is_empty() {
                println!("configuration OK");
            } else {
                for w in &warnings {
                    let level = match w.level {
                        WarnLevel::Warning => "warning",
                        WarnLevel::Error => "error",
                    };
                    println!("{level}: {}", w.message);
                }
            }

            if warnings.iter().any(|w| w.level == WarnLevel::Error) {
                bail!("configuration has errors");
            }
            Ok(())
        }
    }
}
