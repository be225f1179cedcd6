use crate::output::{print_json, print_table};
use anyhow::bail;
use clap::Subcommand;
use inkgate_core::{artist::Artist, types::CapabilityField};
use std::path::Path;

#[derive(Subcommand, Debug)]
pub enum ArtistSubcommand {
    /// Register a new artist
    Create { slug: String, name: String },
    /// List all artists
    List,
    /// Show one artist with capability flags
    Show { slug: String },
    /// Set a capability flag: true, false, or unset
    Set {
        slug: String,
        /// One of: color-work, coverups, touchups, reworks, repeat-designs
        field: String,
        /// true | false | unset
        value: String,
    },
}

pub fn run(root: &Path, subcommand: ArtistSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        ArtistSubcommand::Create { slug, name } => {
            let artist = Artist::create(root, &slug, &name)?;
            if json {
                print_json(&artist)?;
            } else {
                println!("created artist '{}' ({})", artist.slug, artist.name);
            }
            Ok(())
        }
        ArtistSubcommand::List => {
            let artists = Artist::list(root)?;
            if json {
                print_json(&artists)?;
            } else if artists.is_empty() {
                println!("No artists. Run: inkgate artist create <slug> <name>");
            } else {
                let rows = artists
                    .iter()
                    .map(|a| {
                        vec![a.slug.clone(), a.name.clone(), refused_summary(a)]
                    })
                    .collect();
                print_table(&["SLUG", "NAME", "REFUSES"], rows);
            }
            Ok(())
        }
        ArtistSubcommand::Show { slug } => {
            let artist = Artist::load(root, &slug)?;
            if json {
                print_json(&artist)?;
            } else {
                println!("Artist:  {} ({})", artist.slug, artist.name);
                for field in CapabilityField::all() {
                    let stance = match artist.capabilities.get(*field) {
                        Some(true) => "yes",
                        Some(false) => "no",
                        None => "unset",
                    };
                    println!("  {:<15} {}", field.to_string(), stance);
                }
            }
            Ok(())
        }
        ArtistSubcommand::Set { slug, field, value } => {
            let field: CapabilityField = field.parse()?;
            let value = match value.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                "unset" => None,
                other => bail!("expected true, false, or unset, got '{other}'"),
            };
            let mut artist = Artist::load(root, &slug)?;
            artist.set_capability(field, value);
            artist.save(root)?;
            if json {
                print_json(&artist)?;
            } else {
                println!("updated {} on '{}'", field, artist.slug);
            }
            Ok(())
        }
    }
}

fn refused_summary(artist: &Artist) -> String {
    let refused: Vec<&str> = CapabilityField::all()
        .iter()
        .filter(|f| artist.capabilities.get(**f) == Some(false))
        .map(|f| f.as_str())
        .collect();
    if refused.is_empty() {
        "-".to_string()
    } else {
        refused.join(", ")
    }
}
