//! Spritepack: sprite atlas parsing for map renderers.
//!
//! A sprite atlas ships as two artifacts: a packed raster image holding many
//! icons, and a JSON index mapping each sprite name to the rectangle its
//! icon occupies plus its display scale and rendering mode. Spritepack
//! decodes the image, validates the index, and hands back a name-keyed
//! collection of independently owned sprite bitmaps — with whole-document
//! failures kept strictly apart from per-entry ones, which degrade to
//! dropped entries in a diagnostics report.
//!
//! # Modules
//!
//! - [`raster`]: decoded pixel buffers and the image decoding boundary
//! - [`sprite`]: the index parser, rectangle extractor, and parse report
//! - [`error`]: error types for spritepack operations

pub mod error;
pub mod raster;
pub mod sprite;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::SpriteIndexError;

/// The spritepack CLI application.
#[derive(Parser)]
#[command(name = "spritepack")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Parse a sprite atlas and report extracted sprites and diagnostics.
    Inspect(InspectArgs),
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// Packed atlas image (PNG).
    atlas: PathBuf,

    /// Sprite index JSON describing the atlas.
    index: PathBuf,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the spritepack CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), SpriteIndexError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Inspect(args)) => run_inspect(args),
        None => {
            println!("spritepack {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Sprite atlas parser and extractor for map renderers.");
            println!();
            println!("Run 'spritepack --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), SpriteIndexError> {
    let atlas_bytes = fs::read(&args.atlas)?;
    let index_json = fs::read_to_string(&args.index)?;

    // Cheap dimension probe before the full decode, for the header line.
    if let Ok(size) = imagesize::blob_size(&atlas_bytes) {
        println!(
            "atlas {}: {}x{} px",
            args.atlas.display(),
            size.width,
            size.height
        );
    }

    let mut report = sprite::ParseReport::new();
    let sprites = sprite::parse_sprite_index(&atlas_bytes, &index_json, &mut report)?;

    match args.output.as_str() {
        "json" => {
            let entries: Vec<serde_json::Value> = sprites
                .iter()
                .map(|(name, sprite)| {
                    serde_json::json!({
                        "name": name,
                        "width": sprite.width(),
                        "height": sprite.height(),
                        "pixelRatio": sprite.pixel_ratio(),
                        "sdf": sprite.sdf(),
                    })
                })
                .collect();
            let doc = serde_json::json!({
                "sprites": entries,
                "error_count": report.error_count(),
                "warning_count": report.warning_count(),
                "issues": &report.issues,
            });
            println!("{doc:#}");
        }
        _ => {
            println!("parsed {} sprite(s)", sprites.len());
            for (name, sprite) in &sprites {
                println!(
                    "  {}: {}x{} px, pixel ratio {}{}",
                    name,
                    sprite.width(),
                    sprite.height(),
                    sprite.pixel_ratio(),
                    if sprite.sdf() { ", sdf" } else { "" }
                );
            }
            print!("{}", report);
        }
    }

    // Dropped sprites fail the inspection; warnings only do so under --strict.
    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(SpriteIndexError::IndexIssues {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
        })
    } else {
        Ok(())
    }
}
