//! Prefab Composer CLI
//!
//! Build structures from JSON configuration files.

use clap::{Parser, Subcommand};
use prefab_composer::{build_structure, export_text, load_config};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "prefab-composer")]
#[command(author, version, about = "Build prefab structures from JSON configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a structure and write its block placements as text
    Build {
        /// Input JSON configuration file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show information about a structure configuration
    Info {
        /// Input JSON configuration file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output } => build(&input, output.as_deref())?,
        Commands::Info { input } => info(&input)?,
    }

    Ok(())
}

fn build(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading configuration from {:?}...", input);
    let config = load_config(input)?;

    println!("Building structure: {}", config.name);
    if let Some(description) = &config.description {
        println!("  {}", description);
    }

    let buffer = build_structure(&config)?;
    println!(
        "  Placed {} blocks across {} room(s)",
        buffer.len(),
        config.rooms.len()
    );

    let text = export_text(&buffer);
    match output {
        Some(path) => {
            fs::write(path, &text)?;
            println!("Wrote placements to {:?}", path);
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(input)?;

    println!("Structure: {}", config.name);
    if let Some(description) = &config.description {
        println!("  {}", description);
    }
    println!("  Rooms: {}", config.rooms.len());

    for (index, room) in config.rooms.iter().enumerate() {
        let label = room.name.as_deref().unwrap_or("unnamed");
        println!(
            "  [{}] {}: {}x{}x{} at ({},{},{})",
            index,
            label,
            room.width,
            room.depth,
            room.height,
            room.position.x,
            room.position.y,
            room.position.z
        );
    }

    Ok(())
}
