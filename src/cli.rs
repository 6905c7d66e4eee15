use std::path::PathBuf;

use anyhow::Error;
use clap::Parser;
use log::Level;

use pictogen_core::{
    color::pick_color,
    grid::build_grid,
    hashes::md5,
    identicons::generate_identicon,
};

use crate::files::{identicon_file_name, write_file};

pub const SOFTWARE_NAME: &str = "Pictogen";
pub const SOFTWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identicon generator
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value_t = Level::Warn)]
    pub log_level: Level,

    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser)]
pub enum SubCommand {
    Generate(Generate),
    Inspect(Inspect),
}

/// Generate identicon and write it to "<word>.png"
#[derive(Parser)]
pub struct Generate {
    word: String,

    /// Output directory
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

impl Generate {
    pub fn execute(&self) -> Result<(), Error> {
        let image_data = generate_identicon(&self.word)?;
        let file_name = identicon_file_name(&self.word);
        let file_path = self.output_dir.join(file_name);
        write_file(&image_data, &file_path)?;
        println!("saved to {}", file_path.display());
        Ok(())
    }
}

/// Print derivation details for a word
#[derive(Parser)]
pub struct Inspect {
    word: String,
}

impl Inspect {
    pub fn execute(&self) -> Result<(), Error> {
        let digest = md5(self.word.as_bytes());
        let color = pick_color(&digest)?;
        let grid = build_grid(&digest);
        let cells = grid.iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("digest: {}", hex::encode(digest));
        println!("color: {color}");
        println!("cells: {cells}");
        Ok(())
    }
}
