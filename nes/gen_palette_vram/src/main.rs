//! `gen_palette_vram` writes a 32 byte palette RAM image to stdout where
//! palettes 0 and 4 are fixed and the rest are random.
use std::io::{stdout, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use log::debug;
use nes_assets::prelude::*;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

/// `gen_palette_vram` writes a test palette RAM image to stdout.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, help = "Seed for the random palettes")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args: Args = Args::parse();

    let ram = match args.seed {
        Some(seed) => palette_ram(&mut StdRng::seed_from_u64(seed)),
        None => palette_ram(&mut thread_rng()),
    };
    debug!("Palette RAM: {ram:02X?}");

    let mut out = stdout().lock();
    out.write_all(&ram)?;
    out.flush()?;
    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
