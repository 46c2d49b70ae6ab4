//! `gen_test_vram` writes test nametables (each followed by its attribute
//! table) to stdout.
use std::io::{stdout, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use log::info;
use nes_assets::prelude::*;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

/// `gen_test_vram` writes tiled test nametables to stdout.
///
/// The default clouds theme writes 2 nametables. Goombas and cheep-cheeps
/// write one each.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(
        long,
        default_value_t = Theme::Clouds,
        help = "Tile theme: clouds, goombas or cheep-cheeps"
    )]
    theme: Theme,

    #[arg(
        long,
        default_value_t = false,
        help = "Use random palettes in the attribute tables instead of the theme palette"
    )]
    random_attributes: bool,

    #[arg(long, help = "Seed for the attribute tables")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args: Args = Args::parse();

    let bytes = match args.seed {
        Some(seed) => nametables(
            args.theme,
            args.random_attributes,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => nametables(args.theme, args.random_attributes, &mut thread_rng()),
    };
    info!("{} nametables: {} bytes", args.theme, bytes.len());

    let mut out = stdout().lock();
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
