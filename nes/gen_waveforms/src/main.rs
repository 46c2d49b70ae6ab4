//! `gen_waveforms` writes one cycle each of the sine, square, triangle,
//! saw, noise and custom waveforms to stdout as big endian 16 bit samples.
use std::io::{stdout, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use log::info;
use nes_assets::prelude::*;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

/// `gen_waveforms` samples each waveform at the given depth and cycle size
/// and writes the result to stdout.
///
/// Samples are always written as 16 bits even when depth is smaller.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(help = "Sample depth in bits (1-16)")]
    depth: u32,

    #[arg(help = "Number of samples per waveform")]
    size: usize,

    #[arg(long, help = "Seed for the noise waveform")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args: Args = Args::parse();

    let bytes = match args.seed {
        Some(seed) => generate(args.depth, args.size, &mut StdRng::seed_from_u64(seed))?,
        None => generate(args.depth, args.size, &mut thread_rng())?,
    };
    info!(
        "{} bytes of waveforms ({} samples each) at depth {}",
        bytes.len(),
        args.size,
        args.depth
    );

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
