//! `gen_apu_lengths` writes the APU length counter table to stdout.
use std::io::{stdout, Write};

use apu::LENGTH_TABLE;
use clap::Parser;
use color_eyre::eyre::Result;
use log::debug;

/// `gen_apu_lengths` writes the 32 byte APU length counter table to stdout.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let _args: Args = Args::parse();

    debug!("Writing {} length entries", LENGTH_TABLE.len());
    let mut out = stdout().lock();
    out.write_all(&LENGTH_TABLE)?;
    out.flush()?;
    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
