//! `gen_test_oam` writes a test OAM image of 64 sprites to stdout.
use std::io::{stdout, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use log::debug;

/// `gen_test_oam` writes a 256 byte OAM image of test sprites to stdout.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let _args: Args = Args::parse();

    let ram = ppu::oam();
    debug!("Sprite 0: {:?}", ppu::sprite(0));

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
