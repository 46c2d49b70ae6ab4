//! `convert_palette` loads a 64 entry 24 bit palette and writes it to
//! stdout packed as 8 bit RRRGGGBB entries.
use std::fs::{read, read_to_string};
use std::io::{stdout, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use log::info;
use nes_pal::{parse_pal, parse_text, quantize_palette};

/// `convert_palette` will load the given palette and write the 64 packed entries to stdout.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(
        long,
        default_value = "colors-24.txt",
        help = "Palette file (whitespace separated decimal RGB values)"
    )]
    input: String,

    #[arg(
        long,
        default_value_t = false,
        help = "Treat the input as a raw 192 byte .pal file"
    )]
    pal: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args: Args = Args::parse();

    let colors = if args.pal {
        parse_pal(&read(&args.input)?)
    } else {
        parse_text(&read_to_string(&args.input)?)
    }
    .wrap_err_with(|| format!("Can't load palette {}", args.input))?;
    info!("Loaded {} colors from {}", colors.len(), args.input);

    let mut out = stdout().lock();
    out.write_all(&quantize_palette(&colors))?;
    out.flush()?;
    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
