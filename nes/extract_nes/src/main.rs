//! `extract_nes` takes the path to the given ines file and splits it into
//! `<output>.trainer` (if present), `<output>.prg` and `<output>.chr`.
use std::fs::read;

use clap::Parser;
use color_eyre::eyre::Result;
use log::{debug, info};

/// `extract_nes` will split the given .nes file into its trainer, PRG and CHR segments.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(help = "Filename containing .nes data")]
    nes: String,

    #[arg(help = "Base filename for the extracted segments")]
    output: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let args: Args = Args::parse();

    let bytes: Vec<u8> = read(&args.nes)?;

    let header = match ines::parse_header(&bytes) {
        Ok(header) => header,
        Err(e) => {
            debug!("{}: {e}", args.nes);
            eprintln!("Invalid header!");
            std::process::exit(1);
        }
    };
    info!("NES header for {}\n{header}", args.nes);

    let segments = ines::extract(&bytes, &header);
    for path in ines::write_segments(&segments, &args.output)? {
        info!("Wrote {}", path.display());
    }
    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
