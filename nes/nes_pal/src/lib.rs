//! `nes_pal` implements a library for loading 24 bit NES palettes (either
//! whitespace separated text or raw .pal files) and packing them down into
//! 8 bit RRRGGGBB entries.

use color_eyre::eyre::{eyre, Result, WrapErr};
use log::debug;


/// `Color` describes a parsed palette entry
#[derive(Debug, PartialEq)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color {
    /// Pack this color into 3 bits red, 3 bits green and 2 bits blue.
    #[must_use]
    pub fn quantize(&self) -> u8 {
        ((self.r >> 5) << 5) | ((self.g >> 5) << 2) | (self.b >> 6)
    }
}

const ENTRIES: usize = 64;
const BYTE_PER_ENTRY: usize = 3;
const TOTAL_SIZE: usize = ENTRIES * BYTE_PER_ENTRY;

fn to_colors(values: &[u8]) -> Vec<Color> {
    values
        .chunks_exact(BYTE_PER_ENTRY)
        .take(ENTRIES)
        .map(|c| Color {
            r: c[0],
            g: c[1],
            b: c[2],
        })
        .collect()
}

/// Given the input slice of raw PAL data return a Vec of parsed entries.
///
/// # Errors
/// The input must be exactly sized to 192 bytes (64 entries) to match NES palettes or
/// an error will result.
pub fn parse_pal(input: &[u8]) -> Result<Vec<Color>> {
    if input.len() != TOTAL_SIZE {
        return Err(eyre!(
            "Must have {} bytes for {} entries in the PAL data",
            TOTAL_SIZE,
            ENTRIES
        ));
    }
    Ok(to_colors(input))
}

/// Given whitespace separated decimal values return the first 64 RGB
/// triples found. Anything past the first 192 values is ignored.
///
/// # Errors
/// Any value which isn't 0-255 or having less than 192 values.
pub fn parse_text(input: &str) -> Result<Vec<Color>> {
    let mut values = Vec::with_capacity(TOTAL_SIZE);
    for (idx, tok) in input.split_whitespace().enumerate() {
        let val = tok
            .parse::<u8>()
            .wrap_err_with(|| format!("Invalid palette value {tok:?} at position {idx}"))?;
        values.push(val);
    }
    if values.len() < TOTAL_SIZE {
        return Err(eyre!(
            "Need {TOTAL_SIZE} values for {ENTRIES} entries but only found {}",
            values.len()
        ));
    }
    if values.len() > TOTAL_SIZE {
        debug!("Ignoring {} trailing values", values.len() - TOTAL_SIZE);
    }
    Ok(to_colors(&values))
}

/// Quantize each color in order into its packed byte form.
#[must_use]
pub fn quantize_palette(colors: &[Color]) -> Vec<u8> {
    colors.iter().map(Color::quantize).collect()
}
