//! `ines` provides utilities for splitting an INES file into its relative
//! components (trainer, PRG, CHR) so they can be fed to other tools.
//!
//! Only the fixed iNES header fields needed to locate the segments are
//! decoded. See <https://www.nesdev.org/wiki/INES> for the full layout.

use color_eyre::eyre::Result;
use log::debug;
use std::fmt::{Debug, Display};
use std::fs::write;
use std::path::PathBuf;
use strum_macros::Display;
use thiserror::Error;


/// `HeaderError` defines the conditions where `parse_header` refuses
/// the given data. No output should be produced for either.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// The first 3 bytes aren't the NES signature.
    #[error("Doesn't have NES header")]
    InvalidSignature,

    /// The signature matched but the full header isn't present.
    #[error("Header needs 16 bytes but data is only {len} bytes")]
    Truncated {
        /// len is the size of the data given.
        len: usize,
    },
}

/// Nametable mirroring
#[derive(Default, Debug, Display, PartialEq, Eq)]
pub enum NametableMirroring {
    /// Horizonal
    #[default]
    Horizontal,

    /// Vertical
    Vertical,
}

/// The decoded fixed portion of an iNES header.
#[derive(Clone, PartialEq, Eq)]
pub struct Header {
    /// Signature bytes (always NES once parsed)
    pub magic: [u8; 3],

    /// PRG-ROM size multiplier (16KB units)
    pub prg_blocks: u8,

    /// CHR-ROM size multiplier (8KB units)
    pub chr_blocks: u8,

    /// Flag bytes 6 through 10
    pub flags: [u8; 5],
}

impl Header {
    /// PRG-ROM size in bytes.
    #[must_use]
    pub fn prg_size(&self) -> usize {
        usize::from(self.prg_blocks) * PRG_BLOCK_SIZE
    }

    /// CHR-ROM size in bytes.
    #[must_use]
    pub fn chr_size(&self) -> usize {
        usize::from(self.chr_blocks) * CHR_BLOCK_SIZE
    }

    /// Returns the given flag byte (6-10) or None if out of that range.
    #[must_use]
    pub fn flag(&self, byte: usize) -> Option<u8> {
        if (FLAGS_6_BYTE..FLAGS_6_BYTE + self.flags.len()).contains(&byte) {
            Some(self.flags[byte - FLAGS_6_BYTE])
        } else {
            None
        }
    }

    /// Whether a 512 byte trainer precedes PRG data.
    #[must_use]
    pub fn has_trainer(&self) -> bool {
        self.flags[0] & TRAINER_MASK != 0x00
    }

    /// Whether battery backed RAM is present.
    ///
    /// NOTE: This shares the trainer bit as the extractor has always
    /// tested 0x02 for trainers.
    #[must_use]
    pub fn battery(&self) -> bool {
        self.flags[0] & BATTERY_MASK != 0x00
    }

    /// Nametable mirroring from flags 6.
    #[must_use]
    pub fn mirroring(&self) -> NametableMirroring {
        if self.flags[0] & MIRROR_MASK != 0x00 {
            NametableMirroring::Vertical
        } else {
            NametableMirroring::Horizontal
        }
    }

    /// Mapper number from the nibbles in flags 6 and 7.
    #[must_use]
    pub fn mapper(&self) -> u8 {
        ((self.flags[0] & MAPPER_D0_D3_MASK) >> MAPPER_D0_D3_SHIFT)
            | (self.flags[1] & MAPPER_D4_D7_MASK)
    }
}

impl Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Header")
            .field("prg_size", &self.prg_size())
            .field("chr_size", &self.chr_size())
            .field("trainer", &self.has_trainer())
            .field("battery", &self.battery())
            .field("nametable_mirror", &self.mirroring())
            .field("mapper", &self.mapper())
            .field("flags", &self.flags)
            .finish()
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The debug version is fine.
        write!(f, "{self:?}")
    }
}

/// The segments cut from an image after the header.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Segments {
    /// Optional trainer data
    pub trainer: Option<Vec<u8>>,

    /// PRG-ROM data
    pub prg: Vec<u8>,

    /// CHR-ROM data
    pub chr: Vec<u8>,
}

const MIRROR_MASK: u8 = 0x01;
const BATTERY_MASK: u8 = 0x02;
const TRAINER_MASK: u8 = 0x02;
const MAPPER_D0_D3_MASK: u8 = 0xF0;
const MAPPER_D4_D7_MASK: u8 = 0xF0;
const MAPPER_D0_D3_SHIFT: usize = 4;

const SIGNATURE: &[u8; 3] = b"NES";

const TRAINER_SIZE: usize = 512;
const HEADER_SIZE: usize = 16;
const PRG_BLOCK_SIZE: usize = 16_384;
const CHR_BLOCK_SIZE: usize = 8_192;

const PRG_BYTE: usize = 4;
const CHR_BYTE: usize = 5;
const FLAGS_6_BYTE: usize = 6;
const FLAGS_10_BYTE: usize = 10;

/// Parse the header at the start of the given .ines data.
///
/// # Errors
/// The data must start with the NES signature and hold a full header.
pub fn parse_header(data: &[u8]) -> std::result::Result<Header, HeaderError> {
    if data.len() < SIGNATURE.len() || &data[..SIGNATURE.len()] != SIGNATURE {
        return Err(HeaderError::InvalidSignature);
    }
    if data.len() < HEADER_SIZE {
        return Err(HeaderError::Truncated { len: data.len() });
    }

    let mut flags = [0u8; 5];
    flags.copy_from_slice(&data[FLAGS_6_BYTE..=FLAGS_10_BYTE]);
    Ok(Header {
        magic: *SIGNATURE,
        prg_blocks: data[PRG_BYTE],
        chr_blocks: data[CHR_BYTE],
        flags,
    })
}

// Returns up to len bytes from pos. Anything past the end is simply missing.
fn slice_from(data: &[u8], pos: usize, len: usize) -> &[u8] {
    let start = pos.min(data.len());
    let end = pos.saturating_add(len).min(data.len());
    &data[start..end]
}

/// Cut the trainer (if flagged), PRG and CHR segments out of the data in
/// that order. A short image produces short (or empty) segments rather
/// than an error.
#[must_use]
pub fn extract(data: &[u8], header: &Header) -> Segments {
    let mut pos = HEADER_SIZE;
    let mut segments = Segments::default();

    if header.has_trainer() {
        segments.trainer = Some(slice_from(data, pos, TRAINER_SIZE).to_vec());
        pos += TRAINER_SIZE;
    }

    segments.prg = slice_from(data, pos, header.prg_size()).to_vec();
    pos += header.prg_size();

    segments.chr = slice_from(data, pos, header.chr_size()).to_vec();

    if segments.prg.len() != header.prg_size() || segments.chr.len() != header.chr_size() {
        debug!(
            "Short image: PRG {}/{} CHR {}/{}",
            segments.prg.len(),
            header.prg_size(),
            segments.chr.len(),
            header.chr_size()
        );
    }
    segments
}

/// Write each segment to `<base>.trainer`, `<base>.prg` and `<base>.chr`.
/// The trainer file is only written when one is present.
///
/// # Errors
/// Any failure creating or writing the files.
pub fn write_segments(segments: &Segments, base: &str) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut emit = |ext: &str, data: &[u8]| -> Result<()> {
        let path = PathBuf::from(format!("{base}.{ext}"));
        write(&path, data)?;
        debug!("Wrote {} bytes to {}", data.len(), path.display());
        written.push(path);
        Ok(())
    };

    if let Some(trainer) = &segments.trainer {
        emit("trainer", trainer)?;
    }
    emit("prg", &segments.prg)?;
    emit("chr", &segments.chr)?;
    Ok(written)
}
