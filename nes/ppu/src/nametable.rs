use log::debug;
use rand::Rng;
use strum_macros::{Display, EnumIter, EnumString};

/// Tile rows in a nametable.
pub const NAMETABLE_ROWS: usize = 30;

/// Tile columns in a nametable.
pub const NAMETABLE_COLS: usize = 32;

/// Size of the tile portion of a nametable.
pub const NAMETABLE_SIZE: usize = NAMETABLE_ROWS * NAMETABLE_COLS;

/// Size of the attribute table following each nametable.
pub const ATTRIBUTE_SIZE: usize = 64;

// Empty sky tile.
const BLANK: u8 = 36;

/// `Theme` selects which sprite set is tiled across the nametables.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Theme {
    /// Two nametables of clouds (176 178 top, 177 179 bottom) in blocks of
    /// 4 columns with a blank row between each.
    #[default]
    Clouds,

    /// One nametable of goombas (112 113 top, 114 115 bottom).
    Goombas,

    /// One nametable of cheep-cheeps (178 179 top, 180 181 bottom).
    CheepCheeps,
}

impl Theme {
    /// The tile at the given position.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn tile(self, row: usize, col: usize) -> u8 {
        let odd = (col % 2) as u8;
        match self {
            Self::Clouds => match row % 3 {
                0 => BLANK,
                _ if col % 8 > 3 => BLANK,
                1 => 176 + 2 * odd,
                _ => 177 + 2 * odd,
            },
            Self::Goombas => {
                if row % 2 == 0 {
                    112 + odd
                } else {
                    114 + odd
                }
            }
            Self::CheepCheeps => {
                if row % 2 == 0 {
                    178 + odd
                } else {
                    180 + odd
                }
            }
        }
    }

    /// How many nametable + attribute table pairs are emitted.
    #[must_use]
    pub fn tables(self) -> usize {
        match self {
            Self::Clouds => 2,
            Self::Goombas | Self::CheepCheeps => 1,
        }
    }

    /// The fixed palette used in every attribute quadrant.
    #[must_use]
    pub fn palette(self) -> u8 {
        match self {
            Self::Clouds => 0,
            Self::Goombas => 1,
            Self::CheepCheeps => 2,
        }
    }
}

/// Pack palettes for the top two and bottom two quadrants of a 32x32
/// pixel area into an attribute byte.
#[must_use]
pub fn attribute_byte(top: u8, bottom: u8) -> u8 {
    ((bottom & 0x03) << 6) | ((bottom & 0x03) << 4) | ((top & 0x03) << 2) | (top & 0x03)
}

/// Build the tile portion of one nametable.
#[must_use]
pub fn nametable(theme: Theme) -> Vec<u8> {
    let mut out = Vec::with_capacity(NAMETABLE_SIZE);
    for row in 0..NAMETABLE_ROWS {
        out.extend((0..NAMETABLE_COLS).map(|col| theme.tile(row, col)));
    }
    out
}

/// Build an attribute table. Random quadrant palettes are always drawn but
/// only used when `random` is set, otherwise every byte uses the theme's
/// fixed palette.
pub fn attribute_table<R: Rng>(theme: Theme, random: bool, rng: &mut R) -> Vec<u8> {
    (0..ATTRIBUTE_SIZE)
        .map(|_| {
            let top = rng.gen_range(0..=3);
            let bottom = rng.gen_range(0..=3);
            if random {
                attribute_byte(top, bottom)
            } else {
                attribute_byte(theme.palette(), theme.palette())
            }
        })
        .collect()
}

/// Build every nametable (each followed by its attribute table) for the theme.
pub fn nametables<R: Rng>(theme: Theme, random_attributes: bool, rng: &mut R) -> Vec<u8> {
    let mut out = Vec::with_capacity(theme.tables() * (NAMETABLE_SIZE + ATTRIBUTE_SIZE));
    for _ in 0..theme.tables() {
        out.extend(nametable(theme));
        out.extend(attribute_table(theme, random_attributes, rng));
    }
    debug!("{theme} nametables: {} bytes", out.len());
    out
}
