use rand::Rng;

/// Size of palette RAM (4 background and 4 sprite palettes of 4 entries).
pub const PALETTE_RAM_SIZE: usize = 0x20;

const ENTRIES_PER_PALETTE: usize = 4;

// Universal background color (blue) which starts every palette.
const BACKGROUND: u8 = 0x21;

// Palettes with fixed contents rather than random colors.
const FIXED_PALETTES: [(usize, [u8; 3]); 2] = [(0, [0x20, 0x0D, 0x0D]), (4, [0x15, 0x35, 0x17])];

const MIN_COLOR: u8 = 1;
const MAX_COLOR: u8 = 60;

/// Whether the color index is one we want showing up in random palettes.
/// Columns 0 and 13-15 hold greys/blacks that disappear against the test
/// background.
#[must_use]
pub fn is_usable_color(val: u8) -> bool {
    (1..=12).contains(&(val % 16))
}

/// Pick a random usable color between 1 and 60.
pub fn random_color<R: Rng>(rng: &mut R) -> u8 {
    loop {
        let val = rng.gen_range(MIN_COLOR..=MAX_COLOR);
        if is_usable_color(val) {
            return val;
        }
    }
}

/// Build palette RAM where every palette starts with the background color.
/// Palettes 0 and 4 are fixed and the rest are random usable colors.
pub fn palette_ram<R: Rng>(rng: &mut R) -> [u8; PALETTE_RAM_SIZE] {
    let mut ram = [0u8; PALETTE_RAM_SIZE];
    for (idx, palette) in ram.chunks_exact_mut(ENTRIES_PER_PALETTE).enumerate() {
        palette[0] = BACKGROUND;
        match FIXED_PALETTES.iter().find(|(p, _)| *p == idx) {
            Some((_, colors)) => palette[1..].copy_from_slice(colors),
            None => {
                for c in &mut palette[1..] {
                    *c = random_color(rng);
                }
            }
        }
    }
    ram
}
