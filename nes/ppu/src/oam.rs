/// Size of OAM in bytes.
pub const OAM_SIZE: usize = 0x100;

/// Number of sprites OAM holds.
pub const SPRITES: usize = OAM_SIZE / 4;

/// Any Y at or past 0xEF hides the sprite.
pub const OFFSCREEN_Y: u8 = 0xFF;

/// `Sprite` is a single OAM entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Y position (top) minus one.
    pub y: u8,
    /// Tile index.
    pub tile: u8,
    /// Palette, priority and flip bits.
    pub attributes: u8,
    /// X position (left).
    pub x: u8,
}

impl Sprite {
    /// The entry in OAM byte order.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.y, self.tile, self.attributes, self.x]
    }
}

/// Returns the test sprite for the given OAM slot or None past the end of OAM.
///
/// All sprites are currently parked off screen. The on screen Y values
/// are noted with each group.
#[must_use]
pub fn sprite(index: u8) -> Option<Sprite> {
    let s = match index {
        // First 8 on one line, overlapping. (y = 25)
        0..=7 => Sprite {
            y: OFFSCREEN_Y,
            tile: 179 + index,
            attributes: 0xC1,
            x: 20 + index * 6,
        },
        // Next 6 on a diagonal, overlapping. (y = 40 + index * 5)
        8..=13 => Sprite {
            y: OFFSCREEN_Y,
            tile: 112 + index,
            attributes: 0x02,
            x: index * 7 + 20,
        },
        // Right edge. (y = 100)
        14 => Sprite {
            y: OFFSCREEN_Y,
            tile: 112,
            attributes: 0x03,
            x: 254,
        },
        15..=63 => Sprite {
            y: OFFSCREEN_Y,
            tile: 1 + index,
            attributes: 0x00,
            x: 100 + index,
        },
        _ => return None,
    };
    Some(s)
}

/// Build a full OAM image of all 64 test sprites.
#[must_use]
pub fn oam() -> [u8; OAM_SIZE] {
    let mut ram = [0u8; OAM_SIZE];
    for (idx, entry) in (0u8..).zip(ram.chunks_exact_mut(4)) {
        if let Some(s) = sprite(idx) {
            entry.copy_from_slice(&s.to_bytes());
        }
    }
    ram
}
