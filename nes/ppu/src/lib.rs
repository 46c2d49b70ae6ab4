//! `ppu` generates test images of the PPU memory regions in the original
//! NES (palette RAM, OAM and nametables) for loading directly into VRAM.

mod nametable;
mod oam;
mod palette_ram;

pub use nametable::{
    attribute_byte, attribute_table, nametable, nametables, Theme, ATTRIBUTE_SIZE, NAMETABLE_COLS,
    NAMETABLE_ROWS, NAMETABLE_SIZE,
};
pub use oam::{oam, sprite, Sprite, OAM_SIZE, OFFSCREEN_Y, SPRITES};
pub use palette_ram::{is_usable_color, palette_ram, random_color, PALETTE_RAM_SIZE};

#[cfg(test)]
mod tests;
