//! prelude exports the NES asset libraries (ROM, palette, APU and PPU data).

/// prelude exports common items for building NES assets.
pub mod prelude {
    pub use apu::*;
    pub use ines::*;
    pub use nes_pal::*;
    pub use ppu::*;
}
