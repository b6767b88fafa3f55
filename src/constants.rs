/// Bytes of addressable memory.
pub const MEMORY_SIZE: usize = 4096;

/// Address at which program images are loaded and where execution starts.
pub const PROGRAM_START: usize = 0x200;

/// Display width in cells.
pub const DISPLAY_WIDTH: usize = 64;

/// Display height in cells.
pub const DISPLAY_HEIGHT: usize = 32;

/// A lit framebuffer cell. Unlit cells are 0, so a display can treat each
/// cell directly as a fully opaque or fully transparent pixel.
pub const PIXEL_ON: u32 = 0xFFFF_FFFF;

/// First byte of the builtin font.
pub const FONT_START: usize = 0x050;

/// Bytes per font glyph; each glyph is 8 pixels wide and 5 rows tall.
pub const GLYPH_SIZE: usize = 5;

/// Glyphs for the hexadecimal digits 0-F, one row per byte.
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
