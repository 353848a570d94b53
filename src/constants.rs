pub const TOTAL_RAM: usize = 0x1000;
pub const MEMORY_OFFSET: usize = 0x200;
pub const AVAILABLE_RAM: usize = TOTAL_RAM - MEMORY_OFFSET;

pub const FONT_ADDR: usize = 0x000;
pub const FONT_GLYPH_SIZE: usize = 5;

pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;
pub const PIXEL_SIZE: i32 = 10;

pub const STACK_DEPTH: usize = 16;

pub const TICKS_PER_SECOND: usize = 60;
pub const MS_PER_TICK: f64 = 1000.0 / TICKS_PER_SECOND as f64;
pub const INSTRUCTIONS_PER_SECOND: usize = 700;
pub const DEFAULT_CYCLES_PER_TICK: u32 = (INSTRUCTIONS_PER_SECOND / TICKS_PER_SECOND) as u32;
