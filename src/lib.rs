use std::{
    path::Path,
    time::{
        Duration,
        Instant,
    },
};

use anyhow::Error;
use macroquad::{
    input::{
        is_key_pressed,
        KeyCode,
    },
    window::next_frame,
};

pub mod constants;
pub mod display;
pub mod emulator;
pub mod keypad;
pub mod mem;
pub mod process;

/// Top-level scheduler loop. Ticks at 60 Hz gated on elapsed
/// wall-clock time, so a late frame never accumulates drift. Per
/// tick: snapshot the host keys, run the cycle budget (cut short
/// after a draw), decrement the timers, and hand a dirty framebuffer
/// to the renderer.
pub async fn run(rom_path: impl AsRef<Path>, cycles_per_tick: u32) -> Result<(), Error> {
    let rom = mem::Rom::load(rom_path)?;
    let mut emulator = emulator::Emulator::start(rom, emulator::Quirks::default());
    let host_keys = keypad::HostKeys::new();
    let mut renderer = display::Renderer::new();

    let start = Instant::now();
    // fire the first tick immediately
    let mut last_tick = start.checked_sub(Duration::new(1337, 0)).unwrap_or(start);

    loop {
        let now = Instant::now();
        if now.duration_since(last_tick).as_secs_f64() * 1000.0 >= constants::MS_PER_TICK {
            last_tick = now;

            emulator.set_keys(host_keys.snapshot());
            for _ in 0..cycles_per_tick {
                if emulator.cycle()? == emulator::CycleOutcome::Drew {
                    // cut the tick short to keep draw-to-input latency low
                    break;
                }
            }
            emulator.tick_timers();

            if emulator.framebuffer().is_dirty() {
                renderer.present(emulator.framebuffer());
                emulator.clear_dirty();
            }
        }

        renderer.draw();
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        next_frame().await;
    }

    Ok(())
}
