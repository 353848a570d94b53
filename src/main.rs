use std::{
    path::PathBuf,
    process,
};

use chip8vm::constants;
use clap::Parser;
use macroquad::window::Conf;

#[derive(Parser, Debug)]
#[command(version, about = "CHIP-8 emulator")]
struct Args {
    /// Path to the ROM image to run
    rom: PathBuf,

    /// Dispatcher cycles per 60 Hz tick
    #[arg(default_value_t = constants::DEFAULT_CYCLES_PER_TICK)]
    cycles_per_tick: u32,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "CHIP-8".to_owned(),
        window_width: constants::SCREEN_WIDTH as i32 * constants::PIXEL_SIZE,
        window_height: constants::SCREEN_HEIGHT as i32 * constants::PIXEL_SIZE,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    if let Err(err) = chip8vm::run(&args.rom, args.cycles_per_tick).await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
