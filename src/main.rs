mod addressing;
mod cpu;
mod error;
mod flags;
mod instructions;
mod opcodes;
mod palette;
mod rng;
mod rom;

use std::io::Write as _;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

use cpu::Cpu;
use error::CoreError;
use palette::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WINDOW_SCALE: u32 = 2;
const STEP_BUDGET: u64 = 100_000;

fn main() {
    env_logger::init();
    match run() {
        Ok(()) => {}
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}

fn rom_path_from_args_or_stdin() -> Result<String, CoreError> {
    if let Some(path) = std::env::args().nth(1) {
        return Ok(path);
    }
    print!("ROM path: ");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn run() -> Result<(), CoreError> {
    let path = rom_path_from_args_or_stdin()?;
    let mut cpu = Cpu::new();
    cpu.reset();
    let loaded = rom::load_rom(&mut cpu, &path, rom::DEFAULT_LOAD_BASE)?;
    log::info!("loaded {loaded} bytes from {path} at {:#06X}", rom::DEFAULT_LOAD_BASE);

    let sdl_context = sdl2::init().map_err(CoreError::HostInit)?;
    let video_subsystem = sdl_context.video().map_err(CoreError::HostInit)?;
    let window = video_subsystem
        .window(
            "mos6502-emu",
            SCREEN_WIDTH as u32 * WINDOW_SCALE,
            SCREEN_HEIGHT as u32 * WINDOW_SCALE,
        )
        .position_centered()
        .build()
        .map_err(|e| CoreError::HostInit(e.to_string()))?;
    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .map_err(|e| CoreError::HostInit(e.to_string()))?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(
            PixelFormatEnum::ARGB8888,
            SCREEN_WIDTH as u32,
            SCREEN_HEIGHT as u32,
        )
        .map_err(|e| CoreError::HostInit(e.to_string()))?;
    log::info!("SDL2 window and streaming texture created");

    let mut event_pump = sdl_context.event_pump().map_err(CoreError::HostInit)?;

    let mut steps_run: u64 = 0;
    'running: while steps_run < STEP_BUDGET && !cpu.is_halted() {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    break 'running;
                }
                Event::KeyDown { keycode: Some(code), .. } => {
                    cpu.keyboard_latch = keycode_to_byte(code);
                }
                Event::KeyUp { .. } => {
                    cpu.keyboard_latch = 0;
                }
                _ => {}
            }
        }

        cpu.step();
        steps_run += 1;

        texture
            .update(None, &pixels_as_bytes(&cpu.pixels), SCREEN_WIDTH * 4)
            .map_err(|e| CoreError::HostInit(e.to_string()))?;
        canvas.copy(&texture, None, None).map_err(CoreError::HostInit)?;
        canvas.present();
    }

    dump_diagnostics(&cpu, rom::DEFAULT_LOAD_BASE);
    Ok(())
}

/// Low 8 bits of the raw SDL key-symbol value, matching `keysym.sym & 0xFF`.
fn keycode_to_byte(code: Keycode) -> u8 {
    (code as i32 as u8) & 0xFF
}

fn pixels_as_bytes(pixels: &[u32]) -> Vec<u8> {
    pixels.iter().flat_map(|p| p.to_ne_bytes()).collect()
}

/// Register dump plus a small memory window around the load base, matching
/// the source's end-of-run diagnostic printout (see SPEC_FULL.md §10.5).
fn dump_diagnostics(cpu: &Cpu, load_base: u16) {
    log::info!(
        "A={:02X} X={:02X} Y={:02X} SP={:02X} PC={:04X} P={:02X}",
        cpu.a, cpu.x, cpu.y, cpu.sp, cpu.pc, cpu.p.bits()
    );
    let start = load_base.saturating_sub(16);
    let end = load_base.saturating_add(128);
    let mut row_start = start;
    let mut line = String::new();
    for addr in start..end {
        line.push_str(&format!("{:02X} ", cpu.read_u8(addr)));
        if (addr - start) % 16 == 15 {
            log::info!("{:04X}: {}", row_start, line.trim_end());
            line.clear();
            row_start = addr.wrapping_add(1);
        }
    }
    if !line.is_empty() {
        log::info!("{:04X}: {}", row_start, line.trim_end());
    }
}
