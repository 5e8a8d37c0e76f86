//! frame-dump: runs a seeded session headless and writes rendered
//! frames as PPM files for visual inspection.
//!
//! Usage:
//!   frame-dump --skin tank --seed 42 --ticks 300 --every 10 --output frames/

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use gridfire_core::commands::HostCommand;
use gridfire_core::constants::{PLAY_HEIGHT, PLAY_WIDTH};
use gridfire_core::enums::GameSkin;
use gridfire_core::input::{Action, InputSnapshot};
use gridfire_render::{render, Assets, Frame};
use gridfire_sim::engine::{GameEngine, SimConfig};

struct Options {
    skin: GameSkin,
    seed: u64,
    ticks: u64,
    every: u64,
    output: PathBuf,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = run(&options) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "frame-dump: render a seeded headless session to PPM frames\n\
         \n\
           --skin <tank|space>  Game skin (default: tank)\n\
           --seed <N>           Engine seed (default: 42)\n\
           --ticks <N>          Ticks to simulate (default: 300)\n\
           --every <N>          Dump every Nth tick (default: 10)\n\
           --output <dir>       Output directory (default: frames)\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let skin = match flag_value(args, "--skin").unwrap_or("tank") {
        "tank" => GameSkin::TankAssault,
        "space" => GameSkin::StarDefense,
        other => return Err(format!("Unknown skin: {other}")),
    };
    let parse_u64 = |flag: &str, default: u64| -> Result<u64, String> {
        match flag_value(args, flag) {
            Some(raw) => raw
                .parse()
                .map_err(|_| format!("Invalid value for {flag}: {raw}")),
            None => Ok(default),
        }
    };
    Ok(Options {
        skin,
        seed: parse_u64("--seed", 42)?,
        ticks: parse_u64("--ticks", 300)?,
        every: parse_u64("--every", 10)?.max(1),
        output: PathBuf::from(flag_value(args, "--output").unwrap_or("frames")),
    })
}

/// Scripted input so dumped frames show movement and fire.
fn scripted(tick: u64) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    if tick % 3 == 0 {
        input.set(Action::Fire, true);
    }
    if (tick / 20) % 2 == 0 {
        input.set(Action::MoveLeft, true);
    } else {
        input.set(Action::MoveRight, true);
    }
    input
}

fn run(options: &Options) -> Result<(), String> {
    fs::create_dir_all(&options.output)
        .map_err(|e| format!("Failed to create output directory: {e}"))?;

    let mut engine = GameEngine::new(SimConfig {
        seed: options.seed,
        skin: options.skin,
    });
    engine.queue_command(HostCommand::StartGame { skin: options.skin });

    // Placeholder rendering is fine for inspection dumps.
    let assets = Assets::new();
    let mut frame = Frame::new(PLAY_WIDTH as u32, PLAY_HEIGHT as u32);

    let mut dumped = 0u64;
    for tick in 0..options.ticks {
        let snapshot = engine.step(&scripted(tick));
        if tick % options.every != 0 {
            continue;
        }
        render(&snapshot, &assets, &mut frame);
        let path = options.output.join(format!("tick_{:06}.ppm", snapshot.time.tick));
        write_ppm(&path, &frame)?;
        dumped += 1;
        log::info!(
            "tick {:>5}  score {:>6}  hostiles {:>2}  -> {}",
            snapshot.time.tick,
            snapshot.score,
            snapshot.hostiles.len(),
            path.display()
        );
    }

    log::info!("wrote {dumped} frames to {}", options.output.display());
    Ok(())
}

/// Binary PPM (P6): trivial to open, no image crate needed.
fn write_ppm(path: &Path, frame: &Frame) -> Result<(), String> {
    let mut out = Vec::with_capacity((frame.width() * frame.height() * 3 + 32) as usize);
    write!(out, "P6\n{} {}\n255\n", frame.width(), frame.height())
        .map_err(|e| format!("Failed to encode PPM header: {e}"))?;
    for pixel in frame.rgba().chunks_exact(4) {
        out.extend_from_slice(&pixel[..3]);
    }
    fs::write(path, out).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
