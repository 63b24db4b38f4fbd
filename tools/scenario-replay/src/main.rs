//! scenario-replay: headless vessel-systems runner.
//!
//! Usage:
//!   scenario-replay run --scenario xr3.scn --ticks 300 --commands cmds.json --output out.scn
//!   scenario-replay check-config --config vessel.toml --override phoenix.toml

use std::path::{Path, PathBuf};
use std::process;

use spaceplane_core::commands::VesselCommand;
use spaceplane_sim::config::{SimConfig, VesselConfig};
use spaceplane_sim::VesselEngine;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "check-config" => cmd_check_config(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "scenario-replay: SPACEPLANE vessel-systems runner\n\
         \n\
         Commands:\n\
         \n\
         run           Load a scenario, apply commands, tick, print the final snapshot\n\
         \n\
           --scenario <path>  Scenario file to load (optional, default: fresh vessel)\n\
           --ticks <N>        Ticks to run (default: 30)\n\
           --seed <N>         RNG seed (default: 42)\n\
           --config <path>    Vessel config TOML (optional)\n\
           --override <path>  Vessel override TOML layered on --config\n\
           --commands <path>  JSON array of commands queued before the first tick\n\
           --output <path>    Write the saved scenario here (default: stdout)\n\
         \n\
         check-config  Load and validate a vessel config\n\
         \n\
           --config <path>    Vessel config TOML\n\
           --override <path>  Vessel override TOML (optional)\n\
         \n\
         Examples:\n\
         \n\
           scenario-replay run --scenario xr3.scn --ticks 900 --commands open_bay.json\n\
           scenario-replay check-config --config xr3.toml --override phoenix.toml\n"
    );
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    parse_flag(args, flag).map(PathBuf::from)
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_flag(args, flag) {
        Some(value) => match value.parse::<T>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {value}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn load_vessel(args: &[String]) -> VesselConfig {
    let config = parse_path(args, "--config");
    let overlay = parse_path(args, "--override");
    match (config, overlay) {
        (Some(config), overlay) => match VesselConfig::load(&config, overlay.as_deref()) {
            Ok(vessel) => vessel,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        (None, Some(_)) => {
            eprintln!("Error: --override requires --config");
            process::exit(1);
        }
        (None, None) => VesselConfig::default(),
    }
}

fn read_to_string(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Error: failed to read {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let vessel = load_vessel(args);
    let ticks: u32 = parse_number(args, "--ticks", 30);
    let seed: u64 = parse_number(args, "--seed", 42);

    let mut engine = match VesselEngine::new(SimConfig {
        seed,
        vessel,
        ..Default::default()
    }) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Some(path) = parse_path(args, "--scenario") {
        let contents = read_to_string(&path);
        let mut unrecognized = 0usize;
        engine.load_scenario(contents.lines(), |line| {
            if !line.trim().is_empty() {
                unrecognized += 1;
            }
        });
        eprintln!("Loaded {} ({unrecognized} lines not handled)", path.display());
    }

    if let Some(path) = parse_path(args, "--commands") {
        let contents = read_to_string(&path);
        let commands: Vec<VesselCommand> = match serde_json::from_str(&contents) {
            Ok(commands) => commands,
            Err(e) => {
                eprintln!("Error: invalid command file {}: {e}", path.display());
                process::exit(1);
            }
        };
        eprintln!("Queued {} commands", commands.len());
        engine.queue_commands(commands);
    }

    let mut last = engine.tick();
    for _ in 1..ticks {
        last = engine.tick();
    }

    match serde_json::to_string_pretty(&last) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to serialize snapshot: {e}");
            process::exit(1);
        }
    }

    let saved = engine.save_scenario().join("\n") + "\n";
    match parse_path(args, "--output") {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, saved) {
                eprintln!("Error: failed to write {}: {e}", path.display());
                process::exit(1);
            }
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{saved}"),
    }
}

// --- Check-config command ---

fn cmd_check_config(args: &[String]) {
    if parse_path(args, "--config").is_none() {
        eprintln!("Error: --config <path> is required");
        process::exit(1);
    }
    let vessel = load_vessel(args);
    eprintln!(
        "{}: empty mass {:.0} kg, {} payload slots, {} mechanism overrides",
        vessel.name,
        vessel.empty_mass_kg,
        vessel.payload_slots,
        vessel.mechanisms.len()
    );
}
