//! Spawn-pacing simulator CLI.
//!
//! Plays many headless sessions with a scripted jumper and reports scores,
//! obstacle mix and spawn spacing.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 1000 runs, perfect play
//!   cargo run --bin simulate -- -n 100 -m 0.1    # 100 runs, miss 1 obstacle in 10
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use endless_runner::build_info::build_label;
use endless_runner::core::config::GameConfig;
use endless_runner::simulator::{run_simulation, SimConfig};
use std::env;
use std::process;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    if let Err(message) = config.validate() {
        eprintln!("Invalid configuration: {}", message);
        process::exit(1);
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ENDLESS RUNNER SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("  build {}", build_label());
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Frames:     {}", config.max_frames_per_run);
    println!("  Jump Distance:  {}", config.autopilot.jump_distance);
    println!("  Miss Chance:    {:.3}", config.autopilot.miss_chance);
    println!(
        "  Spawn Window:   {}..={} frames",
        config.game.min_spawn_distance, config.game.max_spawn_distance
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, json) {
            eprintln!("Failed to write JSON report: {}", e);
            process::exit(1);
        }
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => {
                config.num_runs = parse_value(flag, args.get(i + 1))?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(flag, args.get(i + 1))?);
                i += 1;
            }
            "-f" | "--frames" => {
                config.max_frames_per_run = parse_value(flag, args.get(i + 1))?;
                i += 1;
            }
            "-j" | "--jump-distance" => {
                config.autopilot.jump_distance = parse_value(flag, args.get(i + 1))?;
                i += 1;
            }
            "-m" | "--miss-chance" => {
                config.autopilot.miss_chance = parse_value(flag, args.get(i + 1))?;
                i += 1;
            }
            "-c" | "--config" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires a file path", flag))?;
                config.game = load_game_config(path)?;
                i += 1;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Parse the value following `flag`, naming the flag on failure.
fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} got an invalid value: {}", flag, value))
}

fn load_game_config(path: &str) -> Result<GameConfig, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read config file {}: {}", path, e))?;
    let config = GameConfig::from_json(&json).map_err(|e| format!("{}: {}", path, e))?;
    log::info!("Loaded game config from {}", path);
    Ok(config)
}

fn print_help() {
    println!("Endless Runner Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>           Number of simulation runs (default: 1000)");
    println!("    -s, --seed <S>           Random seed for reproducibility");
    println!("    -f, --frames <F>         Max frames per run (default: 18,000)");
    println!("    -j, --jump-distance <D>  Autopilot jump gap in pixels (default: 20)");
    println!("    -m, --miss-chance <P>    Chance to ignore an obstacle (default: 0.0)");
    println!("    -c, --config <FILE>      Load game constants from a JSON file");
    println!("    -v, --verbose            Per-run output");
    println!("    --json                   Save JSON report");
    println!("    -h, --help               Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                      # Default run");
    println!("    cargo run --bin simulate -- -m 0.05          # Sloppy player");
    println!("    cargo run --bin simulate -- --seed 42        # Reproducible");
    println!("    cargo run --bin simulate -- -c tuning.json   # Custom constants");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parses_all_numeric_flags() {
        let config = parse_args(&args(&[
            "-n", "5", "-s", "42", "-f", "900", "-j", "12", "-m", "0.25", "--json",
        ]))
        .unwrap();
        assert_eq!(config.num_runs, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_frames_per_run, 900);
        assert_eq!(config.autopilot.jump_distance, 12);
        assert!((config.autopilot.miss_chance - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bad_seed_is_an_error() {
        let err = parse_args(&args(&["-s", "abc"])).unwrap_err();
        assert!(err.contains("-s"), "unexpected error: {}", err);
        assert!(err.contains("abc"));
    }

    #[test]
    fn test_bad_run_count_is_an_error() {
        assert!(parse_args(&args(&["--runs", "many"])).is_err());
        assert!(parse_args(&args(&["-m", "often"])).is_err());
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let err = parse_args(&args(&["-n"])).unwrap_err();
        assert!(err.contains("requires a value"));
        assert!(parse_args(&args(&["-c"])).is_err());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(parse_args(&args(&["--zone", "3"])).is_err());
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = parse_args(&args(&["-c", "/nonexistent/tuning.json"])).unwrap_err();
        assert!(err.contains("could not read config file"));
    }
}
