//! Command-line interface for colorz
//!
//! Prints one palette entry per line as `#rrggbb #rrggbb` (base, bold),
//! the format terminal theme generators consume. `--json` switches to the
//! serde serialization of the palette.

use colorz::{palette_from_path, ExtractOptions, PaletteEntry};
use std::{env, path::Path, path::PathBuf, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut options = ExtractOptions::default();
    let mut json_output = false;
    let mut config_path: Option<PathBuf> = None;
    let mut image_path_arg: Option<String> = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" => options.num_colors = parse_value(&args, &mut i, "-n"),
            "--minv" => options.min_value = parse_value(&args, &mut i, "--minv"),
            "--maxv" => options.max_value = parse_value(&args, &mut i, "--maxv"),
            "--bold" => options.bold_add = parse_value(&args, &mut i, "--bold"),
            "--seed" => options.seed = Some(parse_value(&args, &mut i, "--seed")),
            "--no-order" => options.order_colors = false,
            "--json" => json_output = true,
            "--config" => {
                config_path = Some(PathBuf::from(take_value(&args, &mut i, "--config")));
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    // A config file provides the baseline; explicit flags were already
    // applied on top of the defaults, so re-apply them after loading.
    if let Some(path) = config_path {
        match ExtractOptions::from_json_file(&path) {
            Ok(loaded) => {
                let flags = options;
                options = loaded;
                merge_flag_overrides(&mut options, &flags, &args);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    match palette_from_path(image_path, &options) {
        Ok(palette) => print_palette(&palette, json_output),
        Err(error) => {
            eprintln!("Palette extraction failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

/// Take the value following a flag, or bail out with a usage error
fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> &'a str {
    *i += 1;
    match args.get(*i) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires a value", flag);
            process::exit(1);
        }
    }
}

/// Take and parse the value following a flag
fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> T {
    let raw = take_value(args, i, flag);
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Error: Invalid value for {}: {}", flag, raw);
            process::exit(1);
        }
    }
}

/// Re-apply command-line flags over options loaded from a config file
fn merge_flag_overrides(options: &mut ExtractOptions, flags: &ExtractOptions, args: &[String]) {
    let given = |name: &str| args.iter().any(|a| a == name);
    if given("-n") {
        options.num_colors = flags.num_colors;
    }
    if given("--minv") {
        options.min_value = flags.min_value;
    }
    if given("--maxv") {
        options.max_value = flags.max_value;
    }
    if given("--bold") {
        options.bold_add = flags.bold_add;
    }
    if given("--seed") {
        options.seed = flags.seed;
    }
    if given("--no-order") {
        options.order_colors = false;
    }
}

fn print_palette(palette: &[PaletteEntry], json_output: bool) {
    if json_output {
        match serde_json::to_string_pretty(palette) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing palette: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    for entry in palette {
        println!("{} {}", entry.base.to_hex(), entry.bold.to_hex());
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Generate a terminal color scheme from an image.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n <count>       Number of colors to generate, excluding bold (default: 6)");
    eprintln!("  --minv <0-255>   Minimum value (brightness) for the colors (default: 170)");
    eprintln!("  --maxv <0-255>   Maximum value (brightness) for the colors (default: 200)");
    eprintln!("  --bold <delta>   How much value to add for bold colors (default: 50)");
    eprintln!("  --no-order       Keep cluster order instead of sorting by hue");
    eprintln!("  --seed <u64>     Seed the clustering for reproducible output");
    eprintln!("  --config <file>  Load options from a JSON file (flags still win)");
    eprintln!("  --json           Print the palette as JSON instead of hex pairs");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} -n 8 --seed 42 photo.jpg", program_name);
    eprintln!("  {} --json --config options.json photo.png", program_name);
}
