// Floorplan generator CLI: batch entry point for dataset building.
//
// Generates one layout (`--seed`) or a batch of layouts whose seeds are
// derived from a base seed, and writes each as `layout-<id>.json`.
//
// Usage:
//   floorgen [OPTIONS]
//     --seed <SEED>           Generate a single layout for this seed
//     --count <N>             Batch size, clamped to 15..=150 (default: 15)
//     --base-seed <SEED>      Seed the batch's seed tokens derive from (default: 1001)
//     --preset <ID>           Built-in constraint preset (default: baseline)
//     --constraints <FILE>    Load constraints from a JSON file instead of a preset
//     --sanitize              Clamp constraints like the interactive editor does
//     --out <DIR>             Output directory (default: out)
//     --print                 Print JSON to stdout instead of writing files
//     --list-presets          List built-in presets and exit
//
// Logging goes to stderr through `tracing`; set RUST_LOG (e.g.
// `RUST_LOG=floorplan_gen=trace`) for per-room detail.

use std::path::PathBuf;

use floorplan_gen::batch::{
    DEFAULT_GENERATION_COUNT, clamp_generation_count, generate_batch, seed_tokens,
};
use floorplan_gen::bounds::footprint_bounds;
use floorplan_gen::config::{Constraints, DEFAULT_SEED, find_preset, presets};
use floorplan_gen::error::Result;
use floorplan_gen::export;
use floorplan_gen::types::Layout;
use tracing_subscriber::EnvFilter;

/// Parsed command line.
#[derive(Clone, Debug, PartialEq)]
struct CliOptions {
    seed: Option<String>,
    count: usize,
    base_seed: String,
    preset: String,
    constraints_path: Option<PathBuf>,
    sanitize: bool,
    out_dir: PathBuf,
    print: bool,
    list_presets: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            seed: None,
            count: DEFAULT_GENERATION_COUNT,
            base_seed: DEFAULT_SEED.to_string(),
            preset: "baseline".to_string(),
            constraints_path: None,
            sanitize: false,
            out_dir: PathBuf::from("out"),
            print: false,
            list_presets: false,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Parse arguments (program name already stripped). Uses simple matching,
/// no clap dependency.
fn parse_args(args: &[String]) -> std::result::Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                options.seed = Some(value_for(args, &mut i, "--seed")?.to_string());
            }
            "--count" => {
                let raw = value_for(args, &mut i, "--count")?;
                let count: usize = raw
                    .parse()
                    .map_err(|_| format!("--count requires a number, got '{raw}'"))?;
                options.count = clamp_generation_count(count);
            }
            "--base-seed" => {
                options.base_seed = value_for(args, &mut i, "--base-seed")?.to_string();
            }
            "--preset" => {
                options.preset = value_for(args, &mut i, "--preset")?.to_string();
            }
            "--constraints" => {
                options.constraints_path =
                    Some(PathBuf::from(value_for(args, &mut i, "--constraints")?));
            }
            "--out" => {
                options.out_dir = PathBuf::from(value_for(args, &mut i, "--out")?);
            }
            "--sanitize" => options.sanitize = true,
            "--print" => options.print = true,
            "--list-presets" => options.list_presets = true,
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(options)
}

/// Consume the value following the flag at `args[*i]`.
fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> std::result::Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn resolve_constraints(options: &CliOptions) -> Result<Constraints> {
    let constraints = match &options.constraints_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading constraints");
            Constraints::load(path)?
        }
        None => find_preset(&options.preset)?.constraints,
    };
    constraints.validate()?;
    Ok(if options.sanitize {
        constraints.sanitized()
    } else {
        constraints
    })
}

fn run(options: &CliOptions) -> Result<()> {
    if options.list_presets {
        for preset in presets() {
            let c = &preset.constraints;
            println!(
                "{:<16} {:<18} variety {:.2}  rotation {:<5} mirror {:<5} wall {} cm",
                preset.id, preset.name, c.variety, c.allow_rotation, c.allow_mirror, c.wall_thickness
            );
        }
        return Ok(());
    }

    let constraints = resolve_constraints(options)?;

    let seeds = match &options.seed {
        Some(seed) => vec![seed.clone()],
        None => seed_tokens(&options.base_seed, options.count),
    };
    tracing::info!(count = seeds.len(), preset = %options.preset, "generating layouts");

    let layouts = generate_batch(&seeds, &constraints);

    if options.print {
        for layout in &layouts {
            println!("{}", export::to_json_pretty(layout)?);
        }
        return Ok(());
    }

    for layout in &layouts {
        let path = export::write_layout(&options.out_dir, layout)?;
        print_summary(layout);
        tracing::debug!(path = %path.display(), "exported");
    }
    tracing::info!(
        count = layouts.len(),
        dir = %options.out_dir.display(),
        "export complete"
    );
    Ok(())
}

fn print_summary(layout: &Layout) {
    let bounds = footprint_bounds(layout);
    println!(
        "{:<20} net {:>6.2} m²  footprint {:>4.0}×{:<4.0} cm  rotation {:>3}  {:?}",
        layout.id,
        layout.metrics.net_area / 10_000.0,
        bounds.w,
        bounds.h,
        layout.metadata.rotation.degrees(),
        layout.metadata.draw_order,
    );
}
