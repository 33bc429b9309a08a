//! Trim Sandbox
//!
//! Runs the trim engine against a scripted wearer for a number of ticks and
//! prints the conditions left at the end.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use trim_effects::conditions::ActiveCondition;
use trim_effects::core::types::{BlockPos, Dimension};
use trim_effects::equipment::{ArmorSlot, InlineTrims};
use trim_effects::simulation::{SandboxHost, SandboxWearer, SandboxWorld};
use trim_effects::{EngineConfig, Result, TrimCategory, TrimEngine};

/// Trim Sandbox - run armor trim set bonuses against a scripted wearer
#[derive(Parser, Debug)]
#[command(name = "trim_sim")]
#[command(about = "Evaluate armor trim set bonuses over a number of ticks")]
struct Args {
    /// TOML configuration file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the minimum matching trims from the config
    #[arg(long)]
    threshold: Option<usize>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Trim material per slot, feet first; a single value fills every slot,
    /// "none" leaves a slot untrimmed
    #[arg(long = "trim", default_value = "diamond")]
    trims: Vec<String>,

    /// Wearer block Y
    #[arg(long, default_value_t = 64, allow_negative_numbers = true)]
    y: i32,

    /// Light level at the wearer (0-15)
    #[arg(long, default_value_t = 15)]
    light: u8,

    /// overworld, nether or end
    #[arg(long, default_value = "overworld")]
    dimension: Dimension,

    #[arg(long, default_value_t = 20.0)]
    health: f32,

    #[arg(long)]
    sprinting: bool,

    /// Hurt timer at the start of the run (counts down one per tick)
    #[arg(long, default_value_t = 0)]
    hurt: u32,

    #[arg(long)]
    on_fire: bool,

    #[arg(long)]
    thundering: bool,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Log every evaluation
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct SimSummary {
    seed: u64,
    ticks: u64,
    active: Vec<TrimCategory>,
    conditions: Vec<ActiveCondition>,
    experience_gained: u32,
    health: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "trim_effects=debug" } else { "trim_effects=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.minimum_matching_trims = threshold;
    }
    let engine = TrimEngine::new(config)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut wearer = build_wearer(&args);
    let world = SandboxWorld {
        dimension: args.dimension,
        light: Some(args.light.min(15)),
        thundering: args.thundering,
        ..Default::default()
    };
    let mut host = SandboxHost::new();

    tracing::info!(
        "Simulating {} ticks for {} (seed {})",
        args.ticks,
        wearer.id,
        seed
    );

    let mut active = Vec::new();
    for tick in 0..args.ticks {
        match engine.run_tick(tick, &wearer, &InlineTrims, &world, &mut host, &mut rng) {
            Ok(Some(report)) => {
                if report.active != active {
                    tracing::info!("Tick {}: active sets {:?}", tick, report.active);
                }
                active = report.active;
            }
            Ok(None) => {}
            Err(err) => tracing::warn!("Tick {} skipped: {}", tick, err),
        }

        host.settle(&mut wearer);
        host.conditions.advance(1);
        wearer.hurt_time = wearer.hurt_time.saturating_sub(1);
    }

    let summary = SimSummary {
        seed,
        ticks: args.ticks,
        active,
        conditions: host.conditions.conditions_of(wearer.id),
        experience_gained: host.experience_gained,
        health: wearer.health,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn build_wearer(args: &Args) -> SandboxWearer {
    let slots = ArmorSlot::ALL.len();
    let materials: Vec<Option<&str>> = if args.trims.len() == 1 {
        vec![material(&args.trims[0]); slots]
    } else {
        (0..slots)
            .map(|i| args.trims.get(i).and_then(|m| material(m)))
            .collect()
    };

    let mut wearer = SandboxWearer::with_armor(&materials).placed(BlockPos::new(0, args.y, 0));
    wearer.health = args.health.min(wearer.max_health);
    wearer.sprinting = args.sprinting;
    wearer.hurt_time = args.hurt;
    wearer.on_fire = args.on_fire;
    wearer
}

fn material(name: &str) -> Option<&str> {
    match name {
        "" | "none" => None,
        other => Some(other),
    }
}

fn print_summary(summary: &SimSummary) {
    println!("\n=== TRIM SANDBOX ===");
    println!("Seed: {}  Ticks: {}", summary.seed, summary.ticks);
    if summary.active.is_empty() {
        println!("Active sets: none");
    } else {
        let names: Vec<String> = summary.active.iter().map(|c| c.to_string()).collect();
        println!("Active sets: {}", names.join(", "));
    }
    println!("Health: {:.1}  Experience gained: {}", summary.health, summary.experience_gained);
    println!();
    println!("Condition          | Level | Remaining");
    println!("-------------------|-------|----------");
    for condition in &summary.conditions {
        println!(
            "{:<18} | {:>5} | {:>8}",
            condition.kind.name(),
            condition.level + 1,
            condition.remaining
        );
    }
}
