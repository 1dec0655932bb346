//! Five-stage pipeline simulator CLI.
//!
//! Loads an assembly program, optionally presets registers and data memory,
//! runs it to completion (or for a fixed number of cycles), then prints the
//! register state, an optional memory range, and the run statistics.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pipesim_core::sim::loader;
use pipesim_core::{Config, Simulator, StopReason};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    author,
    version,
    about = "Cycle-accurate five-stage pipeline simulator",
    long_about = "Run an assembly program on a five-stage in-order pipeline and report registers, memory and statistics.\n\nExamples:\n  pipesim prog.asm\n  pipesim prog.asm --set R0=0 --set R2=0x11223344 --dump 0:16\n  pipesim prog.asm --cycles 5 --trace",
    arg_required_else_help = true
)]
struct Args {
    /// Path to the assembly program.
    program: PathBuf,

    /// Cycles to run; 0 runs until the program completes.
    #[arg(short, long, default_value_t = 0)]
    cycles: u64,

    /// Data memory size in bytes (overrides the config file).
    #[arg(long)]
    memory_size: Option<usize>,

    /// Memory latency in cycles (overrides the config file).
    #[arg(long)]
    latency: Option<u32>,

    /// Load address of the first instruction (overrides the config file).
    #[arg(long, value_parser = parse_number)]
    base: Option<u32>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preset a register before running, e.g. `R2=0x11223344`. Repeatable.
    #[arg(long = "set", value_parser = parse_register_assignment)]
    registers: Vec<(usize, u32)>,

    /// Preset a data memory word before running, e.g. `0x10=42`. Repeatable.
    #[arg(long = "poke", value_parser = parse_memory_assignment)]
    pokes: Vec<(u32, u32)>,

    /// Print data memory in `START:END` after the run.
    #[arg(long, value_parser = parse_range)]
    dump: Option<(u32, u32)>,

    /// Log every pipeline stage.
    #[arg(long)]
    trace: bool,
}

/// Decimal or `0x` hex.
fn parse_number(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number `{s}`: {e}"))
}

fn parse_register_assignment(s: &str) -> Result<(usize, u32), String> {
    let (reg, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected Rn=VALUE, got `{s}`"))?;
    let reg = reg
        .strip_prefix(['R', 'r'])
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| format!("invalid register `{reg}`"))?;
    Ok((reg, parse_number(value)?))
}

fn parse_memory_assignment(s: &str) -> Result<(u32, u32), String> {
    let (addr, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ADDR=VALUE, got `{s}`"))?;
    Ok((parse_number(addr)?, parse_number(value)?))
}

fn parse_range(s: &str) -> Result<(u32, u32), String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got `{s}`"))?;
    Ok((parse_number(start)?, parse_number(end)?))
}

/// Installs the stderr subscriber. `RUST_LOG` applies unless tracing was requested.
fn logging_setup(trace_stages: bool, trace_retire: bool) {
    let filter = if trace_stages {
        EnvFilter::new("trace")
    } else if trace_retire {
        EnvFilter::new("warn,pipesim::retire=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read config `{}`", path.display()))?;
            Config::from_json(&text)
                .with_context(|| format!("invalid config `{}`", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(size) = args.memory_size {
        config.memory.size_bytes = size;
    }
    if let Some(latency) = args.latency {
        config.memory.latency = latency;
    }
    if let Some(base) = args.base {
        config.program.base_address = base;
    }

    logging_setup(args.trace, config.general.trace_instructions);
    info!(
        memory = config.memory.size_bytes,
        latency = config.memory.latency,
        base = format_args!("{:#x}", config.program.base_address),
        scope = ?config.pipeline.hazard_scope,
        "configuration"
    );

    let program = loader::load_program_file(&args.program, &config.program)
        .with_context(|| format!("could not load `{}`", args.program.display()))?;

    let mut sim = Simulator::new(&config);
    sim.load(&program)?;
    for &(reg, value) in &args.registers {
        sim.set_gp_register(reg, value)
            .with_context(|| format!("could not set R{reg}"))?;
    }
    for &(addr, value) in &args.pokes {
        sim.write_memory(addr, value)
            .with_context(|| format!("could not write memory at {addr:#x}"))?;
    }

    let reason = sim.run(args.cycles).context("simulation failed")?;
    if reason == StopReason::CycleBudget {
        println!("Stopped after {} cycles; program not finished.", args.cycles);
    }

    sim.print_registers();
    if let Some((start, end)) = args.dump {
        sim.print_memory(start, end)
            .with_context(|| format!("could not dump memory {start:#x}:{end:#x}"))?;
    }
    sim.stats().print();
    Ok(())
}
