//! # Swingup Runner
//!
//! Entry point for the headless cart-pole runner.
//!
//! Runs a fixed policy against [`rl::CartPoleEnv`] for a number of episodes
//! and logs a summary of each one. Set `RUST_LOG=debug` to see resets and
//! terminations, `RUST_LOG=trace` for every tick.

mod app;
mod policy;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::policy::Policy;

#[derive(Parser, Debug)]
#[command(name = "swingup", about = "Run cart-pole swing-up episodes headless")]
pub struct Args {
    /// Number of episodes to run
    #[arg(long, default_value_t = 5)]
    pub episodes: usize,
    /// Episodes still running after this many steps are cut short
    #[arg(long, default_value_t = 1_000)]
    pub max_steps: u64,
    /// Seed for the environment and the random policy
    #[arg(long)]
    pub seed: Option<u64>,
    /// JSON file overriding the default physical constants and reward shaping
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Policy::Right)]
    pub policy: Policy,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    app::run(&args).map(|_| ())
}
