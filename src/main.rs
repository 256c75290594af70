//! Headless driver: generates a layout and runs the morph loop without a
//! window, toggling between tree and cloud on a fixed schedule.

use anyhow::{Context, Result};
use arbor::prelude::*;
use clap::Parser;
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "arbor", version, about = "Run the particle morph loop headless")]
struct Cli {
    /// Number of particles
    #[arg(long, default_value_t = 1800)]
    count: u32,

    /// Cone base radius
    #[arg(long, default_value_t = 2.5)]
    base_radius: f32,

    /// Cone height
    #[arg(long, default_value_t = 6.5)]
    height: f32,

    /// Scatter sphere radius
    #[arg(long, default_value_t = 12.0)]
    scatter_radius: f32,

    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Frames between morph toggles (0 = never toggle)
    #[arg(long, default_value_t = 240)]
    toggle_every: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.verbose > 0 {
        logger.filter_level(match cli.verbose {
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    }
    logger.init();

    anyhow::ensure!(
        cli.fps.is_finite() && cli.fps > 0.0,
        "--fps must be positive, got {}",
        cli.fps
    );

    let config = TreeConfig::new(cli.count, cli.base_radius, cli.height, cli.scatter_radius);
    let mut animator = MorphAnimator::from_config(&config).context("invalid tree configuration")?;
    let mut instances = vec![InstanceRaw::zeroed(); animator.len()];

    let mut time = Time::fixed(1.0 / cli.fps);
    let mut state = MorphState::Formation;

    for frame in 1..=cli.frames {
        let (elapsed, delta) = time.update();
        animator
            .tick(state, delta, elapsed)
            .with_context(|| format!("frame {} update failed", frame))?;
        animator.write_instances(&mut instances)?;

        if cli.toggle_every > 0 && frame % cli.toggle_every == 0 {
            info!(
                "t={:.2}s {:?}: mean distance to target {:.4}",
                elapsed,
                state,
                animator.mean_distance_to(state)
            );
            state = state.toggle();
            debug!("Morph target switched to {:?}", state);
        }
    }

    info!(
        "Finished {} frames ({:.2}s simulated), state {:?}, mean distance to target {:.4}",
        time.frame(),
        time.elapsed(),
        state,
        animator.mean_distance_to(state)
    );
    debug!(
        "Instance buffer: {} bytes",
        bytemuck::cast_slice::<InstanceRaw, u8>(&instances).len()
    );

    Ok(())
}
