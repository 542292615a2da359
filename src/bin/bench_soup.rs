use anyhow::Result;
use life_grid::{GridConfig, NiceInt};
use std::time::Instant;
use tracing::info;

const GENERATIONS: u64 = 1000;
const REPORT_EVERY: u64 = 100;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = GridConfig::from_env()?;
    let timer = Instant::now();
    let mut grid = config.build()?;
    info!(
        "Built {}x{} soup ({} border) in {:?}, population {}",
        config.width,
        config.height,
        config.border,
        timer.elapsed(),
        NiceInt::from_usize(grid.population())
    );

    let timer = Instant::now();
    for _ in 0..GENERATIONS / REPORT_EVERY {
        grid.update(REPORT_EVERY, config.border);
        info!(
            "generation {}: population {}",
            NiceInt::from(grid.generation()),
            NiceInt::from_usize(grid.population())
        );
    }
    let elapsed = timer.elapsed();
    let cell_updates = (config.width * config.height) as f64 * GENERATIONS as f64;
    info!(
        "Time on {} generations: {:?} ({} cell updates/s)",
        GENERATIONS,
        elapsed,
        NiceInt::from((cell_updates / elapsed.as_secs_f64()) as u64)
    );
    Ok(())
}
