//! Wall-confined particle demo
//!
//! Fills a walled box with random particles, evaluates the wall forces and logs
//! the totals. Run with `RUST_LOG=debug` for per-step detail.

use glam::Vec3;
use rand::Rng;
use wall_physics::{LennardJones, WallError, WallField};
use wall_simulation::{WallForceCompute, WallParticle, WallSimulationConfig};

/// Random positions inside the box, outside the central obstacle
fn initialize_particles(config: &WallSimulationConfig) -> Vec<WallParticle> {
    let mut rng = rand::rng();
    let half = 0.5 * config.box_length;
    let mut particles = Vec::with_capacity(config.particle_count);

    while particles.len() < config.particle_count {
        let pos = Vec3::new(
            rng.random_range(-half..half),
            rng.random_range(-half..half),
            rng.random_range(-half..half),
        );
        if pos.length() <= config.obstacle_radius {
            continue;
        }
        particles.push(WallParticle::new(pos, 0));
    }

    log::info!("✓ Initialized {} particles", particles.len());
    particles
}

fn main() -> Result<(), WallError> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = WallSimulationConfig::default();
    log::info!("Starting wall force evaluation with {config:?}");

    let field = WallField::from_group(&config.wall_group()?)?;
    let mut compute = WallForceCompute::<LennardJones>::new(field);
    compute.set_params(0, config.wall_params()?);

    let particles = initialize_particles(&config);
    let output = compute.compute(&particles)?;

    let volume = config.box_length.powi(3);
    log::info!("{} energy: {:.6}", compute.name(), output.total_energy);
    log::info!(
        "  virial: [{:.4}, {:.4}, {:.4}, {:.4}, {:.4}, {:.4}]",
        output.total_virial[0],
        output.total_virial[1],
        output.total_virial[2],
        output.total_virial[3],
        output.total_virial[4],
        output.total_virial[5],
    );
    log::info!("  virial pressure: {:.6}", output.virial_pressure(volume));
    log::info!("  max force: {:.4}", output.max_force());
    log::info!("  net force: {}", output.net_force());

    let touching = output
        .particles
        .iter()
        .filter(|p| p.force != Vec3::ZERO)
        .count();
    log::info!("  {touching} particles within range of a wall");

    Ok(())
}
