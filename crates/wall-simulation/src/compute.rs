//! Wall forces for a whole particle system
//!
//! [`WallForceCompute`] owns the wall field and per-type parameters and applies
//! a [`WallEvaluator`] to every particle in parallel. The field and table are
//! only borrowed immutably during [`WallForceCompute::compute`]; replacing them
//! needs `&mut self`, so walls can only change between steps.

use std::marker::PhantomData;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rayon::prelude::*;
use wall_physics::{
    PairPotential, Result, WallEvaluator, WallField, WallForce, WallParams, VIRIAL_COMPONENTS,
};

use crate::{WallParamTable, WallParticle};

/// Force and energy of one particle (matches a vec4 force buffer)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ForceRecord {
    pub force: [f32; 3],
    pub energy: f32,
}

/// Result of one wall force evaluation over all particles
#[derive(Clone, Debug, Default)]
pub struct WallForceOutput {
    /// One entry per particle, in input order
    pub particles: Vec<WallForce>,
    pub total_energy: f32,
    pub total_virial: [f32; VIRIAL_COMPONENTS],
}

impl WallForceOutput {
    /// Virial contribution to the pressure, `(W_xx + W_yy + W_zz) / 3V`
    pub fn virial_pressure(&self, volume: f32) -> f32 {
        let trace = self.total_virial[0] + self.total_virial[3] + self.total_virial[5];
        trace / (3.0 * volume)
    }

    pub fn force_records(&self) -> Vec<ForceRecord> {
        self.particles
            .iter()
            .map(|p| ForceRecord {
                force: p.force.to_array(),
                energy: p.energy,
            })
            .collect()
    }

    /// Largest force magnitude on any particle
    pub fn max_force(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| p.force.length())
            .fold(0.0, f32::max)
    }

    /// Net force the walls exert on the system
    pub fn net_force(&self) -> Vec3 {
        self.particles.iter().map(|p| p.force).sum()
    }
}

/// Applies pair potential `P` between every particle and every wall
pub struct WallForceCompute<P: PairPotential> {
    field: WallField,
    params: WallParamTable<P::Params>,
    _potential: PhantomData<fn() -> P>,
}

impl<P: PairPotential> WallForceCompute<P> {
    pub fn new(field: WallField) -> Self {
        log::info!(
            "Initializing {} with {} walls",
            WallEvaluator::<P>::name(),
            field.len()
        );
        Self {
            field,
            params: WallParamTable::new(),
            _potential: PhantomData,
        }
    }

    /// Energy log name, e.g. `walls_lj`
    pub fn name(&self) -> String {
        WallEvaluator::<P>::name()
    }

    pub fn field(&self) -> &WallField {
        &self.field
    }

    /// Replace all walls. Takes effect on the next [`WallForceCompute::compute`].
    pub fn set_field(&mut self, field: WallField) {
        log::info!(
            "{}: wall field replaced ({} -> {} walls)",
            self.name(),
            self.field.len(),
            field.len()
        );
        self.field = field;
    }

    pub fn set_params(&mut self, type_id: u32, params: WallParams<P::Params>) {
        log::debug!("{}: params for type {type_id}: {params:?}", self.name());
        self.params.set(type_id, params);
    }

    /// Evaluate every particle.
    ///
    /// Fails if any particle's type has no parameters. Totals are summed in
    /// particle order so results do not depend on thread scheduling.
    pub fn compute(&self, particles: &[WallParticle]) -> Result<WallForceOutput> {
        let field = &self.field;
        let table = &self.params;

        let per_particle = particles
            .par_iter()
            .map(|p| {
                let params = table.get(p.type_id)?;
                let mut eval = WallEvaluator::<P>::new(p.position(), field, params);
                if P::needs_diameter() {
                    eval.set_diameter(p.diameter);
                }
                if P::needs_charge() {
                    eval.set_charge(p.charge);
                }
                Ok(eval.evaluate())
            })
            .collect::<Result<Vec<WallForce>>>()?;

        let mut total_energy = 0.0;
        let mut total_virial = [0.0; VIRIAL_COMPONENTS];
        for wf in &per_particle {
            total_energy += wf.energy;
            for (total, v) in total_virial.iter_mut().zip(wf.virial) {
                *total += v;
            }
        }

        log::debug!(
            "{}: {} particles, {} walls, energy = {:.6}",
            self.name(),
            particles.len(),
            field.len(),
            total_energy
        );

        Ok(WallForceOutput {
            particles: per_particle,
            total_energy,
            total_virial,
        })
    }
}
