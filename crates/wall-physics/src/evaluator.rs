//! Wall force evaluation for a single particle
//!
//! For every wall in a [`WallField`] the particle is projected onto the
//! surface, the resulting distance is fed to a [`PairPotential`], and the force,
//! energy and virial are accumulated.
//!
//! The extrapolation policy:
//!
//! * With `rshift == 0` only particles on the active side of a wall interact.
//! * With `rshift > 0` the surface is treated as if it were pushed out by
//!   `rshift`: the pair potential sees `(d + rshift)^2` on the active side and
//!   `rshift^2` on the inactive side, where the direction is flipped and the
//!   energy is continued with `rsq * force_divr`.
//!
//! Evaluation is pure: nothing in the field or parameters is written, so one
//! evaluator per particle can run on any number of threads at once.

use std::marker::PhantomData;

use glam::Vec3;

use crate::constants::{VIRIAL_COMPONENTS, WALL_NAME_PREFIX};
use crate::field::WallField;
use crate::geometry::WallGeometry;
use crate::params::WallParams;
use crate::potential::{PairForce, PairPotential};

/// Accumulated wall interaction on one particle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WallForce {
    pub force: Vec3,
    pub energy: f32,
    /// Symmetric virial: xx, xy, xz, yy, yz, zz
    pub virial: [f32; VIRIAL_COMPONENTS],
}

impl WallForce {
    fn add_virial(&mut self, dr: Vec3, force_divr: f32) {
        self.virial[0] += force_divr * dr.x * dr.x;
        self.virial[1] += force_divr * dr.x * dr.y;
        self.virial[2] += force_divr * dr.x * dr.z;
        self.virial[3] += force_divr * dr.y * dr.y;
        self.virial[4] += force_divr * dr.y * dr.z;
        self.virial[5] += force_divr * dr.z * dr.z;
    }
}

/// Applies a pair potential `P` between one particle and every wall in a field
pub struct WallEvaluator<'a, P: PairPotential> {
    position: Vec3,
    field: &'a WallField,
    params: &'a WallParams<P::Params>,
    diameter: f32,
    charge: f32,
    _potential: PhantomData<P>,
}

impl<'a, P: PairPotential> WallEvaluator<'a, P> {
    pub fn new(position: Vec3, field: &'a WallField, params: &'a WallParams<P::Params>) -> Self {
        Self {
            position,
            field,
            params,
            diameter: 0.0,
            charge: 0.0,
            _potential: PhantomData,
        }
    }

    pub fn needs_diameter() -> bool {
        P::needs_diameter()
    }

    pub fn needs_charge() -> bool {
        P::needs_charge()
    }

    pub fn set_diameter(&mut self, diameter: f32) {
        self.diameter = diameter;
    }

    /// Walls themselves carry no charge; the potential sees `(charge, 0)`.
    pub fn set_charge(&mut self, charge: f32) {
        self.charge = charge;
    }

    /// Name under which the wall energy is logged, e.g. `walls_lj`
    pub fn name() -> String {
        format!("{}{}", WALL_NAME_PREFIX, P::name())
    }

    /// Sum the contributions of all spheres, then cylinders, then planes.
    pub fn evaluate(&self) -> WallForce {
        let mut out = WallForce::default();

        for wall in self.field.spheres() {
            self.accumulate(&mut out, wall);
        }
        for wall in self.field.cylinders() {
            self.accumulate(&mut out, wall);
        }
        for wall in self.field.planes() {
            self.accumulate(&mut out, wall);
        }
        out
    }

    #[inline]
    fn accumulate(&self, out: &mut WallForce, wall: &impl WallGeometry) {
        let (drv, inside) = wall.project(self.position);
        let rshift = self.params.rshift();
        if !(rshift > 0.0 || inside) {
            return;
        }

        // Surface to particle
        let mut dr = -drv;
        let rsq = dr.dot(dr);
        let mut rsq_eff = if inside { rsq } else { 0.0 };
        if rshift > 0.0 {
            rsq_eff += rshift * rshift + 2.0 * rshift * rsq_eff.sqrt();
            if !inside {
                dr = -dr;
            }
        }

        let mut pair = P::new(rsq_eff, self.params.rcutsq(), self.params.params());
        if P::needs_diameter() {
            pair.set_diameter(self.diameter, 0.0);
        }
        if P::needs_charge() {
            pair.set_charge(self.charge, 0.0);
        }

        let Some(PairForce { force_divr, energy }) = pair.eval_force_and_energy(true) else {
            return;
        };

        out.force += dr * force_divr;
        out.energy += if inside {
            energy
        } else {
            energy + rsq * force_divr
        };
        out.add_virial(dr, force_divr);
    }
}

/// Evaluate all walls for a particle with no diameter or charge
pub fn evaluate_walls<P: PairPotential>(
    position: Vec3,
    field: &WallField,
    params: &WallParams<P::Params>,
) -> WallForce {
    WallEvaluator::<P>::new(position, field, params).evaluate()
}
