//! End-to-end wall evaluation scenarios
//!
//! Uses a constant pair kernel so the expected force, energy and virial can be
//! written down by hand.

use wall_physics::{
    evaluate_walls, PairForce, PairPotential, WallError, WallField, WallForce,
    WallGroup, WallParams, MAX_SPHERE_WALLS,
};
use glam::Vec3;

/// Returns `force_divr = -1`, `energy = 0.5` anywhere inside the cutoff
struct ConstantPair {
    rsq: f32,
    rcutsq: f32,
}

impl PairPotential for ConstantPair {
    type Params = ();

    fn new(rsq: f32, rcutsq: f32, _params: &()) -> Self {
        Self { rsq, rcutsq }
    }

    fn eval_force_and_energy(&self, _energy_shift: bool) -> Option<PairForce> {
        (self.rsq < self.rcutsq).then_some(PairForce {
            force_divr: -1.0,
            energy: 0.5,
        })
    }

    fn name() -> &'static str {
        "constant"
    }
}

/// Records the charge it was given as its energy
struct ChargeEcho {
    charge: f32,
}

impl PairPotential for ChargeEcho {
    type Params = ();

    fn new(_rsq: f32, _rcutsq: f32, _params: &()) -> Self {
        Self { charge: f32::NAN }
    }

    fn needs_charge() -> bool {
        true
    }

    fn set_charge(&mut self, qi: f32, qj: f32) {
        assert_eq!(qj, 0.0, "walls must not carry charge");
        self.charge = qi;
    }

    fn eval_force_and_energy(&self, _energy_shift: bool) -> Option<PairForce> {
        Some(PairForce {
            force_divr: 0.0,
            energy: self.charge,
        })
    }

    fn name() -> &'static str {
        "charge_echo"
    }
}

fn unit_sphere_field() -> WallField {
    let mut group = WallGroup::new();
    group.add_sphere(1.0, Vec3::ZERO, false).unwrap();
    WallField::from_group(&group).unwrap()
}

#[test]
fn test_sphere_outside_particle_on_active_side() {
    let field = unit_sphere_field();
    let params = WallParams::new((), 100.0, 0.0).unwrap();

    let out = evaluate_walls::<ConstantPair>(Vec3::new(2.0, 0.0, 0.0), &field, &params);

    assert_eq!(out.force, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(out.energy, 0.5);
    assert_eq!(out.virial, [-1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_sphere_outside_particle_on_inactive_side() {
    let field = unit_sphere_field();
    let params = WallParams::new((), 100.0, 0.0).unwrap();

    let out = evaluate_walls::<ConstantPair>(Vec3::new(0.5, 0.0, 0.0), &field, &params);

    assert_eq!(out, WallForce::default());
}

#[test]
fn test_contributions_add_across_kinds() {
    let mut group = WallGroup::new();
    group.add_sphere(1.0, Vec3::ZERO, false).unwrap();
    group
        .add_cylinder(1.0, Vec3::ZERO, Vec3::Z, false)
        .unwrap();
    group.add_plane(Vec3::ZERO, Vec3::X).unwrap();
    let field = WallField::from_group(&group).unwrap();
    let params = WallParams::new((), 100.0, 0.0).unwrap();

    let out = evaluate_walls::<ConstantPair>(Vec3::new(2.0, 0.0, 0.0), &field, &params);

    // Sphere and cylinder each see dr = (1,0,0); the plane sees dr = (2,0,0)
    assert_eq!(out.force, Vec3::new(-4.0, 0.0, 0.0));
    assert_eq!(out.energy, 1.5);
    assert_eq!(out.virial[0], -6.0);
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let mut group = WallGroup::new();
    for i in 0..MAX_SPHERE_WALLS {
        group
            .add_sphere(0.5 + i as f32 * 0.1, Vec3::new(0.1 * i as f32, 0.0, 0.0), i % 2 == 0)
            .unwrap();
    }
    let field = WallField::from_group(&group).unwrap();
    let params = WallParams::new((), 4.0, 0.2).unwrap();
    let p = Vec3::new(0.3, 0.7, -0.2);

    let first = evaluate_walls::<ConstantPair>(p, &field, &params);
    for _ in 0..10 {
        assert_eq!(evaluate_walls::<ConstantPair>(p, &field, &params), first);
    }
}

#[test]
fn test_over_capacity_group_keeps_existing_field() {
    let field = unit_sphere_field();

    let mut group = WallGroup::new();
    for _ in 0..MAX_SPHERE_WALLS + 1 {
        group.add_sphere(2.0, Vec3::ZERO, true).unwrap();
    }

    let result = WallField::from_group(&group);
    assert!(matches!(result, Err(WallError::CapacityExceeded { .. })));
    assert_eq!(field.spheres().len(), 1);
    assert_eq!(field.spheres()[0].radius, 1.0);
}

#[test]
fn test_charge_forwarded_with_zero_wall_charge() {
    let field = unit_sphere_field();
    let params = WallParams::new((), 100.0, 0.0).unwrap();

    let mut eval =
        wall_physics::WallEvaluator::<ChargeEcho>::new(Vec3::new(3.0, 0.0, 0.0), &field, &params);
    eval.set_charge(-2.0);

    assert_eq!(eval.evaluate().energy, -2.0);
}
