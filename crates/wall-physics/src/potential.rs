//! Pair potentials usable as wall interactions
//!
//! A [`PairPotential`] is the usual isotropic two-body kernel: it is built for
//! one squared distance and reports the force divided by r together with the
//! energy, or nothing when the pair is past the cutoff. Walls reuse these
//! kernels unchanged, treating the wall surface as the second particle.
//!
//! Each implementation subtracts `V(r_cut)` when asked for an energy shift, so
//! the energy goes to zero continuously at the cutoff.

use std::fmt::Debug;

/// Result of a pair evaluation inside the cutoff
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PairForce {
    /// Force magnitude divided by the pair distance
    pub force_divr: f32,
    pub energy: f32,
}

/// Isotropic pair potential evaluated on a squared distance
pub trait PairPotential: Sized {
    type Params: Copy + Debug + Send + Sync;

    fn new(rsq: f32, rcutsq: f32, params: &Self::Params) -> Self;

    fn needs_diameter() -> bool {
        false
    }

    fn needs_charge() -> bool {
        false
    }

    /// Accept the diameters of particles i and j. Only called when
    /// [`PairPotential::needs_diameter`] is true.
    fn set_diameter(&mut self, _di: f32, _dj: f32) {}

    /// Accept the charges of particles i and j. Only called when
    /// [`PairPotential::needs_charge`] is true.
    fn set_charge(&mut self, _qi: f32, _qj: f32) {}

    /// Returns `None` when the pair is outside the cutoff.
    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce>;

    /// Short lowercase name, used for logging energies
    fn name() -> &'static str;
}

/// Lennard-Jones coefficients: `V = lj1/r^12 - lj2/r^6`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LjParams {
    pub lj1: f32,
    pub lj2: f32,
}

impl LjParams {
    /// `alpha` scales the attractive term (1 for plain LJ, 0 for WCA-like repulsion)
    pub fn new(epsilon: f32, sigma: f32, alpha: f32) -> Self {
        let sigma6 = sigma.powi(6);
        Self {
            lj1: 4.0 * epsilon * sigma6 * sigma6,
            lj2: alpha * 4.0 * epsilon * sigma6,
        }
    }
}

/// Lennard-Jones 12-6 potential
#[derive(Clone, Copy, Debug)]
pub struct LennardJones {
    rsq: f32,
    rcutsq: f32,
    params: LjParams,
}

impl PairPotential for LennardJones {
    type Params = LjParams;

    fn new(rsq: f32, rcutsq: f32, params: &LjParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
        }
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        let LjParams { lj1, lj2 } = self.params;
        if self.rsq >= self.rcutsq || lj1 == 0.0 {
            return None;
        }

        let r2inv = 1.0 / self.rsq;
        let r6inv = r2inv * r2inv * r2inv;
        let force_divr = r2inv * r6inv * (12.0 * lj1 * r6inv - 6.0 * lj2);
        let mut energy = r6inv * (lj1 * r6inv - lj2);

        if energy_shift {
            let rcut2inv = 1.0 / self.rcutsq;
            let rcut6inv = rcut2inv * rcut2inv * rcut2inv;
            energy -= rcut6inv * (lj1 * rcut6inv - lj2);
        }
        Some(PairForce { force_divr, energy })
    }

    fn name() -> &'static str {
        "lj"
    }
}

/// Lennard-Jones with the core shifted outward by the particle diameter
///
/// `delta = (d_i + d_j) / 2 - 1`. Against a wall `d_j` is zero.
#[derive(Clone, Copy, Debug)]
pub struct ShiftedLennardJones {
    rsq: f32,
    rcutsq: f32,
    params: LjParams,
    delta: f32,
}

impl PairPotential for ShiftedLennardJones {
    type Params = LjParams;

    fn new(rsq: f32, rcutsq: f32, params: &LjParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
            delta: 0.0,
        }
    }

    fn needs_diameter() -> bool {
        true
    }

    fn set_diameter(&mut self, di: f32, dj: f32) {
        self.delta = (di + dj) / 2.0 - 1.0;
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        let LjParams { lj1, lj2 } = self.params;
        let r = self.rsq.sqrt();
        let rcut = self.rcutsq.sqrt();
        if r >= rcut || lj1 == 0.0 {
            return None;
        }

        let rmdinv = 1.0 / (r - self.delta);
        let rmd2inv = rmdinv * rmdinv;
        let rmd6inv = rmd2inv * rmd2inv * rmd2inv;
        let force_divr = rmdinv * rmd6inv * (12.0 * lj1 * rmd6inv - 6.0 * lj2) / r;
        let mut energy = rmd6inv * (lj1 * rmd6inv - lj2);

        if energy_shift {
            let rcut2inv = 1.0 / self.rcutsq;
            let rcut6inv = rcut2inv * rcut2inv * rcut2inv;
            energy -= rcut6inv * (lj1 * rcut6inv - lj2);
        }
        Some(PairForce { force_divr, energy })
    }

    fn name() -> &'static str {
        "slj"
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussParams {
    pub epsilon: f32,
    pub sigma: f32,
}

/// Gaussian core: `V = epsilon * exp(-r^2 / (2 sigma^2))`
#[derive(Clone, Copy, Debug)]
pub struct Gauss {
    rsq: f32,
    rcutsq: f32,
    params: GaussParams,
}

impl PairPotential for Gauss {
    type Params = GaussParams;

    fn new(rsq: f32, rcutsq: f32, params: &GaussParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
        }
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        if self.rsq >= self.rcutsq {
            return None;
        }
        let GaussParams { epsilon, sigma } = self.params;
        let sigma_sq = sigma * sigma;

        let exp_val = (-0.5 * self.rsq / sigma_sq).exp();
        let force_divr = epsilon / sigma_sq * exp_val;
        let mut energy = epsilon * exp_val;

        if energy_shift {
            energy -= epsilon * (-0.5 * self.rcutsq / sigma_sq).exp();
        }
        Some(PairForce { force_divr, energy })
    }

    fn name() -> &'static str {
        "gauss"
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YukawaParams {
    pub epsilon: f32,
    pub kappa: f32,
}

/// Screened Coulomb: `V = epsilon * exp(-kappa r) / r`
#[derive(Clone, Copy, Debug)]
pub struct Yukawa {
    rsq: f32,
    rcutsq: f32,
    params: YukawaParams,
}

impl PairPotential for Yukawa {
    type Params = YukawaParams;

    fn new(rsq: f32, rcutsq: f32, params: &YukawaParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
        }
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        let YukawaParams { epsilon, kappa } = self.params;
        if self.rsq >= self.rcutsq || epsilon == 0.0 {
            return None;
        }

        let r = self.rsq.sqrt();
        let rinv = 1.0 / r;
        let exp_val = (-kappa * r).exp();
        let force_divr = epsilon * exp_val * (rinv + kappa) / self.rsq;
        let mut energy = epsilon * exp_val * rinv;

        if energy_shift {
            let rcut = self.rcutsq.sqrt();
            energy -= epsilon * (-kappa * rcut).exp() / rcut;
        }
        Some(PairForce { force_divr, energy })
    }

    fn name() -> &'static str {
        "yukawa"
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorseParams {
    /// Well depth
    pub d0: f32,
    /// Well width
    pub alpha: f32,
    /// Equilibrium distance
    pub r0: f32,
}

/// Morse potential: `V = D0 [exp(-2a(r-r0)) - 2 exp(-a(r-r0))]`
#[derive(Clone, Copy, Debug)]
pub struct Morse {
    rsq: f32,
    rcutsq: f32,
    params: MorseParams,
}

impl Morse {
    fn energy_at(params: &MorseParams, r: f32) -> f32 {
        let factor = (-params.alpha * (r - params.r0)).exp();
        params.d0 * factor * (factor - 2.0)
    }
}

impl PairPotential for Morse {
    type Params = MorseParams;

    fn new(rsq: f32, rcutsq: f32, params: &MorseParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
        }
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        let MorseParams { d0, alpha, r0 } = self.params;
        if self.rsq >= self.rcutsq || d0 == 0.0 {
            return None;
        }

        let r = self.rsq.sqrt();
        let factor = (-alpha * (r - r0)).exp();
        let force_divr = 2.0 * d0 * alpha * factor * (factor - 1.0) / r;
        let mut energy = d0 * factor * (factor - 2.0);

        if energy_shift {
            energy -= Self::energy_at(&self.params, self.rcutsq.sqrt());
        }
        Some(PairForce { force_divr, energy })
    }

    fn name() -> &'static str {
        "morse"
    }
}

/// Mie n-m coefficients: `V = mie1/r^n - mie2/r^m`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MieParams {
    pub mie1: f32,
    pub mie2: f32,
    pub n: f32,
    pub m: f32,
}

impl MieParams {
    pub fn new(epsilon: f32, sigma: f32, n: f32, m: f32) -> Self {
        let prefactor = (n / (n - m)) * (n / m).powf(m / (n - m));
        Self {
            mie1: prefactor * epsilon * sigma.powf(n),
            mie2: prefactor * epsilon * sigma.powf(m),
            n,
            m,
        }
    }
}

/// Generalized Lennard-Jones with arbitrary exponents
#[derive(Clone, Copy, Debug)]
pub struct Mie {
    rsq: f32,
    rcutsq: f32,
    params: MieParams,
}

impl PairPotential for Mie {
    type Params = MieParams;

    fn new(rsq: f32, rcutsq: f32, params: &MieParams) -> Self {
        Self {
            rsq,
            rcutsq,
            params: *params,
        }
    }

    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        let MieParams { mie1, mie2, n, m } = self.params;
        if self.rsq >= self.rcutsq || mie1 == 0.0 {
            return None;
        }

        let r2inv = 1.0 / self.rsq;
        let rninv = r2inv.powf(n / 2.0);
        let rminv = r2inv.powf(m / 2.0);
        let force_divr = r2inv * (n * mie1 * rninv - m * mie2 * rminv);
        let mut energy = mie1 * rninv - mie2 * rminv;

        if energy_shift {
            let rcut2inv = 1.0 / self.rcutsq;
            energy -= mie1 * rcut2inv.powf(n / 2.0) - mie2 * rcut2inv.powf(m / 2.0);
        }
        Some(PairForce { force_divr, energy })
    }

    fn name() -> &'static str {
        "mie"
    }
}
