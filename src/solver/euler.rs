//! Solver orchestration for the 1D Euler equations.
//!
//! [`EulerSolver`] owns the mesh, the selected schemes, and the solution
//! arrays, and drives the CFL-limited time loop. Each right-hand-side
//! evaluation applies the boundary rules to a working copy of its input,
//! derives primitives, reconstructs interface states, evaluates the
//! numerical flux per interface, and assembles the conservative divergence
//! on interior cells.

use std::time::Instant;

use tracing::{debug, info};

use super::factory::{create_eos, create_initial_condition};
use crate::boundary::StandardBoundary;
use crate::config::Config;
use crate::equations::EquationOfState;
use crate::flux::StandardFlux;
use crate::mesh::Mesh1D;
use crate::reconstruction::{reconstruct_muscl, StandardLimiter};
use crate::time::{StandardIntegrator, TimeIntegrator};
use crate::types::{Conservative, Primitive, Real};

/// Finite-volume solver for the 1D compressible Euler equations.
pub struct EulerSolver<R: Real> {
    test_name: String,
    cfl: R,
    final_time: R,
    order: u32,

    mesh: Mesh1D<R>,
    eos: EquationOfState<R>,
    flux: StandardFlux,
    limiter: StandardLimiter,
    bc_left: StandardBoundary,
    bc_right: StandardBoundary,
    integrator: StandardIntegrator,

    /// Current solution (conservative), ghosts included
    u: Vec<Conservative<R>>,
    /// Primitive scratch, refreshed at every RHS evaluation
    w: Vec<Primitive<R>>,
    /// Interface flux scratch, one entry per cell face
    fluxes: Vec<Conservative<R>>,

    time: R,
    n_steps: usize,
}

impl<R: Real> EulerSolver<R> {
    /// Construct a solver from a configuration snapshot.
    ///
    /// Applies the initial condition, fills the ghost cells, and derives
    /// the primitive array, leaving the solver ready to step.
    ///
    /// # Panics
    /// Panics if the mesh section is invalid (zero cells or inverted
    /// bounds).
    pub fn new(config: &Config) -> Self {
        let mesh = Mesh1D::new(
            R::from_f64_lossy(config.mesh.xmin),
            R::from_f64_lossy(config.mesh.xmax),
            config.mesh.num_cells,
        );
        let eos = create_eos(&config.eos);
        let initial_condition = create_initial_condition(&config.initial_condition);

        let n = mesh.total_cells();
        let mut solver = Self {
            test_name: config.simulation.test_name.clone(),
            cfl: R::from_f64_lossy(config.time.cfl),
            final_time: R::from_f64_lossy(config.time.final_time),
            order: config.numerics.order,
            mesh,
            eos,
            flux: config.numerics.flux,
            limiter: config.numerics.limiter,
            bc_left: config.boundary.left,
            bc_right: config.boundary.right,
            integrator: config.time.integrator,
            u: vec![Conservative::zero(); n],
            w: vec![Primitive::zero(); n],
            fluxes: vec![Conservative::zero(); n + 1],
            time: R::ZERO,
            n_steps: 0,
        };

        initial_condition.apply(&mut solver.u, &solver.mesh, &solver.eos);
        solver.apply_boundaries();
        for (wi, ui) in solver.w.iter_mut().zip(&solver.u) {
            *wi = solver.eos.to_primitive(ui);
        }

        solver
    }

    /// Current solution in conservative variables, ghosts included.
    pub fn solution(&self) -> &[Conservative<R>] {
        &self.u
    }

    /// Current solution in primitive variables, derived on demand.
    pub fn primitives(&self) -> Vec<Primitive<R>> {
        self.u.iter().map(|ui| self.eos.to_primitive(ui)).collect()
    }

    /// Computational mesh.
    pub fn mesh(&self) -> &Mesh1D<R> {
        &self.mesh
    }

    /// Current simulated time.
    pub fn time(&self) -> R {
        self.time
    }

    /// Number of completed timesteps.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Case name from the configuration.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// CFL-stable timestep from the current state.
    ///
    /// dt = CFL * dx / max(|u| + c) over interior cells. A near-zero
    /// maximum wave speed (degenerate or near-vacuum data) is replaced by
    /// one to keep the division defined.
    pub fn compute_dt(&self) -> R {
        let mut max_speed = R::ZERO;
        for i in self.mesh.first_interior()..=self.mesh.last_interior() {
            let ui = &self.u[i];
            let vel = (ui.rho_u / ui.rho).abs();
            let c = self.eos.sound_speed_cons(ui);
            max_speed = max_speed.max(vel + c);
        }

        if max_speed < R::EPSILON {
            max_speed = R::ONE;
        }

        self.cfl * self.mesh.dx() / max_speed
    }

    /// Advance one timestep. Returns the dt actually taken (clamped so the
    /// final step lands on `final_time` exactly).
    pub fn step(&mut self) -> R {
        let mut dt = self.compute_dt();
        if self.time + dt > self.final_time {
            dt = self.final_time - self.time;
        }

        let integrator = self.integrator;
        let bc_left = self.bc_left;
        let bc_right = self.bc_right;

        // The committed array is detached while the stages run; every stage
        // sees a ghost-filled copy of its input, never the input itself.
        let mut u = std::mem::take(&mut self.u);
        integrator.advance(&mut u, dt, &mut |u_in, du| {
            let mut work = u_in.to_vec();
            bc_left.apply_left(&mut work, &self.mesh);
            bc_right.apply_right(&mut work, &self.mesh);
            self.compute_rhs(&work, du);
        });
        self.u = u;

        self.apply_boundaries();
        self.time += dt;
        self.n_steps += 1;
        dt
    }

    /// Run the time loop to the configured final time.
    pub fn run(&mut self) {
        info!("starting simulation: {}", self.test_name);
        info!(
            "  domain [{}, {}], {} cells, dx = {:.6e}",
            self.mesh.xmin(),
            self.mesh.xmax(),
            self.mesh.num_cells(),
            self.mesh.dx()
        );
        info!(
            "  final time {}, cfl {}, order {}, flux {}, integrator {}",
            self.final_time,
            self.cfl,
            self.order,
            self.flux.name(),
            self.integrator.name()
        );

        let start = Instant::now();

        while self.time < self.final_time {
            let dt = self.step();
            if self.n_steps % 100 == 0 {
                debug!(
                    "  step {:6}, t = {:.6}, dt = {:.6e}",
                    self.n_steps, self.time, dt
                );
            }
        }

        let wall = start.elapsed().as_secs_f64();
        let cells_per_sec = (self.n_steps * self.mesh.num_cells()) as f64 / wall;
        info!(
            "simulation complete: {} steps, final time = {:.6}",
            self.n_steps, self.time
        );
        info!(
            "  wall time {:.4} s, {:.2} steps/s, {:.2} Mcells/s",
            wall,
            self.n_steps as f64 / wall,
            cells_per_sec / 1.0e6
        );
    }

    fn apply_boundaries(&mut self) {
        self.bc_left.apply_left(&mut self.u, &self.mesh);
        self.bc_right.apply_right(&mut self.u, &self.mesh);
    }

    /// Spatial discretization: dU/dt = -(F_{i+1/2} - F_{i-1/2}) / dx on
    /// interior cells, zero elsewhere. `u` must already be ghost-filled.
    fn compute_rhs(&mut self, u: &[Conservative<R>], du: &mut [Conservative<R>]) {
        for (wi, ui) in self.w.iter_mut().zip(u) {
            *wi = self.eos.to_primitive(ui);
        }

        let first = self.mesh.first_interior();
        let last = self.mesh.last_interior();

        // One flux per interface, from the left face of the first interior
        // cell to the right face of the last
        for i in (first - 1)..=last {
            let (u_l, u_r) = if self.order >= 2 {
                let (w_l, w_r) = reconstruct_muscl(&self.w, i, self.limiter);
                (self.eos.to_conservative(&w_l), self.eos.to_conservative(&w_r))
            } else {
                (u[i], u[i + 1])
            };
            self.fluxes[i + 1] = self.flux.compute(&u_l, &u_r, &self.eos);
        }

        for d in du.iter_mut() {
            *d = Conservative::zero();
        }

        let inv_dx = R::ONE / self.mesh.dx();
        for i in first..=last {
            du[i] = (self.fluxes[i] - self.fluxes[i + 1]) * inv_dx;
        }
    }
}
