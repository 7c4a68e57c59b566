use super::{advect, diffuse, field, project, Boundary};
use crate::FluidError;
use cgmath::{vec2, Vector2};
use log::{debug, trace, warn};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Relaxation sweeps per solve unless configured otherwise.
pub const DEFAULT_ITERATIONS: usize = 16;

/// Parameters fixed for the lifetime of a [`Fluid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidParams {
    /// Cells per side, boundary included.
    pub size: usize,
    pub dt: f64,
    /// Diffusion rate of the density field.
    pub diffusion: f64,
    pub viscosity: f64,
    /// Gauss-Seidel sweeps for both diffusion and projection.
    pub iterations: usize,
}

impl Default for FluidParams {
    fn default() -> Self {
        Self {
            size: 600,
            dt: 0.2,
            diffusion: 0.0,
            viscosity: 0.0000001,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl FluidParams {
    pub fn validate(&self) -> Result<(), FluidError> {
        if self.size < 3 {
            return Err(FluidError::GridTooSmall { size: self.size });
        }

        if self.iterations == 0 {
            return Err(FluidError::NoIterations);
        }

        for &(name, value) in [
            ("dt", self.dt),
            ("diffusion", self.diffusion),
            ("viscosity", self.viscosity),
        ]
        .iter()
        {
            if !value.is_finite() {
                return Err(FluidError::NonFinite { name, value });
            }
            if value < 0.0 {
                return Err(FluidError::Negative { name, value });
            }
        }

        Ok(())
    }
}

/// Density and velocity on an `N×N` grid, advanced by [`Fluid::step`].
///
/// All six fields are allocated once and mutated in place.
#[derive(Debug, Clone)]
pub struct Fluid {
    params: FluidParams,
    steps: u64,

    density: Array2<f64>,
    density_prev: Array2<f64>,

    velocity_x: Array2<f64>,
    velocity_y: Array2<f64>,

    velocity_x_prev: Array2<f64>,
    velocity_y_prev: Array2<f64>,
}

impl Fluid {
    pub fn new(size: usize, dt: f64, diffusion: f64, viscosity: f64) -> Result<Self, FluidError> {
        Self::with_params(FluidParams {
            size,
            dt,
            diffusion,
            viscosity,
            iterations: DEFAULT_ITERATIONS,
        })
    }

    pub fn with_params(params: FluidParams) -> Result<Self, FluidError> {
        params.validate()?;

        debug!(
            "fluid {}x{}: dt={} diffusion={} viscosity={} iterations={}",
            params.size,
            params.size,
            params.dt,
            params.diffusion,
            params.viscosity,
            params.iterations
        );
        if params.dt > 0.5 {
            warn!("dt={} is above 0.5, the solver may lose stability", params.dt);
        }

        let n = params.size;
        Ok(Self {
            params,
            steps: 0,
            density: field(n),
            density_prev: field(n),
            velocity_x: field(n),
            velocity_y: field(n),
            velocity_x_prev: field(n),
            velocity_y_prev: field(n),
        })
    }

    pub fn size(&self) -> usize {
        self.params.size
    }

    pub fn params(&self) -> &FluidParams {
        &self.params
    }

    /// Number of completed calls to [`Fluid::step`].
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn add_density(&mut self, x: usize, y: usize, amount: f64) {
        debug_assert!(x < self.size() && y < self.size());
        self.density[[x, y]] += amount;
    }

    pub fn add_velocity(&mut self, x: usize, y: usize, amount_x: f64, amount_y: f64) {
        debug_assert!(x < self.size() && y < self.size());
        self.velocity_x[[x, y]] += amount_x;
        self.velocity_y[[x, y]] += amount_y;
    }

    /// Advance by one `dt`.
    pub fn step(&mut self) {
        let Fluid {
            params,
            steps,
            density,
            density_prev,
            velocity_x: vx,
            velocity_y: vy,
            velocity_x_prev: vx0,
            velocity_y_prev: vy0,
        } = self;
        let FluidParams {
            dt,
            diffusion,
            viscosity,
            iterations,
            ..
        } = *params;

        diffuse(Boundary::VelocityX, vx0, vx, viscosity, dt, iterations);
        diffuse(Boundary::VelocityY, vy0, vy, viscosity, dt, iterations);

        project(vx0, vy0, vx, vy, iterations);

        advect(Boundary::VelocityX, vx, vx0, vx0, vy0, dt);
        advect(Boundary::VelocityY, vy, vy0, vx0, vy0, dt);

        // Advection brings divergence back.
        project(vx, vy, vx0, vy0, iterations);

        diffuse(Boundary::Scalar, density_prev, density, diffusion, dt, iterations);
        advect(Boundary::Scalar, density, density_prev, vx, vy, dt);

        *steps += 1;
        trace!("fluid step {}", steps);
    }

    /// Zero every field and the step counter, keeping the allocations.
    pub fn clear(&mut self) {
        for f in [
            &mut self.density,
            &mut self.density_prev,
            &mut self.velocity_x,
            &mut self.velocity_y,
            &mut self.velocity_x_prev,
            &mut self.velocity_y_prev,
        ]
        .iter_mut()
        {
            f.fill(0.0);
        }
        self.steps = 0;
    }

    pub fn density(&self) -> &Array2<f64> {
        &self.density
    }

    pub fn velocity_x(&self) -> &Array2<f64> {
        &self.velocity_x
    }

    pub fn velocity_y(&self) -> &Array2<f64> {
        &self.velocity_y
    }

    pub fn density_at(&self, x: usize, y: usize) -> f64 {
        self.density[[x, y]]
    }

    pub fn velocity_at(&self, x: usize, y: usize) -> Vector2<f64> {
        vec2(self.velocity_x[[x, y]], self.velocity_y[[x, y]])
    }

    /// Sum of the density field, boundary included.
    pub fn total_density(&self) -> f64 {
        self.density.sum()
    }
}
