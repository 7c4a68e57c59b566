mod boundary;
mod fluid;
mod grid;
mod linear;

pub use boundary::{set_boundary, Boundary};
pub use fluid::{Fluid, FluidParams, DEFAULT_ITERATIONS};
pub use grid::{field, interior, ix};
pub use linear::lin_solve;

use cgmath::{vec2, Vector2};
use ndarray::Array2;

/// Bilinear sample of `q` at `ij`.
///
/// The position is clamped to `[0.5, n - 1.5]` on both axes so the four
/// sampled cells always exist.
fn interpolate_linear(q: &Array2<f64>, ij: Vector2<f64>) -> f64 {
    let (w, h) = q.dim();

    assert!(w >= 3);
    assert!(h >= 3);

    let x = ij.x.max(0.5).min((w - 2) as f64 + 0.5);
    let y = ij.y.max(0.5).min((h - 2) as f64 + 0.5);

    let i0 = x.floor() as usize;
    let i1 = i0 + 1;

    let j0 = y.floor() as usize;
    let j1 = j0 + 1;

    let s1 = x - i0 as f64;
    let s0 = 1.0 - s1;

    let t1 = y - j0 as f64;
    let t0 = 1.0 - t1;

    (q[[i0, j0]] * t0 + q[[i0, j1]] * t1) * s0 + (q[[i1, j0]] * t0 + q[[i1, j1]] * t1) * s1
}

/// Semi-Lagrangian advection of `d0` into `d` along `(u, v)`.
///
/// Each interior cell is traced back by `dt * (n - 2)` times its velocity and
/// takes the bilinear sample found there.
pub fn advect(
    b: Boundary,
    d: &mut Array2<f64>,
    d0: &Array2<f64>,
    u: &Array2<f64>,
    v: &Array2<f64>,
    dt: f64,
) {
    assert_eq!(d.dim(), d0.dim());
    assert_eq!(d.dim(), u.dim());
    assert_eq!(d.dim(), v.dim());

    let (n, _) = d.dim();
    assert!(n >= 3);

    let dt0 = dt * (n - 2) as f64;

    for (i, j) in interior(n) {
        let origin = vec2(i as f64, j as f64) - dt0 * vec2(u[[i, j]], v[[i, j]]);
        d[[i, j]] = interpolate_linear(d0, origin);
    }

    set_boundary(b, d);
}

/// Implicit diffusion of `x0` into `x` at `rate`.
pub fn diffuse(
    b: Boundary,
    x: &mut Array2<f64>,
    x0: &Array2<f64>,
    rate: f64,
    dt: f64,
    iterations: usize,
) {
    let (n, _) = x.dim();
    assert!(n >= 3);

    let a = dt * rate * ((n - 2) * (n - 2)) as f64;

    lin_solve(b, x, x0, a, 1.0 + 6.0 * a, iterations);
}

/// Discrete divergence of `(u, v)` written to the interior of `div`, scaled by `-0.5 / n`.
pub fn divergence(div: &mut Array2<f64>, u: &Array2<f64>, v: &Array2<f64>) {
    assert_eq!(div.dim(), u.dim());
    assert_eq!(div.dim(), v.dim());

    let (n, _) = div.dim();
    let h = n as f64;

    for (i, j) in interior(n) {
        div[[i, j]] = -0.5 * (u[[i + 1, j]] - u[[i - 1, j]] + v[[i, j + 1]] - v[[i, j - 1]]) / h;
    }
}

/// Make `(u, v)` divergence free.
///
/// `p` and `div` are scratch; on return they hold the pressure and the
/// divergence of the input field.
pub fn project(
    u: &mut Array2<f64>,
    v: &mut Array2<f64>,
    p: &mut Array2<f64>,
    div: &mut Array2<f64>,
    iterations: usize,
) {
    assert_eq!(u.dim(), v.dim());
    assert_eq!(u.dim(), p.dim());

    let (n, _) = u.dim();
    let h = n as f64;

    divergence(div, u, v);
    for (i, j) in interior(n) {
        p[[i, j]] = 0.0;
    }

    set_boundary(Boundary::Scalar, div);
    set_boundary(Boundary::Scalar, p);
    lin_solve(Boundary::Scalar, p, div, 1.0, 6.0, iterations);

    for (i, j) in interior(n) {
        u[[i, j]] -= 0.5 * (p[[i + 1, j]] - p[[i - 1, j]]) * h;
        v[[i, j]] -= 0.5 * (p[[i, j + 1]] - p[[i, j - 1]]) * h;
    }

    set_boundary(Boundary::VelocityX, u);
    set_boundary(Boundary::VelocityY, v);
}
