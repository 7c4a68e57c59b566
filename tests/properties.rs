//! Property-based tests for the solver using proptest
//!
//! - No NaN/Inf after random impulses and steps
//! - Wall rules hold on every edge after a step
//! - A single projection strictly reduces divergence of a wall-consistent field
//! - An empty fluid stays empty

use ndarray::Array2;
use proptest::prelude::*;
use stable_fluids::d2::{divergence, field, interior, project, set_boundary, Boundary, Fluid};

#[derive(Debug, Clone)]
struct Impulse {
    x: usize,
    y: usize,
    amount: f64,
    dx: f64,
    dy: f64,
}

fn impulses(n: usize) -> impl Strategy<Value = Vec<Impulse>> {
    prop::collection::vec(
        (0..n, 0..n, 0.0..255.0f64, -20.0..20.0f64, -20.0..20.0f64).prop_map(
            |(x, y, amount, dx, dy)| Impulse {
                x,
                y,
                amount,
                dx,
                dy,
            },
        ),
        1..12,
    )
}

fn sized_impulses() -> impl Strategy<Value = (usize, Vec<Impulse>)> {
    (4usize..18).prop_flat_map(|n| (Just(n), impulses(n)))
}

fn velocity_field(n: usize) -> impl Strategy<Value = (Array2<f64>, Array2<f64>)> {
    let cells = (n - 2) * (n - 2);
    (
        prop::collection::vec(-1.0..1.0f64, cells),
        prop::collection::vec(-1.0..1.0f64, cells),
    )
        .prop_map(move |(us, vs)| {
            let mut u = field(n);
            let mut v = field(n);
            for (k, (i, j)) in interior(n).enumerate() {
                u[[i, j]] = us[k];
                v[[i, j]] = vs[k];
            }
            set_boundary(Boundary::VelocityX, &mut u);
            set_boundary(Boundary::VelocityY, &mut v);
            (u, v)
        })
}

fn sum_sq_divergence(u: &Array2<f64>, v: &Array2<f64>) -> f64 {
    let mut div = field(u.dim().0);
    divergence(&mut div, u, v);
    div.iter().map(|d| d * d).sum()
}

fn run(fluid: &mut Fluid, impulses: &[Impulse]) {
    for imp in impulses {
        fluid.add_density(imp.x, imp.y, imp.amount);
        fluid.add_velocity(imp.x, imp.y, imp.dx, imp.dy);
        fluid.step();
    }
}

proptest! {
    #[test]
    fn prop_fields_stay_finite(
        (n, imps) in sized_impulses(),
        dt in 0.001..0.5f64,
        diffusion in 0.0..0.01f64,
        viscosity in 0.0..0.01f64,
    ) {
        let mut fluid = Fluid::new(n, dt, diffusion, viscosity).unwrap();
        run(&mut fluid, &imps);

        prop_assert!(fluid.density().iter().all(|e| e.is_finite()));
        prop_assert!(fluid.velocity_x().iter().all(|e| e.is_finite()));
        prop_assert!(fluid.velocity_y().iter().all(|e| e.is_finite()));
    }

    #[test]
    fn prop_walls_hold_after_step((n, imps) in sized_impulses()) {
        let mut fluid = Fluid::new(n, 0.1, 0.0001, 0.0001).unwrap();
        run(&mut fluid, &imps);

        let u = fluid.velocity_x();
        let v = fluid.velocity_y();

        for k in 1..n - 1 {
            prop_assert_eq!(u[[0, k]], -u[[1, k]]);
            prop_assert_eq!(u[[n - 1, k]], -u[[n - 2, k]]);
            prop_assert_eq!(u[[k, 0]], u[[k, 1]]);
            prop_assert_eq!(u[[k, n - 1]], u[[k, n - 2]]);

            prop_assert_eq!(v[[k, 0]], -v[[k, 1]]);
            prop_assert_eq!(v[[k, n - 1]], -v[[k, n - 2]]);
            prop_assert_eq!(v[[0, k]], v[[1, k]]);
            prop_assert_eq!(v[[n - 1, k]], v[[n - 2, k]]);
        }

        for q in [u, v].iter() {
            prop_assert_eq!(q[[0, 0]], 0.5 * (q[[1, 0]] + q[[0, 1]]));
            prop_assert_eq!(q[[n - 1, n - 1]], 0.5 * (q[[n - 2, n - 1]] + q[[n - 1, n - 2]]));
        }
    }

    // Edges start out obeying the wall rules, as every field inside the solver does.
    // With arbitrary edges the final wall rewrite can raise divergence on small grids.
    #[test]
    fn prop_projection_reduces_divergence_with_walls(
        (u, v) in (4usize..24).prop_flat_map(velocity_field),
    ) {
        let (mut u, mut v) = (u, v);
        let n = u.dim().0;
        let before = sum_sq_divergence(&u, &v);
        prop_assume!(before > 1e-12);

        let mut p = field(n);
        let mut div = field(n);
        project(&mut u, &mut v, &mut p, &mut div, 16);

        prop_assert!(sum_sq_divergence(&u, &v) < before);
    }

    #[test]
    fn prop_empty_fluid_stays_empty(n in 3usize..20, steps in 1usize..6) {
        let mut fluid = Fluid::new(n, 0.2, 0.001, 0.001).unwrap();
        for _ in 0..steps {
            fluid.step();
        }

        prop_assert!(fluid.density().iter().all(|&e| e == 0.0));
        prop_assert!(fluid.velocity_x().iter().all(|&e| e == 0.0));
        prop_assert!(fluid.velocity_y().iter().all(|&e| e == 0.0));
    }
}
