use super::boundary::{set_boundary, Boundary};
use ndarray::Array2;

/// Gauss-Seidel relaxation of `x = (x0 + a * neighbours(x)) / c` over interior cells.
///
/// Sweeps run in place, so each cell sees the neighbours already updated in
/// the same sweep. The boundary of `x` is rebuilt with `b` after every sweep.
#[allow(clippy::many_single_char_names)]
pub fn lin_solve(
    b: Boundary,
    x: &mut Array2<f64>,
    x0: &Array2<f64>,
    a: f64,
    c: f64,
    iterations: usize,
) {
    assert_eq!(x.dim(), x0.dim());

    let (n, _) = x.dim();
    assert!(n >= 3);

    let c_recip = 1.0 / c;

    for _ in 0..iterations {
        for j in 1..n - 1 {
            for i in 1..n - 1 {
                x[[i, j]] = (x0[[i, j]]
                    + a * (x[[i + 1, j]] + x[[i - 1, j]] + x[[i, j + 1]] + x[[i, j - 1]]))
                    * c_recip;
            }
        }
        set_boundary(b, x);
    }
}
