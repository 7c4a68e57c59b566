use ndarray::Array2;

/// Which wall rule [`set_boundary`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Every edge copies its interior neighbour.
    Scalar,
    /// Left/right edges are negated, top/bottom copied.
    VelocityX,
    /// Top/bottom edges are negated, left/right copied.
    VelocityY,
}

impl Boundary {
    fn signs(self) -> (f64, f64) {
        match self {
            Boundary::Scalar => (1.0, 1.0),
            Boundary::VelocityX => (-1.0, 1.0),
            Boundary::VelocityY => (1.0, -1.0),
        }
    }
}

/// Overwrite the edges and corners of `x` from its interior.
///
/// Corners take the average of their two neighbouring edge cells, after the
/// edges have been updated.
pub fn set_boundary(b: Boundary, x: &mut Array2<f64>) {
    let (w, h) = x.dim();

    assert_eq!(w, h);
    assert!(w >= 3);

    let n = w;
    let (sign_x, sign_y) = b.signs();

    for i in 1..n - 1 {
        x[[i, 0]] = sign_y * x[[i, 1]];
        x[[i, n - 1]] = sign_y * x[[i, n - 2]];
    }

    for j in 1..n - 1 {
        x[[0, j]] = sign_x * x[[1, j]];
        x[[n - 1, j]] = sign_x * x[[n - 2, j]];
    }

    x[[0, 0]] = 0.5 * (x[[1, 0]] + x[[0, 1]]);
    x[[0, n - 1]] = 0.5 * (x[[1, n - 1]] + x[[0, n - 2]]);
    x[[n - 1, 0]] = 0.5 * (x[[n - 2, 0]] + x[[n - 1, 1]]);
    x[[n - 1, n - 1]] = 0.5 * (x[[n - 2, n - 1]] + x[[n - 1, n - 2]]);
}
