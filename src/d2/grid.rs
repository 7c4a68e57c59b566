use ndarray::{Array, Array2, ShapeBuilder};

/// Flat offset of cell `(x, y)` in an `n×n` field.
///
/// Fields created by [`field`] are column-major, so this is also the offset
/// into `Array2::as_slice_memory_order`.
#[inline]
pub fn ix(n: usize, x: usize, y: usize) -> usize {
    debug_assert!(x < n && y < n, "cell ({}, {}) outside {}x{} grid", x, y, n, n);
    x + y * n
}

/// Zeroed `n×n` field indexed `[[x, y]]`.
pub fn field(n: usize) -> Array2<f64> {
    Array::zeros((n, n).f())
}

/// Interior cells of an `n×n` grid, rows outer and columns inner.
///
/// Relaxation depends on this visiting order.
pub fn interior(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..n.saturating_sub(1)).flat_map(move |j| (1..n - 1).map(move |i| (i, j)))
}
