//! Quadrant realignment for frequency grids.
//!
//! The DFT places zero frequency at the corner; band masks are defined
//! around the center. Swapping diagonally-opposite quadrants converts
//! between the two layouts and is its own inverse on even extents.

/// Swaps top-left with bottom-right and top-right with bottom-left.
///
/// Quadrants are split at `(rows / 2, cols / 2)`; both extents must be even
/// or the split would misalign. The swap copies whole half-rows into a fresh
/// buffer rather than aliasing sub-regions in place.
pub(crate) fn swap_quadrants<T: Copy + Default>(data: &[T], rows: usize, cols: usize) -> Vec<T> {
    debug_assert_eq!(rows % 2, 0, "quadrant swap requires even rows");
    debug_assert_eq!(cols % 2, 0, "quadrant swap requires even cols");
    debug_assert_eq!(data.len(), rows * cols);

    let half_rows = rows / 2;
    let half_cols = cols / 2;
    let mut out = vec![T::default(); data.len()];
    for r in 0..half_rows {
        let top = r * cols;
        let bottom = (r + half_rows) * cols;
        // Top-left -> bottom-right, top-right -> bottom-left.
        out[bottom + half_cols..bottom + cols].copy_from_slice(&data[top..top + half_cols]);
        out[bottom..bottom + half_cols].copy_from_slice(&data[top + half_cols..top + cols]);
        // Bottom-left -> top-right, bottom-right -> top-left.
        out[top + half_cols..top + cols].copy_from_slice(&data[bottom..bottom + half_cols]);
        out[top..top + half_cols].copy_from_slice(&data[bottom + half_cols..bottom + cols]);
    }
    out
}
