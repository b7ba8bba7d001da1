//! 1D uniform mesh with ghost cells.
//!
//! The cell layout brackets the physical domain with ghost cells on each
//! side so interior stencils never branch at the domain edges:
//!
//! ```text
//! [ghost][ghost] | [interior cells]  | [ghost][ghost]
//!  0      1        2 ... num_cells+1   num_cells+2  num_cells+3
//! ```
//!
//! Two ghost cells per side are enough for the four-point MUSCL stencil.

use crate::types::Real;

/// Uniform 1D mesh over [xmin, xmax] with ghost cells.
///
/// Immutable after construction.
#[derive(Clone, Copy, Debug)]
pub struct Mesh1D<R: Real> {
    xmin: R,
    xmax: R,
    num_cells: usize,
    dx: R,
}

impl<R: Real> Mesh1D<R> {
    /// Ghost cells per side.
    pub const NUM_GHOSTS: usize = 2;

    /// Create a uniform mesh of [xmin, xmax] with `num_cells` interior cells.
    ///
    /// # Panics
    /// Panics if `num_cells` is zero or `xmax <= xmin`.
    pub fn new(xmin: R, xmax: R, num_cells: usize) -> Self {
        assert!(num_cells > 0, "num_cells must be positive");
        assert!(xmax > xmin, "xmax must be greater than xmin");

        let dx = (xmax - xmin) / R::from_f64_lossy(num_cells as f64);
        Self {
            xmin,
            xmax,
            num_cells,
            dx,
        }
    }

    /// Left endpoint of the physical domain.
    #[inline]
    pub fn xmin(&self) -> R {
        self.xmin
    }

    /// Right endpoint of the physical domain.
    #[inline]
    pub fn xmax(&self) -> R {
        self.xmax
    }

    /// Number of interior cells (excluding ghosts).
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// Total number of cells, ghosts included.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.num_cells + 2 * Self::NUM_GHOSTS
    }

    /// Uniform cell width.
    #[inline]
    pub fn dx(&self) -> R {
        self.dx
    }

    /// Cell-center coordinate for logical index `i` (ghosts included).
    ///
    /// Ghost cell centers extend beyond the domain.
    #[inline]
    pub fn x(&self, i: usize) -> R {
        let offset = i as f64 - Self::NUM_GHOSTS as f64 + 0.5;
        self.xmin + R::from_f64_lossy(offset) * self.dx
    }

    /// Left face coordinate for cell `i`.
    #[inline]
    pub fn x_face_left(&self, i: usize) -> R {
        let offset = i as f64 - Self::NUM_GHOSTS as f64;
        self.xmin + R::from_f64_lossy(offset) * self.dx
    }

    /// Right face coordinate for cell `i`.
    #[inline]
    pub fn x_face_right(&self, i: usize) -> R {
        self.x_face_left(i) + self.dx
    }

    /// First interior cell index.
    #[inline]
    pub fn first_interior(&self) -> usize {
        Self::NUM_GHOSTS
    }

    /// Last interior cell index (inclusive).
    #[inline]
    pub fn last_interior(&self) -> usize {
        Self::NUM_GHOSTS + self.num_cells - 1
    }

    /// Check whether `i` indexes an interior cell.
    #[inline]
    pub fn is_interior(&self, i: usize) -> bool {
        i >= self.first_interior() && i <= self.last_interior()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_mesh() {
        let mesh: Mesh1D<f64> = Mesh1D::new(0.0, 1.0, 100);

        assert_eq!(mesh.num_cells(), 100);
        assert_eq!(mesh.total_cells(), 104);
        assert!((mesh.dx() - 0.01).abs() < 1e-14);
    }

    #[test]
    fn test_cell_centers() {
        let mesh: Mesh1D<f64> = Mesh1D::new(0.0, 1.0, 10);

        // First interior cell is centered half a cell in from xmin
        assert!((mesh.x(mesh.first_interior()) - 0.05).abs() < 1e-14);
        // Last interior cell is centered half a cell in from xmax
        assert!((mesh.x(mesh.last_interior()) - 0.95).abs() < 1e-14);
        // Ghost centers extend beyond the domain
        assert!((mesh.x(0) + 0.15).abs() < 1e-14);
        assert!((mesh.x(1) + 0.05).abs() < 1e-14);
    }

    #[test]
    fn test_face_coordinates() {
        let mesh: Mesh1D<f64> = Mesh1D::new(0.0, 2.0, 4);

        let first = mesh.first_interior();
        assert!((mesh.x_face_left(first) - 0.0).abs() < 1e-14);
        assert!((mesh.x_face_right(first) - 0.5).abs() < 1e-14);
        assert!((mesh.x_face_right(mesh.last_interior()) - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_interior_bounds() {
        let mesh = Mesh1D::new(-1.0, 1.0, 10);

        assert_eq!(mesh.first_interior(), 2);
        assert_eq!(mesh.last_interior(), 11);
        assert!(!mesh.is_interior(0));
        assert!(!mesh.is_interior(1));
        assert!(mesh.is_interior(2));
        assert!(mesh.is_interior(11));
        assert!(!mesh.is_interior(12));
        assert!(!mesh.is_interior(13));
    }

    #[test]
    #[should_panic(expected = "num_cells must be positive")]
    fn test_zero_cells_panics() {
        let _ = Mesh1D::<f64>::new(0.0, 1.0, 0);
    }

    #[test]
    #[should_panic(expected = "xmax must be greater than xmin")]
    fn test_inverted_bounds_panics() {
        let _ = Mesh1D::<f64>::new(1.0, 0.0, 10);
    }

    #[test]
    fn test_single_precision() {
        let mesh = Mesh1D::<f32>::new(0.0, 1.0, 8);
        assert!((mesh.dx() - 0.125).abs() < 1e-6);
        assert!((mesh.x(2) - 0.0625).abs() < 1e-6);
    }
}
