//! Solution output writers.
//!
//! Writers consume the solver's read-only surface (mesh, conservative and
//! primitive arrays, elapsed time); they impose nothing on the solver.

mod csv;
mod vtk;

pub use csv::write_csv;
pub use vtk::write_vtk;

use thiserror::Error;

/// Error type for output writers.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Underlying file I/O failure.
    #[error("cannot write output file: {0}")]
    Io(#[from] std::io::Error),
}
