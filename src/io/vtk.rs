//! VTK legacy output for visualization in ParaView.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::OutputError;
use crate::mesh::Mesh1D;
use crate::types::{Conservative, Primitive, Real};

/// Write the solution as a legacy-format VTK structured grid.
///
/// Points are the interior cell centers; rho, u, p and E are attached as
/// point-data scalars.
pub fn write_vtk<R: Real, P: AsRef<Path>>(
    path: P,
    mesh: &Mesh1D<R>,
    u: &[Conservative<R>],
    w: &[Primitive<R>],
) -> Result<(), OutputError> {
    let mut file = BufWriter::new(File::create(path)?);

    let n = mesh.num_cells();
    let first = mesh.first_interior();

    writeln!(file, "# vtk DataFile Version 3.0")?;
    writeln!(file, "1D Euler solution")?;
    writeln!(file, "ASCII")?;
    writeln!(file, "DATASET STRUCTURED_GRID")?;
    writeln!(file, "DIMENSIONS {n} 1 1")?;
    writeln!(file, "POINTS {n} double")?;

    for i in 0..n {
        writeln!(file, "{:.12e} 0 0", mesh.x(first + i))?;
    }

    writeln!(file, "\nPOINT_DATA {n}")?;

    writeln!(file, "SCALARS rho double 1")?;
    writeln!(file, "LOOKUP_TABLE default")?;
    for i in 0..n {
        writeln!(file, "{:.12e}", w[first + i].rho)?;
    }

    writeln!(file, "\nSCALARS u double 1")?;
    writeln!(file, "LOOKUP_TABLE default")?;
    for i in 0..n {
        writeln!(file, "{:.12e}", w[first + i].u)?;
    }

    writeln!(file, "\nSCALARS p double 1")?;
    writeln!(file, "LOOKUP_TABLE default")?;
    for i in 0..n {
        writeln!(file, "{:.12e}", w[first + i].p)?;
    }

    writeln!(file, "\nSCALARS E double 1")?;
    writeln!(file, "LOOKUP_TABLE default")?;
    for i in 0..n {
        writeln!(file, "{:.12e}", u[first + i].energy)?;
    }

    file.flush()?;
    Ok(())
}
