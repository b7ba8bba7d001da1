//! CSV output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::OutputError;
use crate::mesh::Mesh1D;
use crate::types::{Conservative, Primitive, Real};

/// Write the solution to a CSV file with columns x, rho, u, p, E.
///
/// Interior cells only; ghost values never reach the output.
pub fn write_csv<R: Real, P: AsRef<Path>>(
    path: P,
    mesh: &Mesh1D<R>,
    u: &[Conservative<R>],
    w: &[Primitive<R>],
    time: R,
) -> Result<(), OutputError> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "# 1D Euler solution at time = {time}")?;
    writeln!(file, "# x,rho,u,p,E")?;

    for i in mesh.first_interior()..=mesh.last_interior() {
        writeln!(
            file,
            "{:.12e},{:.12e},{:.12e},{:.12e},{:.12e}",
            mesh.x(i),
            w[i].rho,
            w[i].u,
            w[i].p,
            u[i].energy
        )?;
    }

    file.flush()?;
    Ok(())
}
