use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellVectorError {
    #[error("Lattice vector {name} is missing")]
    Missing { name: &'static str },
    #[error("Lattice vector {name} must have 3 components, found {found}")]
    WrongLength { name: &'static str, found: usize },
    #[error("Lattice vector {name} has a component '{value}' that is not a finite number")]
    NotANumber { name: &'static str, value: String },
}

/// The three lattice vectors of a unit cell, in Angstroms.
///
/// The importer treats every cell as orthogonal: only the diagonal components
/// `(a.x, b.y, c.z)` are used, and any tilt carried by the off-diagonal
/// components is discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub a: Vector3<f64>,
    pub b: Vector3<f64>,
    pub c: Vector3<f64>,
}

impl CellGeometry {
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        Self { a, b, c }
    }

    /// An orthogonal cell with the given edge lengths.
    pub fn orthogonal(lx: f64, ly: f64, lz: f64) -> Self {
        Self::new(
            Vector3::new(lx, 0.0, 0.0),
            Vector3::new(0.0, ly, 0.0),
            Vector3::new(0.0, 0.0, lz),
        )
    }

    /// Parses the `AVector`, `BVector` and `CVector` attribute values of a
    /// space-group declaration.
    pub fn from_vector_attributes(
        a: Option<&str>,
        b: Option<&str>,
        c: Option<&str>,
    ) -> Result<Self, CellVectorError> {
        Ok(Self::new(
            parse_vector("AVector", a)?,
            parse_vector("BVector", b)?,
            parse_vector("CVector", c)?,
        ))
    }

    /// Edge lengths of the assumed-orthogonal box: `(a.x, b.y, c.z)`.
    pub fn diagonal(&self) -> Vector3<f64> {
        Vector3::new(self.a.x, self.b.y, self.c.z)
    }

    /// Returns `true` when every off-diagonal component is zero.
    pub fn is_orthogonal(&self) -> bool {
        [self.a.y, self.a.z, self.b.x, self.b.z, self.c.x, self.c.y]
            .iter()
            .all(|v| *v == 0.0)
    }
}

fn parse_vector(name: &'static str, value: Option<&str>) -> Result<Vector3<f64>, CellVectorError> {
    let value = value.ok_or(CellVectorError::Missing { name })?;
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CellVectorError::WrongLength {
            name,
            found: parts.len(),
        });
    }
    let mut components = [0.0; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CellVectorError::NotANumber {
                name,
                value: part.to_string(),
            })?;
    }
    Ok(Vector3::from(components))
}
