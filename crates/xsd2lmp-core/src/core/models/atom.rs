use std::fmt;

/// One of the three fractional axes of a unit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Axis::X => "x",
                Axis::Y => "y",
                Axis::Z => "z",
            }
        )
    }
}

/// A fractional position exactly as it was written in the descriptor.
///
/// Components are kept as text so that the reader never rejects a line for a
/// malformed number. Conversion to reals happens in
/// [`crate::core::utils::geometry::to_cartesian`], which is where such values
/// surface as hard errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FractionalPosition {
    components: [String; 3],
}

impl FractionalPosition {
    pub fn new(x: &str, y: &str, z: &str) -> Self {
        Self {
            components: [x.trim().to_string(), y.trim().to_string(), z.trim().to_string()],
        }
    }

    /// Builds a position from a comma separated `XYZ` attribute value.
    ///
    /// Missing components are left blank; surplus components are ignored.
    pub fn from_xyz_attribute(value: &str) -> Self {
        let mut parts = value.split(',');
        let mut next = || parts.next().unwrap_or("");
        let x = next();
        let y = next();
        let z = next();
        Self::new(x, y, z)
    }

    pub fn component(&self, axis: Axis) -> &str {
        &self.components[axis.index()]
    }

    pub fn components(&self) -> &[String; 3] {
        &self.components
    }
}

/// An atom declared in the descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomRecord {
    /// The identifier used by the descriptor to reference this atom (e.g. in bonds).
    pub source_id: String,
    /// The species label, used verbatim as the LAMMPS atom type label (e.g. "O[Water]").
    pub label: String,
    /// Position in fractions of the cell edge lengths.
    pub fractional: FractionalPosition,
}

impl AtomRecord {
    pub fn new(source_id: &str, label: &str, fractional: FractionalPosition) -> Self {
        Self {
            source_id: source_id.to_string(),
            label: label.to_string(),
            fractional,
        }
    }
}
