use crate::core::models::atom::{Axis, FractionalPosition};
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Fractional {axis} component '{value}' is not a finite real number")]
pub struct CoordinateError {
    pub axis: Axis,
    pub value: String,
}

/// Parses the three fractional components of `position` into finite reals.
///
/// `nan` and `inf` parse as `f64` but cannot be written into a LAMMPS
/// directive, so they are rejected like any other unreadable component.
pub fn parse_fractional(position: &FractionalPosition) -> Result<Vector3<f64>, CoordinateError> {
    let mut parsed = Vector3::zeros();
    for axis in Axis::ALL {
        let raw = position.component(axis);
        parsed[axis.index()] = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CoordinateError {
                axis,
                value: raw.to_string(),
            })?;
    }
    Ok(parsed)
}

/// Maps a fractional position into the orthogonal box with edge lengths
/// `diagonal`, as the elementwise product `(f0 * a, f1 * b, f2 * c)`.
pub fn to_cartesian(
    position: &FractionalPosition,
    diagonal: &Vector3<f64>,
) -> Result<Point3<f64>, CoordinateError> {
    let fractional = parse_fractional(position)?;
    Ok(Point3::from(fractional.component_mul(diagonal)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_center_scales_with_each_edge() {
        let pos = FractionalPosition::new("0.5", "0.5", "0.5");
        let cart = to_cartesian(&pos, &Vector3::new(10.0, 20.0, 30.0)).unwrap();
        assert_eq!(cart, Point3::new(5.0, 10.0, 15.0));
    }

    #[test]
    fn negative_and_out_of_cell_fractions_are_accepted() {
        let pos = FractionalPosition::new("-0.05077", "1.25", "0");
        let cart = to_cartesian(&pos, &Vector3::new(4.0, 4.0, 4.0)).unwrap();
        assert!((cart.x + 0.20308).abs() < 1e-12);
        assert_eq!(cart.y, 5.0);
        assert_eq!(cart.z, 0.0);
    }

    #[test]
    fn blank_component_is_an_invalid_coordinate() {
        let pos = FractionalPosition::new("0.1", "", "0.3");
        let err = to_cartesian(&pos, &Vector3::new(1.0, 1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            CoordinateError {
                axis: Axis::Y,
                value: String::new()
            }
        );
    }

    #[test]
    fn non_numeric_component_is_an_invalid_coordinate() {
        let pos = FractionalPosition::new("0.1", "0.2", "half");
        let err = parse_fractional(&pos).unwrap_err();
        assert_eq!(err.axis, Axis::Z);
        assert_eq!(err.value, "half");
        assert_eq!(
            err.to_string(),
            "Fractional z component 'half' is not a finite real number"
        );
    }

    #[test]
    fn non_finite_components_are_invalid_coordinates() {
        for (raw, axis) in [("nan", Axis::X), ("inf", Axis::Y), ("-infinity", Axis::Z)] {
            let mut parts = ["0.1".to_string(), "0.2".to_string(), "0.3".to_string()];
            parts[axis.index()] = raw.to_string();
            let pos = FractionalPosition::new(&parts[0], &parts[1], &parts[2]);

            let err = to_cartesian(&pos, &Vector3::new(1.0, 1.0, 1.0)).unwrap_err();
            assert_eq!(err.axis, axis);
            assert_eq!(err.value, raw);
        }
    }
}
