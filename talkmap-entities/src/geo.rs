use std::fmt;
use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A position on earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error, PartialEq)]
#[error("Coordinates out of range: ({latitude}, {longitude})")]
pub struct CoordinatesOutOfRange {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesOutOfRange> {
        let pos = Self::new_unchecked(latitude, longitude);
        if pos.is_valid() {
            Ok(pos)
        } else {
            Err(CoordinatesOutOfRange {
                latitude,
                longitude,
            })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= LAT_DEG_MAX
            && self.longitude.abs() <= LNG_DEG_MAX
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new_unchecked(latitude, longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_valid_coordinates() {
        assert!(Coordinates::try_new(21.3099, -157.8581).is_ok());
        assert!(Coordinates::try_new(-90.0, 180.0).is_ok());
        assert!(Coordinates::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn reject_coordinates_out_of_range() {
        assert_eq!(
            Coordinates::try_new(90.5, 0.0),
            Err(CoordinatesOutOfRange {
                latitude: 90.5,
                longitude: 0.0
            })
        );
        assert!(Coordinates::try_new(0.0, -180.1).is_err());
        assert!(Coordinates::try_new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn display_as_pair() {
        let pos = Coordinates::new_unchecked(40.015, -105.2705);
        assert_eq!(pos.to_string(), "(40.015, -105.2705)");
    }
}
