use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Returns `None` when either component is outside its valid range.
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);

        valid.then(|| Coordinate::new(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(Coordinate::checked(42.3601, -71.0589).is_some());
        assert!(Coordinate::checked(90.0, 180.0).is_some());
        assert!(Coordinate::checked(90.5, 0.0).is_none());
        assert!(Coordinate::checked(0.0, -180.1).is_none());
        assert!(Coordinate::checked(f64::NAN, 0.0).is_none());
    }
}
