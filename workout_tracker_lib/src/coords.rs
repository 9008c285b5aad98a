use serde::{Deserialize, Serialize};

/// Latitude/longitude pair. Serializes as a `[lat, lng]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords(pub f64, pub f64);

impl Coords {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}

impl From<(f64, f64)> for Coords {
    fn from(value: (f64, f64)) -> Self {
        Self(value.0, value.1)
    }
}
