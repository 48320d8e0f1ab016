use serde::{Deserialize, Serialize};

/// Holds the three components of a vector quantity such as a heat flux
///
/// Used for the temperature-gradient and flux measurements of a single load
/// step of a thermal conductivity simulation. The flattening order is
/// `{x, y, z}`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Tensor3 {
    /// Component in x
    pub x: f64,

    /// Component in y
    pub y: f64,

    /// Component in z
    pub z: f64,
}

impl Tensor3 {
    /// Allocates a new instance
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Tensor3 { x, y, z }
    }

    /// Returns the components in flattening order
    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Allocates a new instance from an array in flattening order
    pub fn from_array(v: &[f64; 3]) -> Self {
        Tensor3::new(v[0], v[1], v[2])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Tensor3;

    #[test]
    fn as_array_follows_flattening_order() {
        let t = Tensor3::new(1.0, 2.0, 3.0);
        assert_eq!(t.as_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Tensor3::from_array(&[1.0, 2.0, 3.0]), t);
    }
}
