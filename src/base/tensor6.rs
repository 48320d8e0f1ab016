use serde::{Deserialize, Serialize};

/// Holds the six independent components of a symmetric second-order tensor
///
/// Used for the strain and stress measurements of a single load step. Whenever
/// a tensor is flattened into a vector or matrix, the components follow the
/// fixed order below; the reconstruction formulas rely on this order:
///
/// ```text
/// {xx, yy, zz, yz, xz, xy}
/// ```
///
/// Shear components are engineering quantities; e.g., for strains, `xy` holds
/// `γxy = 2 εxy`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Tensor6 {
    /// Normal component in x
    pub xx: f64,

    /// Normal component in y
    pub yy: f64,

    /// Normal component in z
    pub zz: f64,

    /// Shear component in the yz plane
    pub yz: f64,

    /// Shear component in the xz plane
    pub xz: f64,

    /// Shear component in the xy plane
    pub xy: f64,
}

impl Tensor6 {
    /// Allocates a new instance from the components in flattening order
    pub fn new(xx: f64, yy: f64, zz: f64, yz: f64, xz: f64, xy: f64) -> Self {
        Tensor6 { xx, yy, zz, yz, xz, xy }
    }

    /// Allocates a new instance with all components set to zero
    pub fn new_zero() -> Self {
        Tensor6::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Returns the components in flattening order
    pub fn as_array(&self) -> [f64; 6] {
        [self.xx, self.yy, self.zz, self.yz, self.xz, self.xy]
    }

    /// Allocates a new instance from an array in flattening order
    pub fn from_array(v: &[f64; 6]) -> Self {
        Tensor6::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Tensor6;

    #[test]
    fn as_array_follows_flattening_order() {
        let t = Tensor6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(t.as_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(t.yz, 4.0);
        assert_eq!(t.xz, 5.0);
        assert_eq!(t.xy, 6.0);
    }

    #[test]
    fn from_array_works() {
        let t = Tensor6::from_array(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(t, Tensor6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        assert_eq!(Tensor6::new_zero().as_array(), [0.0; 6]);
    }

    #[test]
    fn serde_works() {
        let t = Tensor6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let json = serde_json::to_string(&t).unwrap();
        let back: Tensor6 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
