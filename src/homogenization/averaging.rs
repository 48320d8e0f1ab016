use crate::StrError;
use russell_lab::{mat_inverse, Matrix};
use serde::{Deserialize, Serialize};

/// Holds a set of homogenized isotropic elastic constants
///
/// Produced once per averaging method (Voigt, Reuss, or Hill) from a given
/// stiffness tensor.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ElasticConstants {
    /// Young's modulus E
    pub young: f64,

    /// Poisson's ratio ν
    pub poisson: f64,

    /// Bulk modulus K
    pub bulk: f64,

    /// Shear modulus G
    pub shear: f64,
}

/// Computes the Voigt average of the elastic constants (upper bound)
///
/// Works directly on the stiffness matrix. With
///
/// ```text
/// av = (C00 + C11 + C22)/3
/// bv = (C01 + C12 + C20)/3
/// cv = (C33 + C44 + C55)/3
/// ```
///
/// the estimates are
///
/// ```text
/// E = (av - bv + 3 cv)(av + 2 bv)/(2 av + 3 bv + cv)
/// G = (av - bv + 3 cv)/5
/// K = (av + 2 bv)/3
/// ν = E/(2 G) - 1
/// ```
///
/// # Input
///
/// * `cc` -- stiffness tensor (6×6, symmetric) in engineering Voigt notation
pub fn voigt_average(cc: &Matrix) -> Result<ElasticConstants, StrError> {
    if cc.dims() != (6, 6) {
        return Err("stiffness matrix must be 6x6");
    }
    let (av, bv, cv) = averaged_entries(cc);
    let young = (av - bv + 3.0 * cv) * (av + 2.0 * bv) / (2.0 * av + 3.0 * bv + cv);
    let shear = (av - bv + 3.0 * cv) / 5.0;
    let bulk = (av + 2.0 * bv) / 3.0;
    let poisson = young / (2.0 * shear) - 1.0;
    finite_or_err(ElasticConstants {
        young,
        poisson,
        bulk,
        shear,
    })
}

/// Computes the Reuss average of the elastic constants (lower bound)
///
/// Works on the compliance matrix `a = C⁻¹`. With `xr`, `yr`, `zr` defined
/// from `a` exactly as `av`, `bv`, `cv` in [`voigt_average`]:
///
/// ```text
/// E = 5/(3 xr + 2 yr + zr)
/// G = 5/(4 xr - 4 yr + 3 zr)
/// K = 1/(3 (xr + 2 yr))
/// ν = E/(2 G) - 1
/// ```
///
/// A singular (non-invertible) stiffness matrix makes the Reuss average
/// undefined and surfaces as the linear-algebra error of the inversion.
pub fn reuss_average(cc: &Matrix) -> Result<ElasticConstants, StrError> {
    if cc.dims() != (6, 6) {
        return Err("stiffness matrix must be 6x6");
    }
    let mut aa = Matrix::new(6, 6);
    mat_inverse(&mut aa, cc)?;
    let (xr, yr, zr) = averaged_entries(&aa);
    let young = 5.0 / (3.0 * xr + 2.0 * yr + zr);
    let shear = 5.0 / (4.0 * xr - 4.0 * yr + 3.0 * zr);
    let bulk = 1.0 / (3.0 * (xr + 2.0 * yr));
    let poisson = young / (2.0 * shear) - 1.0;
    finite_or_err(ElasticConstants {
        young,
        poisson,
        bulk,
        shear,
    })
}

/// Computes the Hill average of the elastic constants
///
/// Arithmetic mean of the Voigt and Reuss results, scalar by scalar. Both
/// averages are computed fully first; the stiffness matrix itself is not
/// averaged.
pub fn hill_average(cc: &Matrix) -> Result<ElasticConstants, StrError> {
    let voigt = voigt_average(cc)?;
    let reuss = reuss_average(cc)?;
    Ok(ElasticConstants {
        young: (voigt.young + reuss.young) / 2.0,
        poisson: (voigt.poisson + reuss.poisson) / 2.0,
        bulk: (voigt.bulk + reuss.bulk) / 2.0,
        shear: (voigt.shear + reuss.shear) / 2.0,
    })
}

/// Returns the averaged normal-diagonal, normal-off-diagonal, and shear-diagonal entries
fn averaged_entries(m: &Matrix) -> (f64, f64, f64) {
    let a = (m.get(0, 0) + m.get(1, 1) + m.get(2, 2)) / 3.0;
    let b = (m.get(0, 1) + m.get(1, 2) + m.get(2, 0)) / 3.0;
    let c = (m.get(3, 3) + m.get(4, 4) + m.get(5, 5)) / 3.0;
    (a, b, c)
}

/// Rejects non-finite results caused by degenerate stiffness input
fn finite_or_err(constants: ElasticConstants) -> Result<ElasticConstants, StrError> {
    let finite = constants.young.is_finite()
        && constants.poisson.is_finite()
        && constants.bulk.is_finite()
        && constants.shear.is_finite();
    if !finite {
        return Err("elastic constants are not finite (degenerate stiffness)");
    }
    Ok(constants)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
