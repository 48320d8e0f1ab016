use super::stiffness::min_max_singular_values;
use crate::base::Tensor3;
use crate::StrError;
use russell_lab::{mat_mat_mul, mat_svd, Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Holds a conductivity tensor reconstructed from load-step measurements
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReconstructedConductivity {
    /// Thermal conductivity tensor (3×3)
    ///
    /// Not symmetrized: the solve uses all nine entries.
    pub kk: Matrix,

    /// Conditioning ratio of the gradient sample matrix
    ///
    /// Ratio of the minimum and maximum singular values. A value near zero
    /// indicates near-collinear gradient directions; diagnostic data, not an
    /// error.
    pub svd_ratio: f64,
}

/// Reconstructs the thermal conductivity tensor from gradient and flux measurements
///
/// Finds the 3×3 conductivity `K` which best maps the measured temperature
/// gradients to the measured heat fluxes:
///
/// ```text
/// qᵢ = -K · ∇Tᵢ    for all load steps i
/// ```
///
/// (the minus sign reflects the physical convention that the flux opposes the
/// gradient). Stacking the samples as the columns of 3×N matrices `Q` and `G`
/// and decomposing `G = U·S·Vᵀ` gives
///
/// ```text
/// K = -(Q · V · S⁻¹ · Uᵀ)
/// ```
///
/// With N = 3 independent gradient steps (the standard operating point) the
/// solve is exact; more samples yield the least-squares best fit through the
/// pseudo-inverse of `G`.
///
/// # Input
///
/// * `gradients` -- one temperature-gradient vector per load step (at least three steps)
/// * `fluxes` -- the corresponding heat-flux vectors, same number and order
pub fn reconstruct_conductivity(gradients: &[Tensor3], fluxes: &[Tensor3]) -> Result<ReconstructedConductivity, StrError> {
    let n = gradients.len();
    if fluxes.len() != n {
        return Err("gradient and flux sample counts must match");
    }
    if n < 3 {
        return Err("at least three gradient steps are required to determine the conductivity");
    }

    // stack the samples as columns
    let mut gg = Matrix::new(3, n);
    let mut qq = Matrix::new(3, n);
    for k in 0..n {
        let g = gradients[k].as_array();
        let q = fluxes[k].as_array();
        for i in 0..3 {
            gg.set(i, k, g[i]);
            qq.set(i, k, q[i]);
        }
    }

    // decompose G = U·S·Vᵀ
    let mut s = Vector::new(3);
    let mut u = Matrix::new(3, 3);
    let mut vt = Matrix::new(n, n);
    mat_svd(&mut s, &mut u, &mut vt, &mut gg)?;
    let (s_min, s_max) = min_max_singular_values(&s);
    if s_min == 0.0 {
        return Err("gradient sample matrix is singular");
    }
    let svd_ratio = s_min / s_max;

    // K = -(Q·V·S⁻¹·Uᵀ)  using the thin pseudo-inverse of G (n×3)
    let mut pseudo = Matrix::new(n, 3);
    for i in 0..n {
        for j in 0..3 {
            let mut sum = 0.0;
            for k in 0..3 {
                sum += vt.get(k, i) * u.get(j, k) / s[k];
            }
            pseudo.set(i, j, sum);
        }
    }
    let mut kk = Matrix::new(3, 3);
    mat_mat_mul(&mut kk, -1.0, &qq, &pseudo, 0.0)?;
    Ok(ReconstructedConductivity { kk, svd_ratio })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
