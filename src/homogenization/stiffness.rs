use crate::base::Tensor6;
use crate::StrError;
use russell_lab::{mat_mat_mul, mat_svd, Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

/// Number of independent entries of a symmetric 6×6 stiffness matrix
const N_UNKNOWNS: usize = 21;

/// Holds a stiffness tensor reconstructed from load-step measurements
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReconstructedStiffness {
    /// Stiffness tensor (6×6, symmetric) in engineering Voigt notation
    pub cc: Matrix,

    /// Conditioning ratio of the least-squares system
    ///
    /// Ratio of the minimum and maximum singular values of the coefficient
    /// matrix. A value near zero indicates near-collinear or redundant load
    /// directions; the reconstruction is then numerically unreliable and the
    /// caller should reject it. A low ratio is diagnostic data, not an error.
    pub svd_ratio: f64,
}

/// Reconstructs the stiffness tensor from strain and stress measurements
///
/// Finds the symmetric 6×6 stiffness `C` which best maps the measured strains
/// to the measured stresses:
///
/// ```text
/// σᵢ = C · εᵢ    for all load steps i
/// ```
///
/// The symmetry of `C` leaves 21 unknown entries (the upper triangle). Writing
/// the component equations of every load step and collecting the coefficients
/// of each unknown yields the linear system
///
/// ```text
/// s = E · c
/// ```
///
/// where `s` (6N) stacks the stress components of all N samples, `E` (6N×21)
/// stacks one 6×21 block of strain values per sample, and `c` (21) holds the
/// unknown entries of `C`. The system is solved through the singular value
/// decomposition `E = U·S·Vᵀ`:
///
/// ```text
/// c = V · S⁻¹ · Uᵀ · s
/// ```
///
/// With N = 6 independent load steps (the standard operating point) the solve
/// is exact; more samples yield the least-squares best fit. The solved upper
/// triangle is mirrored into the lower one, thus the returned matrix is
/// exactly symmetric by construction.
///
/// # Input
///
/// * `strains` -- one strain tensor per load step (at least four steps)
/// * `stresses` -- the corresponding stress tensors, same number and order
pub fn reconstruct_stiffness(strains: &[Tensor6], stresses: &[Tensor6]) -> Result<ReconstructedStiffness, StrError> {
    let n = strains.len();
    if stresses.len() != n {
        return Err("strain and stress sample counts must match");
    }
    if 6 * n < N_UNKNOWNS {
        return Err("at least four load steps are required to determine the stiffness");
    }
    let m = 6 * n;

    // stack the stress components into the right-hand side vector
    let mut sig = Vector::new(m);
    for (k, stress) in stresses.iter().enumerate() {
        let components = stress.as_array();
        for i in 0..6 {
            sig[6 * k + i] = components[i];
        }
    }

    // build the coefficient matrix from one 6×21 block per strain sample;
    // row r of a block encodes  σr = Σj C[r][j] εj  with C[r][j] = c[tri(r,j)]
    let mut ee = Matrix::new(m, N_UNKNOWNS);
    for (k, strain) in strains.iter().enumerate() {
        let eps = strain.as_array();
        for r in 0..6 {
            for j in 0..6 {
                ee.set(6 * k + r, upper_triangle_index(r, j), eps[j]);
            }
        }
    }

    // decompose E = U·S·Vᵀ
    let mut s = Vector::new(N_UNKNOWNS);
    let mut u = Matrix::new(m, m);
    let mut vt = Matrix::new(N_UNKNOWNS, N_UNKNOWNS);
    mat_svd(&mut s, &mut u, &mut vt, &mut ee)?;
    let (s_min, s_max) = min_max_singular_values(&s);
    if s_min == 0.0 {
        return Err("strain sample matrix is singular");
    }
    let svd_ratio = s_min / s_max;

    // c = V·S⁻¹·Uᵀ·s  (only the first 21 entries of Uᵀ·s matter)
    let mut ut_sig = Vector::new(N_UNKNOWNS);
    for i in 0..N_UNKNOWNS {
        let mut sum = 0.0;
        for k in 0..m {
            sum += u.get(k, i) * sig[k];
        }
        ut_sig[i] = sum;
    }
    let mut c_vals = Vector::new(N_UNKNOWNS);
    for j in 0..N_UNKNOWNS {
        let mut sum = 0.0;
        for i in 0..N_UNKNOWNS {
            sum += vt.get(i, j) * ut_sig[i] / s[i];
        }
        c_vals[j] = sum;
    }

    // unpack the upper triangle and mirror it to enforce symmetry
    let mut cc = Matrix::new(6, 6);
    for i in 0..6 {
        for j in i..6 {
            let value = c_vals[upper_triangle_index(i, j)];
            cc.set(i, j, value);
            cc.set(j, i, value);
        }
    }
    Ok(ReconstructedStiffness { cc, svd_ratio })
}

/// Reconstructs the stiffness tensor by the direct column-stacked solve
///
/// Alternative to [`reconstruct_stiffness`] that stacks the samples as the
/// columns of 6×6 matrices and inverts the strain matrix through its singular
/// value decomposition:
///
/// ```text
/// Σ = C · E    ⇒    C = Σ · V · S⁻¹ · Uᵀ
/// ```
///
/// This formulation does not exploit the symmetry of `C`; the result is
/// symmetrized afterwards via `(C + Cᵀ)/2`. It requires exactly six load
/// steps. With `mandel_scaling` enabled, the solve runs in the Mandel basis:
/// shear stresses are scaled by √2, engineering shear strains by 1/√2, and
/// the resulting shear rows and columns are scaled back by 1/√2 each. This
/// weighs normal and shear equations consistently in the least-squares norm
/// and leaves exact data unchanged.
pub fn reconstruct_stiffness_direct(
    strains: &[Tensor6],
    stresses: &[Tensor6],
    mandel_scaling: bool,
) -> Result<ReconstructedStiffness, StrError> {
    if stresses.len() != strains.len() {
        return Err("strain and stress sample counts must match");
    }
    if strains.len() != 6 {
        return Err("the direct solve requires exactly six load steps");
    }

    // stack the samples as columns, optionally moving to the Mandel basis
    // (σ shear components scale by √2, engineering γ components by 1/√2)
    let mut eps = Matrix::new(6, 6);
    let mut sig = Matrix::new(6, 6);
    for k in 0..6 {
        let e = strains[k].as_array();
        let f = stresses[k].as_array();
        for i in 0..6 {
            if mandel_scaling && i >= 3 {
                eps.set(i, k, e[i] / SQRT_2);
                sig.set(i, k, f[i] * SQRT_2);
            } else {
                eps.set(i, k, e[i]);
                sig.set(i, k, f[i]);
            }
        }
    }

    // decompose E = U·S·Vᵀ
    let mut s = Vector::new(6);
    let mut u = Matrix::new(6, 6);
    let mut vt = Matrix::new(6, 6);
    mat_svd(&mut s, &mut u, &mut vt, &mut eps)?;
    let (s_min, s_max) = min_max_singular_values(&s);
    if s_min == 0.0 {
        return Err("strain sample matrix is singular");
    }
    let svd_ratio = s_min / s_max;

    // C = Σ·V·S⁻¹·Uᵀ
    let mut pseudo = Matrix::new(6, 6); // V·S⁻¹·Uᵀ
    for i in 0..6 {
        for j in 0..6 {
            let mut sum = 0.0;
            for k in 0..6 {
                sum += vt.get(k, i) * u.get(j, k) / s[k];
            }
            pseudo.set(i, j, sum);
        }
    }
    let mut cc = Matrix::new(6, 6);
    mat_mat_mul(&mut cc, 1.0, &sig, &pseudo, 0.0)?;

    // undo the Mandel scaling of the shear rows and columns
    if mandel_scaling {
        for i in 0..6 {
            for j in 0..6 {
                let mut value = cc.get(i, j);
                if i >= 3 {
                    value /= SQRT_2;
                }
                if j >= 3 {
                    value /= SQRT_2;
                }
                cc.set(i, j, value);
            }
        }
    }

    // symmetrize
    for i in 0..6 {
        for j in (i + 1)..6 {
            let value = (cc.get(i, j) + cc.get(j, i)) / 2.0;
            cc.set(i, j, value);
            cc.set(j, i, value);
        }
    }
    Ok(ReconstructedStiffness { cc, svd_ratio })
}

/// Returns the position of entry (i,j) in the row-major upper triangle of a 6×6 matrix
fn upper_triangle_index(i: usize, j: usize) -> usize {
    let (a, b) = if i <= j { (i, j) } else { (j, i) };
    a * 6 - a * (a + 1) / 2 + b
}

/// Returns the minimum and maximum singular values
pub(crate) fn min_max_singular_values(s: &Vector) -> (f64, f64) {
    let mut s_min = f64::MAX;
    let mut s_max = 0.0;
    for i in 0..s.dim() {
        s_min = f64::min(s_min, s[i]);
        s_max = f64::max(s_max, s[i]);
    }
    (s_min, s_max)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
