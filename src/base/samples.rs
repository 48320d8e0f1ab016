use crate::base::{Tensor3, Tensor6};
use crate::StrError;
use russell_lab::{mat_vec_mul, Matrix, Vector};

/// Generates the six canonical independent strain load steps
///
/// Returns one tensor per load step: three uniaxial perturbations along x, y,
/// and z with amplitude `normal`, followed by three pure-shear perturbations
/// in the yz, xz, and xy planes with amplitude `shear`. Together the steps
/// span the space of deformation modes, making the stiffness reconstruction
/// exactly determined.
///
/// In the driving FE simulation, `normal` and `shear` correspond to the small
/// tensile and shear displacements applied to the faces of the RVE cube.
pub fn unit_strain_steps(normal: f64, shear: f64) -> Vec<Tensor6> {
    vec![
        Tensor6::new(normal, 0.0, 0.0, 0.0, 0.0, 0.0),
        Tensor6::new(0.0, normal, 0.0, 0.0, 0.0, 0.0),
        Tensor6::new(0.0, 0.0, normal, 0.0, 0.0, 0.0),
        Tensor6::new(0.0, 0.0, 0.0, shear, 0.0, 0.0),
        Tensor6::new(0.0, 0.0, 0.0, 0.0, shear, 0.0),
        Tensor6::new(0.0, 0.0, 0.0, 0.0, 0.0, shear),
    ]
}

/// Generates the three axis-aligned temperature-gradient load steps
pub fn unit_gradient_steps(amplitude: f64) -> Vec<Tensor3> {
    vec![
        Tensor3::new(amplitude, 0.0, 0.0),
        Tensor3::new(0.0, amplitude, 0.0),
        Tensor3::new(0.0, 0.0, amplitude),
    ]
}

/// Builds the 6×6 stiffness matrix of an isotropic material
///
/// ```text
/// λ = E ν / ((1 + ν) (1 - 2 ν))    μ = E / (2 (1 + ν))
/// ```
///
/// The returned matrix uses the engineering shear convention; i.e., the shear
/// diagonal entries equal `μ` so that `σxy = μ γxy`.
///
/// # Input
///
/// * `young` -- Young's modulus E (must be positive)
/// * `poisson` -- Poisson's ratio ν (must satisfy -1 < ν < ½)
pub fn isotropic_stiffness(young: f64, poisson: f64) -> Result<Matrix, StrError> {
    if young <= 0.0 {
        return Err("young modulus must be positive");
    }
    if poisson <= -1.0 || poisson >= 0.5 {
        return Err("poisson ratio must satisfy -1 < ν < ½");
    }
    let lambda = young * poisson / ((1.0 + poisson) * (1.0 - 2.0 * poisson));
    let mu = young / (2.0 * (1.0 + poisson));
    let mut cc = Matrix::new(6, 6);
    for i in 0..3 {
        for j in 0..3 {
            cc.set(i, j, if i == j { lambda + 2.0 * mu } else { lambda });
        }
        cc.set(i + 3, i + 3, mu);
    }
    Ok(cc)
}

/// Applies a stiffness matrix to a strain path (σᵢ = C · εᵢ)
pub fn stresses_from_strains(cc: &Matrix, strains: &[Tensor6]) -> Result<Vec<Tensor6>, StrError> {
    if cc.dims() != (6, 6) {
        return Err("stiffness matrix must be 6x6");
    }
    let mut stresses = Vec::with_capacity(strains.len());
    let mut sig = Vector::new(6);
    for strain in strains {
        let eps = Vector::from(&strain.as_array());
        mat_vec_mul(&mut sig, 1.0, cc, &eps)?;
        stresses.push(Tensor6::new(sig[0], sig[1], sig[2], sig[3], sig[4], sig[5]));
    }
    Ok(stresses)
}

/// Applies a conductivity matrix to a gradient path (qᵢ = -K · ∇Tᵢ)
///
/// The minus sign reflects the physical convention that the heat flux opposes
/// the temperature gradient.
pub fn fluxes_from_gradients(kk: &Matrix, gradients: &[Tensor3]) -> Result<Vec<Tensor3>, StrError> {
    if kk.dims() != (3, 3) {
        return Err("conductivity matrix must be 3x3");
    }
    let mut fluxes = Vec::with_capacity(gradients.len());
    let mut q = Vector::new(3);
    for gradient in gradients {
        let g = Vector::from(&gradient.as_array());
        mat_vec_mul(&mut q, -1.0, kk, &g)?;
        fluxes.push(Tensor3::new(q[0], q[1], q[2]));
    }
    Ok(fluxes)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{
        fluxes_from_gradients, isotropic_stiffness, stresses_from_strains, unit_gradient_steps, unit_strain_steps,
    };
    use russell_lab::{mat_approx_eq, Matrix};

    #[test]
    fn unit_strain_steps_works() {
        let steps = unit_strain_steps(0.001, 0.002);
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].as_array(), [0.001, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(steps[1].as_array(), [0.0, 0.001, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(steps[2].as_array(), [0.0, 0.0, 0.001, 0.0, 0.0, 0.0]);
        assert_eq!(steps[3].as_array(), [0.0, 0.0, 0.0, 0.002, 0.0, 0.0]);
        assert_eq!(steps[4].as_array(), [0.0, 0.0, 0.0, 0.0, 0.002, 0.0]);
        assert_eq!(steps[5].as_array(), [0.0, 0.0, 0.0, 0.0, 0.0, 0.002]);
    }

    #[test]
    fn unit_gradient_steps_works() {
        let steps = unit_gradient_steps(1.0);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].as_array(), [1.0, 0.0, 0.0]);
        assert_eq!(steps[1].as_array(), [0.0, 1.0, 0.0]);
        assert_eq!(steps[2].as_array(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn isotropic_stiffness_works() {
        // E = 1500 and ν = 0.25 give λ = μ = 600
        let cc = isotropic_stiffness(1500.0, 0.25).unwrap();
        let correct = &[
            [1800.0, 600.0, 600.0, 0.0, 0.0, 0.0],
            [600.0, 1800.0, 600.0, 0.0, 0.0, 0.0],
            [600.0, 600.0, 1800.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 600.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 600.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0, 600.0],
        ];
        mat_approx_eq(&cc, correct, 1e-12);
    }

    #[test]
    fn isotropic_stiffness_captures_wrong_input() {
        assert_eq!(isotropic_stiffness(0.0, 0.25).err(), Some("young modulus must be positive"));
        assert_eq!(
            isotropic_stiffness(1500.0, 0.5).err(),
            Some("poisson ratio must satisfy -1 < ν < ½")
        );
        assert_eq!(
            isotropic_stiffness(1500.0, -1.0).err(),
            Some("poisson ratio must satisfy -1 < ν < ½")
        );
    }

    #[test]
    fn stresses_from_strains_works() {
        let cc = isotropic_stiffness(1500.0, 0.25).unwrap();
        let strains = unit_strain_steps(0.001, 0.001);
        let stresses = stresses_from_strains(&cc, &strains).unwrap();
        assert_eq!(stresses.len(), 6);
        // uniaxial strain: σxx = (λ + 2μ) εxx and σyy = σzz = λ εxx
        assert_eq!(stresses[0].as_array(), [1.8, 0.6, 0.6, 0.0, 0.0, 0.0]);
        // pure shear: σyz = μ γyz
        assert_eq!(stresses[3].as_array(), [0.0, 0.0, 0.0, 0.6, 0.0, 0.0]);
        let wrong = Matrix::new(3, 3);
        assert_eq!(
            stresses_from_strains(&wrong, &strains).err(),
            Some("stiffness matrix must be 6x6")
        );
    }

    #[test]
    fn fluxes_from_gradients_works() {
        let kk = Matrix::diagonal(&[10.0, 20.0, 30.0]);
        let gradients = unit_gradient_steps(1.0);
        let fluxes = fluxes_from_gradients(&kk, &gradients).unwrap();
        assert_eq!(fluxes[0].as_array(), [-10.0, 0.0, 0.0]);
        assert_eq!(fluxes[1].as_array(), [0.0, -20.0, 0.0]);
        assert_eq!(fluxes[2].as_array(), [0.0, 0.0, -30.0]);
        let wrong = Matrix::new(6, 6);
        assert_eq!(
            fluxes_from_gradients(&wrong, &gradients).err(),
            Some("conductivity matrix must be 3x3")
        );
    }
}
