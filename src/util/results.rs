use crate::base::{Tensor3, Tensor6};
use crate::homogenization::{
    hill_average, reconstruct_conductivity, reconstruct_stiffness, reuss_average, voigt_average, ElasticConstants,
};
use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the complete homogenization results of an elasticity run
///
/// Collects the reconstructed stiffness tensor, its conditioning ratio, the
/// three averaging estimates, and the raw per-load-step measurements.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ElasticityResults {
    /// Stiffness tensor (6×6, symmetric) in engineering Voigt notation
    pub stiffness: Matrix,

    /// Conditioning ratio of the reconstruction
    pub svd_ratio: f64,

    /// Voigt average (upper bound)
    pub voigt: ElasticConstants,

    /// Reuss average (lower bound)
    pub reuss: ElasticConstants,

    /// Hill average (midpoint of Voigt and Reuss)
    pub hill: ElasticConstants,

    /// Strain measurements, one per load step
    pub strains: Vec<Tensor6>,

    /// Stress measurements, one per load step
    pub stresses: Vec<Tensor6>,
}

impl ElasticityResults {
    /// Runs the full homogenization pipeline on the given measurements
    pub fn new(strains: &[Tensor6], stresses: &[Tensor6]) -> Result<Self, StrError> {
        let fit = reconstruct_stiffness(strains, stresses)?;
        let voigt = voigt_average(&fit.cc)?;
        let reuss = reuss_average(&fit.cc)?;
        let hill = hill_average(&fit.cc)?;
        Ok(ElasticityResults {
            stiffness: fit.cc,
            svd_ratio: fit.svd_ratio,
            voigt,
            reuss,
            hill,
            strains: strains.to_vec(),
            stresses: stresses.to_vec(),
        })
    }

    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let results = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(results)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Holds the complete homogenization results of a thermal conductivity run
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConductivityResults {
    /// Thermal conductivity tensor (3×3)
    pub conductivity: Matrix,

    /// Conditioning ratio of the reconstruction
    pub svd_ratio: f64,

    /// Conductivity along each axis (diagonal entries of the tensor)
    pub axis_values: [f64; 3],

    /// Temperature-gradient measurements, one per load step
    pub gradients: Vec<Tensor3>,

    /// Heat-flux measurements, one per load step
    pub fluxes: Vec<Tensor3>,
}

impl ConductivityResults {
    /// Runs the conductivity reconstruction on the given measurements
    pub fn new(gradients: &[Tensor3], fluxes: &[Tensor3]) -> Result<Self, StrError> {
        let fit = reconstruct_conductivity(gradients, fluxes)?;
        let axis_values = [fit.kk.get(0, 0), fit.kk.get(1, 1), fit.kk.get(2, 2)];
        Ok(ConductivityResults {
            conductivity: fit.kk,
            svd_ratio: fit.svd_ratio,
            axis_values,
            gradients: gradients.to_vec(),
            fluxes: fluxes.to_vec(),
        })
    }

    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let results = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(results)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
