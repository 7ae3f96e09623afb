//! Light-curve viewer data: flux series and the threshold trade-off curve.

pub mod lightcurve;
pub mod threshold;

pub use lightcurve::{
    parse_light_curves, sample_curve, FluxPoint, LightCurve, FLUX_PREFIX, PLACEHOLDER_SPIKES, SAMPLE_FRAMES,
};
pub use threshold::{step_threshold, OperatingPoint, ThresholdCurve, DEFAULT_THRESHOLD, THRESHOLD_STEP};

use std::fs::File;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("No FLUX columns found")]
    NoFluxColumns,
}

pub fn load_light_curves<P: AsRef<Path>>(path: P) -> Result<Vec<LightCurve>, CurveError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CurveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_light_curves(file)
}
