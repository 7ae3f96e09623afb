//! Flux time series parsed from Kepler-style CSV exports.

use super::CurveError;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Read;

/// Frames in a synthetic curve.
pub const SAMPLE_FRAMES: usize = 300;

/// Spike amplitude of the placeholder curve.
pub const PLACEHOLDER_SPIKES: f64 = 500.0;

pub const FLUX_PREFIX: &str = "FLUX.";

#[derive(Debug, Clone, PartialEq)]
pub struct FluxPoint {
    /// 1-based frame number taken from the column suffix.
    pub frame: usize,
    pub name: String,
    pub flux: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    pub star_id: String,
    pub label: Option<String>,
    pub points: Vec<FluxPoint>,
}

impl LightCurve {
    /// `(min, max)` flux, or `(0, 0)` for an empty curve.
    pub fn bounds(&self) -> (f64, f64) {
        if self.points.is_empty() {
            return (0.0, 0.0);
        }
        self.points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.flux), hi.max(p.flux)))
    }

    /// `(frame, flux)` pairs for plotting.
    pub fn series(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.frame as f64, p.flux)).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn flux_frame(header: &str) -> Option<usize> {
    header.trim().strip_prefix(FLUX_PREFIX)?.parse().ok()
}

/// Parse one curve per row.
///
/// Flux columns are ordered by their numeric suffix, so `FLUX.10` follows
/// `FLUX.9` wherever the columns sit in the header.
pub fn parse_light_curves<R: Read>(reader: R) -> Result<Vec<LightCurve>, CurveError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let label_column = headers.iter().position(|h| h.eq_ignore_ascii_case("LABEL"));
    let mut flux_columns: Vec<(usize, usize)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| flux_frame(h).map(|frame| (frame, i)))
        .collect();
    if flux_columns.is_empty() {
        return Err(CurveError::NoFluxColumns);
    }
    flux_columns.sort_by_key(|&(frame, _)| frame);
    debug!("curves: {} flux columns, label column {:?}", flux_columns.len(), label_column);

    let mut curves = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let points = flux_columns
            .iter()
            .filter_map(|&(frame, col)| {
                let flux = record.get(col)?.parse::<f64>().ok().filter(|v| v.is_finite())?;
                Some(FluxPoint {
                    frame,
                    name: format!("{FLUX_PREFIX}{frame}"),
                    flux,
                })
            })
            .collect();
        let label = label_column
            .and_then(|col| record.get(col))
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        curves.push(LightCurve {
            star_id: format!("Star {}", row + 1),
            label,
            points,
        });
    }
    info!("curves: parsed {} light curves", curves.len());
    Ok(curves)
}

/// Synthetic curve: uniform noise of amplitude 100 with a 5% chance per
/// frame of a spike up to `spike_scale`.
pub fn sample_curve(seed: u64, spike_scale: f64) -> LightCurve {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = (1..=SAMPLE_FRAMES)
        .map(|frame| {
            let noise = (rng.gen::<f64>() - 0.5) * 100.0;
            let spike = if rng.gen::<f64>() < 0.05 {
                (rng.gen::<f64>() - 0.5) * spike_scale
            } else {
                0.0
            };
            FluxPoint {
                frame,
                name: format!("{FLUX_PREFIX}{frame}"),
                flux: noise + spike,
            }
        })
        .collect();
    LightCurve {
        star_id: "Example flux variation".to_string(),
        label: None,
        points,
    }
}
