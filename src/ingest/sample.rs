//! Seeded sample KOI table used before a file is loaded.

use crate::records::{Dataset, Disposition, Record, Schema, Value, KOI_DISPOSITION, KOI_PERIOD, KOI_PRAD};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Generate `count` synthetic Kepler candidates. The same seed always
/// yields the same table.
pub fn sample_dataset(count: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let records = (1..=count)
        .map(|id| {
            let disposition = Disposition::KNOWN[rng.gen_range(0..Disposition::KNOWN.len())].clone();
            Record::new([
                ("id", Value::Number(id as f64)),
                (KOI_DISPOSITION, Value::Category(disposition)),
                (KOI_PERIOD, Value::Number(round2(rng.gen_range(0.0..20.0)))),
                (KOI_PRAD, Value::Number(round2(rng.gen_range(0.5..15.5)))),
                ("koi_depth", Value::Number(rng.gen_range(100..1100) as f64)),
                ("koi_steff", Value::Number(rng.gen_range(4000..6000) as f64)),
            ])
        })
        .collect();
    Dataset::new(Schema::koi(), records, "sample")
}
