use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use polarity_model::ReviewRecord;

pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Sampling controls for [`sample_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    /// Number of records to keep.
    pub sample_size: usize,
    /// Fixed RNG seed for reproducible runs; `None` draws OS randomness.
    pub seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

/// Uniform random subset of `records`, re-indexed contiguously from zero.
///
/// The requested size clamps to the record count, so a small dataset passes
/// through whole (in shuffled order) rather than failing.
pub fn sample_records(records: Vec<ReviewRecord>, options: &SampleOptions) -> Vec<ReviewRecord> {
    let amount = options.sample_size.min(records.len());
    if amount < options.sample_size {
        debug!(
            requested = options.sample_size,
            available = records.len(),
            "sample size clamped to dataset"
        );
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut selected = records;
    selected.shuffle(&mut rng);
    selected.truncate(amount);
    for (index, record) in selected.iter_mut().enumerate() {
        record.index = index;
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<ReviewRecord> {
        (0..count)
            .map(|index| ReviewRecord::new(index, format!("review {index}")))
            .collect()
    }

    #[test]
    fn clamps_to_small_datasets() {
        let options = SampleOptions {
            sample_size: 100,
            seed: Some(7),
        };
        let sampled = sample_records(records(3), &options);
        assert_eq!(sampled.len(), 3);
    }

    #[test]
    fn takes_exact_size_from_large_datasets() {
        let options = SampleOptions {
            sample_size: 10,
            seed: Some(7),
        };
        let sampled = sample_records(records(500), &options);
        assert_eq!(sampled.len(), 10);
        // no duplicate source rows
        let mut texts: Vec<&str> = sampled.iter().map(|r| r.text.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 10);
    }

    #[test]
    fn reindexes_contiguously_from_zero() {
        let options = SampleOptions {
            sample_size: 5,
            seed: Some(42),
        };
        let sampled = sample_records(records(50), &options);
        let indexes: Vec<usize> = sampled.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let options = SampleOptions {
            sample_size: 20,
            seed: Some(1234),
        };
        let first = sample_records(records(200), &options);
        let second = sample_records(records(200), &options);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let base = records(200);
        let first = sample_records(
            base.clone(),
            &SampleOptions {
                sample_size: 20,
                seed: Some(1),
            },
        );
        let second = sample_records(
            base,
            &SampleOptions {
                sample_size: 20,
                seed: Some(2),
            },
        );
        assert_ne!(first, second);
    }

    #[test]
    fn zero_sample_size_yields_empty() {
        let options = SampleOptions {
            sample_size: 0,
            seed: Some(7),
        };
        assert!(sample_records(records(10), &options).is_empty());
    }
}
