use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::profiles::{BotProfile, ProfilePool};

use super::plan::ENDPOINT_PATHS;

/// Where a run's random choices come from.
///
/// A seeded source makes the profile, path and jitter picked for every
/// request id reproducible, independent of completion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionSource {
    #[default]
    Entropy,
    Seeded(u64),
}

impl SelectionSource {
    #[must_use]
    pub const fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => SelectionSource::Seeded(seed),
            None => SelectionSource::Entropy,
        }
    }

    pub(crate) fn master(self) -> StdRng {
        match self {
            SelectionSource::Entropy => StdRng::from_entropy(),
            SelectionSource::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Uniform sampler over a pool known to be non-empty.
#[derive(Debug)]
pub(crate) struct ProfileSampler {
    head: BotProfile,
    tail: Vec<BotProfile>,
}

impl ProfileSampler {
    pub(crate) fn new(pool: &ProfilePool) -> Option<Self> {
        let (head, tail) = pool.as_slice().split_first()?;
        Some(Self {
            head: head.clone(),
            tail: tail.to_vec(),
        })
    }

    pub(crate) fn pick<R>(&self, rng: &mut R) -> &BotProfile
    where
        R: Rng + ?Sized,
    {
        let index = rng.gen_range(0..=self.tail.len());
        index
            .checked_sub(1)
            .and_then(|tail_index| self.tail.get(tail_index))
            .unwrap_or(&self.head)
    }
}

pub(crate) fn pick_path<R>(rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    ENDPOINT_PATHS.choose(rng).copied().unwrap_or("/")
}

/// `delay` plus a uniform jitter of up to half of `delay`.
pub(crate) fn pacing_delay<R>(delay: Duration, rng: &mut R) -> Duration
where
    R: Rng + ?Sized,
{
    if delay.is_zero() {
        return Duration::ZERO;
    }
    let max_jitter = delay.checked_div(2).unwrap_or(Duration::ZERO);
    let max_jitter_nanos = u64::try_from(max_jitter.as_nanos()).unwrap_or(u64::MAX);
    let jitter_nanos = rng.gen_range(0..=max_jitter_nanos);
    delay.saturating_add(Duration::from_nanos(jitter_nanos))
}
