//! Cumulative ("fast") entropy generation.
//!
//! Drawing from the OS for every value is the expensive part of bulk
//! wallet provisioning. [`CumulativeEntropy`] amortizes it: one secure draw
//! seeds a *run*, and each call issues the current run value and then
//! advances it by one. A run ends, and the next call reseeds from the
//! secure source, when either
//!
//! - `threshold` values have been issued since the last reseed, or
//! - the run value no longer encodes to exactly `bit_size / 8` bytes
//!   (its leading byte became zero, or it overflowed its width).
//!
//! Successive values within a run differ by exactly one. That relationship
//! is public; what stays unpredictable is the starting point of every run.
//!
//! ## Sequencing
//!
//! Every call, reseeding or not, finishes by advancing both the issued
//! count and the run value. A reseeding call returns the fresh draw `R`
//! itself, so the following call returns `R + 1`.
//!
//! ## Concurrency
//!
//! The run state sits behind a single mutex held for the whole
//! check, reseed, capture and advance sequence. Calls on one generator are
//! serialized; separate generators never interact.

use parking_lot::Mutex;
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::entropy::Entropy;
use crate::entropy::size::{byte_len, validate};
use crate::entropy::source::{OsRandom, RandomSource, generate_with};
use crate::error::{InvalidSizeError, Result};
use crate::primitives::U256;

/// Default number of values issued per run before a mandatory reseed (2¹¹).
pub const DEFAULT_THRESHOLD: u64 = 1 << 11;

// Upper bound on the up-front reservation made by `next_batch`.
const BATCH_RESERVE_LIMIT: usize = 4096;

/// Construction parameters for [`CumulativeEntropy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CumulativeParams {
    /// Size of every issued value, in bits.
    pub bit_size: usize,

    /// Values issued per run before a reseed is forced.
    ///
    /// Zero is accepted and reseeds on every call.
    pub threshold: u64,
}

impl CumulativeParams {
    pub fn new(bit_size: usize) -> Self {
        Self {
            bit_size,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub(crate) fn validate(&self) -> std::result::Result<(), InvalidSizeError> {
        validate(self.bit_size)
    }
}

impl Default for CumulativeParams {
    /// 256-bit values (24 words), reseeding every 2048 values.
    fn default() -> Self {
        Self::new(256)
    }
}

/// Why a call had to draw fresh entropy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reseed {
    Threshold,
    Shape,
}

impl Reseed {
    fn as_str(self) -> &'static str {
        match self {
            Reseed::Threshold => "threshold",
            Reseed::Shape => "shape",
        }
    }
}

struct RunState {
    /// Value the next non-reseeding call returns.
    value: U256,

    /// Values issued since the last reseed.
    issued: u64,

    /// Reseeds since construction; the initial seed is not counted.
    reseeds: u64,
}

impl Drop for RunState {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Thread-safe generator issuing many entropy values per secure draw.
///
/// ```no_run
/// use mnemonic_entropy::CumulativeEntropy;
///
/// let generator = CumulativeEntropy::new(128)?;
/// let first = generator.next()?;
/// assert_eq!(first.len(), 16);
/// # Ok::<(), mnemonic_entropy::EntropyError>(())
/// ```
pub struct CumulativeEntropy<S: RandomSource = OsRandom> {
    bit_size: usize,
    threshold: u64,
    source: S,
    state: Mutex<RunState>,
}

impl CumulativeEntropy<OsRandom> {
    /// Creates a generator with the default threshold, seeded from the OS.
    pub fn new(bit_size: usize) -> Result<Self> {
        Self::from_params(CumulativeParams::new(bit_size))
    }

    pub fn with_threshold(bit_size: usize, threshold: u64) -> Result<Self> {
        Self::from_params(CumulativeParams::new(bit_size).with_threshold(threshold))
    }

    pub fn from_params(params: CumulativeParams) -> Result<Self> {
        Self::with_source(params, OsRandom)
    }
}

impl<S: RandomSource> CumulativeEntropy<S> {
    /// Creates a generator drawing its seeds from `source`.
    ///
    /// The bit size is validated first; an invalid size returns before the
    /// source is touched. Otherwise exactly one draw seeds the first run.
    pub fn with_source(params: CumulativeParams, source: S) -> Result<Self> {
        params.validate()?;

        let seed = generate_with(&source, params.bit_size)?;

        Ok(Self {
            bit_size: params.bit_size,
            threshold: params.threshold,
            state: Mutex::new(RunState {
                value: seed_value(&seed),
                issued: 0,
                reseeds: 0,
            }),
            source,
        })
    }

    /// Issues the next entropy value.
    ///
    /// Returns the current run value, or a fresh secure draw if the run is
    /// exhausted. If that draw fails the error is returned and the generator
    /// state is left exactly as it was.
    pub fn next(&self) -> Result<Entropy> {
        let mut state = self.state.lock();

        self.issue(&mut state)
    }

    /// Issues `count` values under a single lock acquisition.
    ///
    /// The values are the same ones `count` back-to-back calls to
    /// [`next`](Self::next) would return. On error nothing is returned;
    /// values issued before the failing reseed are discarded.
    ///
    /// The batch grows as values are issued, so `count` only bounds the
    /// work done, never the size of an up-front allocation.
    pub fn next_batch(&self, count: usize) -> Result<Vec<Entropy>> {
        let mut state = self.state.lock();
        let mut batch = Vec::with_capacity(count.min(BATCH_RESERVE_LIMIT));

        for _ in 0..count {
            batch.push(self.issue(&mut state)?);
        }

        Ok(batch)
    }

    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Values issued since the last reseed.
    pub fn issued(&self) -> u64 {
        self.state.lock().issued
    }

    /// Reseeds performed since construction, excluding the initial seed.
    pub fn reseeds(&self) -> u64 {
        self.state.lock().reseeds
    }

    fn exhausted(&self, state: &RunState) -> Option<Reseed> {
        if state.value.byte_len() != byte_len(self.bit_size) {
            Some(Reseed::Shape)
        } else if state.issued >= self.threshold {
            Some(Reseed::Threshold)
        } else {
            None
        }
    }

    fn issue(&self, state: &mut RunState) -> Result<Entropy> {
        let entropy = match self.exhausted(state) {
            None => {
                trace!(bit_size = self.bit_size, issued = state.issued, "issuing run value");

                Entropy::from_vec(state.value.to_be_bytes_trimmed())
            }
            Some(reason) => {
                // Nothing in `state` changes until the draw has succeeded.
                let fresh = generate_with(&self.source, self.bit_size)?;

                debug!(
                    bit_size = self.bit_size,
                    issued = state.issued,
                    threshold = self.threshold,
                    reason = reason.as_str(),
                    "reseeded cumulative entropy run"
                );

                state.value.zeroize();
                state.value = seed_value(&fresh);
                state.issued = 0;
                state.reseeds += 1;

                fresh
            }
        };

        state.issued += 1;
        state.value.increment();

        Ok(entropy)
    }
}

impl<S: RandomSource> std::fmt::Debug for CumulativeEntropy<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CumulativeEntropy")
            .field("bit_size", &self.bit_size)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

// Validated sizes are at most 32 bytes, so the conversion always succeeds.
// A zero fallback would fail the shape check and force a reseed anyway.
fn seed_value(seed: &Entropy) -> U256 {
    U256::from_be_slice(seed.as_bytes()).unwrap_or(U256::ZERO)
}
