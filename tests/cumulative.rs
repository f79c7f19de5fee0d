use std::collections::HashSet;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;

use mnemonic_entropy::primitives::U256;
use mnemonic_entropy::{
    CumulativeEntropy, CumulativeParams, DEFAULT_THRESHOLD, Entropy, RandomSource,
    RandomSourceError,
};

type Pattern = Box<dyn Fn(u64, &mut [u8]) + Send + Sync>;

/// Instrumented source: counts draws, can be switched off, and fills each
/// draw through a caller-provided pattern keyed by the draw number.
struct ScriptedSource {
    draws: AtomicU64,
    offline: AtomicBool,
    pattern: Pattern,
}

impl ScriptedSource {
    fn new(pattern: impl Fn(u64, &mut [u8]) + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            draws: AtomicU64::new(0),
            offline: AtomicBool::new(false),
            pattern: Box::new(pattern),
        })
    }

    /// Distinct, full-width seeds: `80 || draw number || 00..`.
    fn counting() -> Arc<Self> {
        Self::new(|n, dest| {
            dest.fill(0);
            dest[0] = 0x80;
            dest[1..9].copy_from_slice(&n.to_be_bytes());
        })
    }

    fn draws(&self) -> u64 {
        self.draws.load(Ordering::SeqCst)
    }

    fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

impl RandomSource for ScriptedSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(io::Error::other("entropy pool unavailable").into());
        }

        let n = self.draws.fetch_add(1, Ordering::SeqCst) + 1;
        (self.pattern)(n, dest);

        Ok(())
    }
}

fn params(bit_size: usize, threshold: u64) -> CumulativeParams {
    CumulativeParams::new(bit_size).with_threshold(threshold)
}

fn value_of(entropy: &Entropy) -> U256 {
    U256::from_be_slice(entropy.as_bytes()).unwrap()
}

fn successor(entropy: &Entropy) -> U256 {
    let mut value = value_of(entropy);
    value.increment();
    value
}

fn seed_bytes(bit_size: usize, n: u64) -> Vec<u8> {
    let mut out = vec![0u8; bit_size / 8];
    out[0] = 0x80;
    out[1..9].copy_from_slice(&n.to_be_bytes());
    out
}

#[test]
fn default_threshold_is_2048() {
    assert_eq!(DEFAULT_THRESHOLD, 2048);
    assert_eq!(CumulativeParams::default().threshold, 2048);
    assert_eq!(CumulativeParams::default().bit_size, 256);
}

#[test]
fn os_backed_generator_issues_full_width_values() {
    let generator = CumulativeEntropy::new(256).unwrap();

    for _ in 0..16 {
        assert_eq!(generator.next().unwrap().len(), 32);
    }

    assert_eq!(generator.threshold(), DEFAULT_THRESHOLD);
    assert_eq!(generator.bit_size(), 256);
}

#[test]
fn invalid_sizes_are_rejected_without_drawing() {
    let source = ScriptedSource::counting();

    for bits in [0, 100, 129, 300] {
        let err = CumulativeEntropy::with_source(params(bits, 3), source.clone()).unwrap_err();
        assert!(err.is_invalid_size());
    }

    assert!(CumulativeEntropy::with_threshold(96, 10).unwrap_err().is_invalid_size());
    assert_eq!(source.draws(), 0);
}

#[test]
fn threshold_three_reseeds_on_the_fourth_call() {
    let source = ScriptedSource::counting();

    let generator = CumulativeEntropy::with_source(params(128, 3), source.clone()).unwrap();
    assert_eq!(source.draws(), 1);

    for _ in 0..3 {
        generator.next().unwrap();
    }
    assert_eq!(source.draws(), 1);

    generator.next().unwrap();
    assert_eq!(source.draws(), 2);
    assert_eq!(generator.reseeds(), 1);
}

#[test]
fn first_value_is_the_seed_and_run_values_step_by_one() {
    let source = ScriptedSource::counting();
    let generator = CumulativeEntropy::with_source(params(128, 16), source).unwrap();

    let values: Vec<Entropy> = (0..16).map(|_| generator.next().unwrap()).collect();

    assert_eq!(values[0].as_bytes(), seed_bytes(128, 1).as_slice());

    for pair in values.windows(2) {
        assert_eq!(successor(&pair[0]), value_of(&pair[1]));
    }
}

#[test]
fn reseed_returns_fresh_value_then_its_successor() {
    let source = ScriptedSource::counting();
    let generator = CumulativeEntropy::with_source(params(160, 2), source.clone()).unwrap();

    generator.next().unwrap();
    generator.next().unwrap();

    let fresh = generator.next().unwrap();
    assert_eq!(fresh.as_bytes(), seed_bytes(160, 2).as_slice());

    let after = generator.next().unwrap();
    assert_eq!(successor(&fresh), value_of(&after));
    assert_eq!(source.draws(), 2);
}

#[test]
fn counter_resets_after_reseed() {
    let source = ScriptedSource::counting();
    let generator = CumulativeEntropy::with_source(params(128, 5), source.clone()).unwrap();

    // Exhaust the first run and trigger one reseed.
    for _ in 0..6 {
        generator.next().unwrap();
    }
    assert_eq!(source.draws(), 2);
    assert_eq!(generator.issued(), 1);

    // The reseeding call counts as the first of the new run.
    for _ in 0..4 {
        generator.next().unwrap();
    }
    assert_eq!(source.draws(), 2);
    assert_eq!(generator.issued(), 5);

    generator.next().unwrap();
    assert_eq!(source.draws(), 3);
}

#[test]
fn zero_threshold_reseeds_every_call() {
    let source = ScriptedSource::counting();
    let generator = CumulativeEntropy::with_source(params(128, 0), source.clone()).unwrap();

    for n in 2..=6 {
        let entropy = generator.next().unwrap();
        assert_eq!(entropy.as_bytes(), seed_bytes(128, n).as_slice());
    }

    assert_eq!(source.draws(), 6);
}

#[test]
fn leading_zero_seed_forces_reseed() {
    let source = ScriptedSource::new(|n, dest| {
        dest.fill(0x11);
        dest[0] = if n == 1 { 0x00 } else { 0x22 };
    });
    let generator = CumulativeEntropy::with_source(params(192, 100), source.clone()).unwrap();

    let entropy = generator.next().unwrap();

    assert_eq!(source.draws(), 2);
    assert_eq!(entropy.len(), 24);
    assert_eq!(entropy.as_bytes()[0], 0x22);
    assert_eq!(generator.reseeds(), 1);
}

#[test]
fn width_overflow_forces_reseed() {
    let source = ScriptedSource::new(|n, dest| dest.fill(if n == 1 { 0xFF } else { 0x5A }));
    let generator = CumulativeEntropy::with_source(params(128, 100), source.clone()).unwrap();

    assert_eq!(generator.next().unwrap().as_bytes(), &[0xFFu8; 16][..]);

    // 2^128 needs 17 bytes.
    let next = generator.next().unwrap();
    assert_eq!(next.as_bytes(), &[0x5Au8; 16][..]);
    assert_eq!(source.draws(), 2);
}

#[test]
fn full_width_wraparound_forces_reseed() {
    let source = ScriptedSource::new(|n, dest| dest.fill(if n == 1 { 0xFF } else { 0x33 }));
    let generator = CumulativeEntropy::with_source(params(256, 100), source.clone()).unwrap();

    assert_eq!(generator.next().unwrap().as_bytes(), &[0xFFu8; 32][..]);
    assert_eq!(generator.next().unwrap().as_bytes(), &[0x33u8; 32][..]);
}

#[test]
fn failed_reseed_leaves_state_untouched() {
    let source = ScriptedSource::counting();
    let generator = CumulativeEntropy::with_source(params(128, 2), source.clone()).unwrap();

    let first = generator.next().unwrap();
    let second = generator.next().unwrap();

    source.set_offline(true);
    let err = generator.next().unwrap_err();
    assert!(err.is_random_source());
    assert_eq!(generator.issued(), 2);
    assert_eq!(generator.reseeds(), 0);

    source.set_offline(false);
    let fresh = generator.next().unwrap();
    assert_eq!(fresh.as_bytes(), seed_bytes(128, 2).as_slice());
    assert_ne!(fresh, first);
    assert_ne!(fresh, second);
    assert_eq!(generator.reseeds(), 1);
}

#[test]
fn failing_initial_draw_fails_construction() {
    let source = ScriptedSource::counting();
    source.set_offline(true);

    let err = CumulativeEntropy::with_source(params(256, 8), source).unwrap_err();

    assert!(err.is_random_source());
}

#[test]
fn batch_matches_sequential_calls() {
    let a = CumulativeEntropy::with_source(params(224, 4), ScriptedSource::counting()).unwrap();
    let b = CumulativeEntropy::with_source(params(224, 4), ScriptedSource::counting()).unwrap();

    let batch = a.next_batch(10).unwrap();
    let sequential: Vec<Entropy> = (0..10).map(|_| b.next().unwrap()).collect();

    assert_eq!(batch, sequential);
    assert_eq!(a.reseeds(), 2);
}

#[test]
fn huge_batch_count_does_not_reserve_up_front() {
    let source = ScriptedSource::counting();
    let generator = CumulativeEntropy::with_source(params(128, 0), source.clone()).unwrap();

    // Every call needs a reseed, so the first item fails once the source
    // is offline and the loop stops before issuing anything.
    source.set_offline(true);
    let err = generator.next_batch(usize::MAX).unwrap_err();

    assert!(err.is_random_source());
    assert_eq!(generator.reseeds(), 0);
}

#[test]
fn empty_batch_issues_nothing() {
    let source = ScriptedSource::counting();
    let generator = CumulativeEntropy::with_source(params(128, 4), source.clone()).unwrap();

    assert!(generator.next_batch(0).unwrap().is_empty());
    assert_eq!(generator.issued(), 0);
    assert_eq!(source.draws(), 1);
}

#[test]
fn concurrent_callers_get_distinct_values() {
    let source = ScriptedSource::counting();
    let generator =
        Arc::new(CumulativeEntropy::with_source(params(128, 50), source.clone()).unwrap());

    let handles: Vec<_> = (0..200)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || generator.next().unwrap().into_bytes())
        })
        .collect();

    let values: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(values.iter().all(|v| v.len() == 16));

    let distinct: HashSet<&Vec<u8>> = values.iter().collect();
    assert_eq!(distinct.len(), 200);

    assert_eq!(generator.reseeds(), 3);
    assert_eq!(source.draws(), 4);
    assert_eq!(generator.issued(), 50);
}
