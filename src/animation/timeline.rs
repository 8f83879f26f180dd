//! Step and delay sequences of the bouncing motion
//!
//! A timeline only says *when* each displacement step happens; the positions
//! themselves come from [`crate::animation::displacement`]. Sequences depend
//! on nothing but the shape of the motion, so they are memoized per
//! `(kind, height)` for steps and `(kind, height, speed)` for delays and
//! shared between every marker using the same configuration.

use crate::animation::line::round_half_up;
use crate::prelude::HashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

/// Which animation a sequence belongs to. Each kind has its own cache namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionKind {
    /// Vertical bounce of the icon (and shadow)
    Move,
    /// Elastic contraction of the icon
    Resize,
}

impl MotionKind {
    pub fn steps_prefix(self) -> &'static str {
        match self {
            MotionKind::Move => "moveSteps_",
            MotionKind::Resize => "resizeSteps_",
        }
    }

    pub fn delays_prefix(self) -> &'static str {
        match self {
            MotionKind::Move => "moveDelays_",
            MotionKind::Resize => "resizeDelays_",
        }
    }
}

impl fmt::Display for MotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionKind::Move => f.write_str("move"),
            MotionKind::Resize => f.write_str("resize"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StepsKey {
    kind: MotionKind,
    height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DelaysKey {
    kind: MotionKind,
    height: u32,
    speed: u32,
}

/// Shared, read-only sequence handed out by the cache
pub type Sequence = Arc<[u32]>;

type SequenceTable<K> = RwLock<HashMap<K, Sequence>>;

static GLOBAL_TIMELINE: Lazy<Timeline> = Lazy::new(Timeline::new);

/// Memoizing calculator of step and delay sequences.
///
/// The cache only grows: entries are created on first request and never
/// evicted or invalidated. Concurrent first requests for the same key may
/// both compute the sequence, the first insert wins and both callers get
/// the same shared value back.
#[derive(Debug, Default)]
pub struct Timeline {
    steps: SequenceTable<StepsKey>,
    delays: SequenceTable<DelaysKey>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide timeline shared by every marker
    pub fn global() -> &'static Timeline {
        &GLOBAL_TIMELINE
    }

    /// Steps of one full bounce cycle: `[1, 2, ..., height, ..., 2, 1, 0]`.
    pub fn steps(&self, height: u32, kind: MotionKind) -> Sequence {
        let key = StepsKey { kind, height };
        lookup_or_insert(&self.steps, key, || {
            log::debug!("calculating {}{}", kind.steps_prefix(), height);
            calculate_steps(height)
        })
    }

    /// Cumulative delays (ms) paired with [`Timeline::steps`] of the same height.
    pub fn delays(&self, height: u32, speed: u32, kind: MotionKind) -> Sequence {
        let key = DelaysKey {
            kind,
            height,
            speed,
        };
        lookup_or_insert(&self.delays, key, || {
            log::debug!("calculating {}{}_{}", kind.delays_prefix(), height, speed);
            calculate_delays(height, speed)
        })
    }

    /// Number of cached sequences, steps and delays together
    pub fn len(&self) -> usize {
        let steps = self.steps.read().unwrap_or_else(PoisonError::into_inner).len();
        let delays = self.delays.read().unwrap_or_else(PoisonError::into_inner).len();
        steps + delays
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lookup_or_insert<K, F>(table: &SequenceTable<K>, key: K, compute: F) -> Sequence
where
    K: Eq + Hash + fmt::Debug,
    F: FnOnce() -> Vec<u32>,
{
    // Sequences are pure functions of their key, a poisoned table still holds valid data.
    if let Some(sequence) = table
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        log::trace!("timeline cache hit for {:?}", key);
        return Arc::clone(sequence);
    }

    let computed: Sequence = compute().into();
    let mut table = table.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(table.entry(key).or_insert(computed))
}

/// Builds the step sequence without touching any cache.
pub fn calculate_steps(height: u32) -> Vec<u32> {
    (1..=height).chain((0..height).rev()).collect()
}

/// Builds the delay sequence without touching any cache.
///
/// The time spent on step `i` of the way up is `speed / (height - i)`, so the
/// marker slows down approaching the apex, where a step takes `speed` ms.
/// The way down mirrors the way up. Delays are the running sum of those
/// per-step times, one per entry of [`calculate_steps`].
pub fn calculate_delays(height: u32, speed: u32) -> Vec<u32> {
    let h = height as usize;

    let mut deltas = vec![0u32; h + 1];
    if h > 0 {
        deltas[h] = speed;
    }
    for (i, delta) in deltas.iter_mut().enumerate().take(h).skip(1) {
        *delta = round_half_up(f64::from(speed) / (h - i) as f64) as u32;
    }

    let way_down: Vec<u32> = deltas[..h].iter().rev().copied().collect();
    deltas.extend(way_down);

    deltas
        .iter()
        .take(2 * h)
        .scan(0u32, |elapsed, delta| {
            *elapsed = elapsed.saturating_add(*delta);
            Some(*elapsed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_steps() {
        let timeline = Timeline::new();
        let steps = timeline.steps(5, MotionKind::Move);
        assert_eq!(&*steps, &[1, 2, 3, 4, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_zero_height_is_empty() {
        assert!(calculate_steps(0).is_empty());
        assert!(calculate_delays(0, 52).is_empty());
        assert_eq!(calculate_steps(1), vec![1, 0]);
        assert_eq!(calculate_delays(1, 52), vec![0, 52]);
    }

    #[test]
    fn test_calculate_delays() {
        let timeline = Timeline::new();
        let delays = timeline.delays(10, 52, MotionKind::Move);
        assert_eq!(
            &*delays,
            &[
                0, 6, 13, 20, 29, 39, 52, 69, 95, 147, 199, 251, 277, 294, 307, 317, 326, 333,
                340, 346
            ]
        );
    }

    #[test]
    fn test_delays_pair_with_steps() {
        for height in 0..40 {
            for speed in [0, 1, 7, 52, 300] {
                let steps = calculate_steps(height);
                let delays = calculate_delays(height, speed);

                assert_eq!(steps.len(), 2 * height as usize);
                assert_eq!(delays.len(), steps.len());
                assert!(delays.windows(2).all(|w| w[0] <= w[1]));
                if let Some(first) = delays.first() {
                    assert_eq!(*first, 0);
                }
            }
        }
    }

    #[test]
    fn test_steps_shape() {
        let steps = calculate_steps(12);
        let apex = steps.iter().position(|&s| s == 12).unwrap();

        assert_eq!(steps[0], 1);
        assert!(steps[..=apex].windows(2).all(|w| w[0] < w[1]));
        assert!(steps[apex..].windows(2).all(|w| w[0] > w[1]));
        assert_eq!(steps.last(), Some(&0));
    }

    #[test]
    fn test_repeated_calls_share_cached_sequence() {
        let timeline = Timeline::new();
        assert!(timeline.is_empty());

        let first = timeline.steps(15, MotionKind::Move);
        let second = timeline.steps(15, MotionKind::Move);
        assert!(Arc::ptr_eq(&first, &second));

        let first = timeline.delays(15, 52, MotionKind::Move);
        let second = timeline.delays(15, 52, MotionKind::Move);
        assert!(Arc::ptr_eq(&first, &second));

        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_kinds_do_not_collide() {
        let timeline = Timeline::new();

        let moving = timeline.steps(12, MotionKind::Move);
        let resizing = timeline.steps(12, MotionKind::Resize);
        assert_eq!(moving, resizing);
        assert!(!Arc::ptr_eq(&moving, &resizing));

        let slow = timeline.delays(12, 52, MotionKind::Resize);
        let fast = timeline.delays(12, 20, MotionKind::Resize);
        assert_ne!(slow, fast);

        assert_eq!(timeline.len(), 4);
    }

    #[test]
    fn test_concurrent_first_requests() {
        let timeline = Timeline::new();

        let results: Vec<Sequence> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| timeline.delays(20, 52, MotionKind::Move)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for sequence in &results {
            assert!(Arc::ptr_eq(sequence, &results[0]));
        }
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_prefixes_are_disjoint() {
        let prefixes = [
            MotionKind::Move.steps_prefix(),
            MotionKind::Move.delays_prefix(),
            MotionKind::Resize.steps_prefix(),
            MotionKind::Resize.delays_prefix(),
        ];
        for (i, a) in prefixes.iter().enumerate() {
            for b in &prefixes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
