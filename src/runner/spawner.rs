//! Randomized-interval obstacle scheduling.

use rand::Rng;

/// Frame counter gating obstacle creation.
///
/// A threshold is drawn once per spawn cycle, uniform in `[min, max]`. The
/// spawner fires on the frame where the counter reaches it, so the gap
/// between two spawns is exactly the drawn threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    /// Frames since the last spawn (or since the session began).
    pub counter: u32,
    /// Frame count at which the next obstacle appears.
    pub threshold: u32,
    min_distance: u32,
    max_distance: u32,
}

impl Spawner {
    /// The range must be non-empty; `GameConfig::validate` enforces this
    /// for every config the game accepts.
    pub fn new<R: Rng>(min_distance: u32, max_distance: u32, rng: &mut R) -> Self {
        debug_assert!(
            min_distance <= max_distance,
            "empty spawn range {}..={}",
            min_distance,
            max_distance
        );
        let mut spawner = Self {
            counter: 0,
            threshold: 0,
            min_distance,
            max_distance,
        };
        spawner.redraw(rng);
        spawner
    }

    /// Advance one frame. Returns true when an obstacle should spawn; the
    /// counter is then reset and the next threshold drawn.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.counter += 1;
        if self.counter >= self.threshold {
            self.counter = 0;
            self.redraw(rng);
            true
        } else {
            false
        }
    }

    /// Start a fresh cycle, as at the beginning of a session.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.counter = 0;
        self.redraw(rng);
    }

    fn redraw<R: Rng>(&mut self, rng: &mut R) {
        self.threshold = rng.gen_range(self.min_distance..=self.max_distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_initial_threshold_within_bounds() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let spawner = Spawner::new(150, 300, &mut rng);
            assert_eq!(spawner.counter, 0);
            assert!((150..=300).contains(&spawner.threshold));
        }
    }

    #[test]
    fn test_fires_exactly_at_threshold() {
        let mut rng = create_test_rng();
        let mut spawner = Spawner::new(150, 300, &mut rng);
        spawner.threshold = 5;

        for _ in 0..4 {
            assert!(!spawner.tick(&mut rng));
        }
        assert!(spawner.tick(&mut rng));
        assert_eq!(spawner.counter, 0);
        assert!((150..=300).contains(&spawner.threshold));
    }

    #[test]
    fn test_spawn_intervals_stay_in_range() {
        let mut rng = create_test_rng();
        let mut spawner = Spawner::new(150, 300, &mut rng);

        let mut last_spawn = 0u32;
        let mut intervals = Vec::new();
        for frame in 1..=100_000u32 {
            if spawner.tick(&mut rng) {
                intervals.push(frame - last_spawn);
                last_spawn = frame;
            }
        }

        assert!(intervals.len() > 300);
        for interval in &intervals {
            assert!(
                (150..=300).contains(interval),
                "interval {} outside [150, 300]",
                interval
            );
        }
        // Both ends of the range should eventually show up
        assert!(intervals.iter().any(|&i| i < 160));
        assert!(intervals.iter().any(|&i| i > 290));
    }

    #[test]
    fn test_degenerate_range_is_fixed_interval() {
        let mut rng = create_test_rng();
        let mut spawner = Spawner::new(10, 10, &mut rng);
        let fired: Vec<u32> = (1..=35u32).filter(|_| spawner.tick(&mut rng)).collect();
        assert_eq!(fired.len(), 3);
    }

    #[test]
    #[should_panic(expected = "empty spawn range")]
    fn test_inverted_range_rejected() {
        let mut rng = create_test_rng();
        Spawner::new(300, 150, &mut rng);
    }

    #[test]
    fn test_reset_clears_counter() {
        let mut rng = create_test_rng();
        let mut spawner = Spawner::new(150, 300, &mut rng);
        for _ in 0..100 {
            spawner.tick(&mut rng);
        }
        spawner.reset(&mut rng);
        assert_eq!(spawner.counter, 0);
        assert!((150..=300).contains(&spawner.threshold));
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let schedule = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut spawner = Spawner::new(150, 300, &mut rng);
            (1..=5_000u32)
                .filter(|_| spawner.tick(&mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(schedule(7), schedule(7));
    }
}
