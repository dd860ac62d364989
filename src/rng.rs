/// Xorshift32 pseudo-random generator.
///
/// Deterministic and allocation-free so the same seed replays the same
/// process set on the host and on the board.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

// Xorshift has an all-zero fixed point.
const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

impl Rng {
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish value in `lo..=hi` (modulo bias is irrelevant at these ranges).
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        let span = hi - lo;
        if span == u32::MAX {
            return self.next_u32();
        }
        lo + self.next_u32() % (span + 1)
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.range_inclusive(0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_still_moves() {
        let mut r = Rng::new(0);
        assert_ne!(r.next_u32(), 0);
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut r = Rng::new(7);
        for _ in 0..1000 {
            let v = r.range_inclusive(1, 6);
            assert!((1..=6).contains(&v));
        }
        assert_eq!(r.range_inclusive(3, 3), 3);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut r = Rng::new(99);
        let mut v = [1, 2, 3, 4, 5, 6, 7, 8];
        r.shuffle(&mut v);
        let mut sorted = v;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
