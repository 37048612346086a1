//! Action and observation spaces.

/// `n` discrete actions labelled `0..n`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Discrete {
    pub n: u32,
}

impl Discrete {
    #[must_use]
    pub const fn new(n: u32) -> Self {
        Self { n }
    }

    #[must_use]
    pub fn contains(&self, action: u32) -> bool {
        action < self.n
    }

    /// Uniformly random action.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> u32 {
        rng.u32(0..self.n)
    }
}

/// Axis-aligned box of `N` closed intervals.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxSpace<const N: usize> {
    pub low: [f64; N],
    pub high: [f64; N],
}

impl<const N: usize> BoxSpace<N> {
    #[must_use]
    pub fn new(low: [f64; N], high: [f64; N]) -> Self {
        Self { low, high }
    }

    /// Box spanning `[-high, high]` on every axis.
    #[must_use]
    pub fn symmetric(high: [f64; N]) -> Self {
        Self {
            low: high.map(|h| -h),
            high,
        }
    }

    #[must_use]
    pub fn contains(&self, value: &[f64; N]) -> bool {
        value
            .iter()
            .zip(self.low.iter().zip(&self.high))
            .all(|(v, (lo, hi))| v >= lo && v <= hi)
    }

    #[must_use]
    pub const fn shape(&self) -> usize {
        N
    }
}
