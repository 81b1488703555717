//! Non-cryptographic fallback generator.

use std::time::{SystemTime, UNIX_EPOCH};

use super::Source;

/// SplitMix64 seeded from the wall clock and pid.
///
/// Only used when the OS entropy device cannot be opened. Reports
/// `is_secure() == false` so callers can surface the downgrade.
pub struct Fallback {
    state: u64,
}

impl Fallback {
    pub fn new() -> Self {
        Self { state: seed() }
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for Fallback {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        (z ^ (z >> 31)) as u32
    }

    fn is_secure(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "splitmix64"
    }
}

fn seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let pid = unsafe { libc::getpid() } as u64;
    nanos ^ (pid << 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_progresses() {
        let mut src = Fallback { state: 1 };
        let a = src.next_u32();
        let b = src.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut x = Fallback { state: 42 };
        let mut y = Fallback { state: 42 };
        for _ in 0..16 {
            assert_eq!(x.next_u32(), y.next_u32());
        }
    }
}
