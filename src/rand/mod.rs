//! Random draw sources for password sampling.

mod fallback;
mod os;

pub use fallback::Fallback;
pub use os::OsEntropy;

/// Uniform random source feeding the character sampler.
///
/// The strength of the source is part of the contract: callers that need
/// cryptographic guarantees check [`Source::is_secure`] on the source they
/// were handed instead of assuming the strongest one was available.
pub trait Source {
    /// Next uniformly distributed 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Whether draws come from a cryptographically strong generator.
    fn is_secure(&self) -> bool;

    /// Short name of the underlying source, for operator output.
    fn name(&self) -> &'static str;
}

/// Pick the strongest source the host provides.
///
/// Prefers the OS entropy device and silently falls back to a
/// non-cryptographic generator when the device cannot be opened.
pub fn select() -> Box<dyn Source> {
    match OsEntropy::open() {
        Some(src) => Box::new(src),
        None => Box::new(Fallback::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_returns_usable_source() {
        let mut src = select();
        let a = src.next_u32();
        let b = src.next_u32();
        let c = src.next_u32();
        // Three consecutive equal draws from any of our sources means the
        // source is stuck, not unlucky.
        assert!(!(a == b && b == c));
    }

    #[test]
    fn os_entropy_reports_secure() {
        if let Some(src) = OsEntropy::open() {
            assert!(src.is_secure());
            assert_eq!(src.name(), "/dev/urandom");
        }
    }

    #[test]
    fn fallback_reports_insecure() {
        let src = Fallback::new();
        assert!(!src.is_secure());
    }
}
