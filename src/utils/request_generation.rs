//! Generation tagging for fetches that can be superseded
//!
//! A view that refetches when its input changes does not cancel the request
//! it already sent. Each selection bumps the generation; a result is only
//! applied when it was issued under the generation that is still current.

/// Tag carried by an issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    #[allow(dead_code)]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Start a new generation, invalidating every earlier one
    pub fn advance(&mut self) -> Generation {
        self.latest = self.latest.wrapping_add(1);
        Generation(self.latest)
    }

    pub fn latest(&self) -> Generation {
        Generation(self.latest)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_monotonic() {
        let mut generations = RequestGeneration::default();
        let first = generations.advance();
        let second = generations.advance();

        assert!(second > first);
        assert_eq!(generations.latest(), second);
        assert_eq!(second.as_u64(), 2);
    }

    #[test]
    fn test_only_latest_is_current() {
        let mut generations = RequestGeneration::default();
        let stale = generations.advance();
        assert!(generations.is_current(stale));

        let fresh = generations.advance();
        assert!(!generations.is_current(stale));
        assert!(generations.is_current(fresh));
    }

    #[test]
    fn test_display() {
        let mut generations = RequestGeneration::default();
        assert_eq!(generations.advance().to_string(), "#1");
    }
}
