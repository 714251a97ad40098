//! Scenery drawn beneath the gallows
//!
//! Purely decorative, picked at random for every round.

use rand::Rng;
use std::fmt;

/// Backdrop scenery for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backdrop {
    Mountain,
    Ocean,
    Plain,
}

impl Backdrop {
    pub const ALL: [Self; 3] = [Self::Mountain, Self::Ocean, Self::Plain];

    /// Pick a backdrop uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mountain => "mountain",
            Self::Ocean => "ocean",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Backdrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_covers_every_backdrop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let backdrop = Backdrop::random(&mut rng);
            let idx = Backdrop::ALL.iter().position(|&b| b == backdrop).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Backdrop::Ocean.to_string(), "ocean");
    }
}
