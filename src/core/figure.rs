//! Progressive hangman figure
//!
//! Each wrong guess reveals one more body part. The mapping is a pure function of
//! the wrong-guess count.

use super::MAX_WRONG;

/// A drawable part of the hanged figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigurePart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl FigurePart {
    /// All parts in the order they are revealed
    pub const ALL: [Self; MAX_WRONG] = [
        Self::Head,
        Self::Torso,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];
}

/// Parts visible after `wrong_count` wrong guesses
///
/// Parts accumulate: head after the first miss, torso after the second, then arms and
/// legs. Counts above the maximum show the full figure.
///
/// # Examples
/// ```
/// use hangman::core::{FigurePart, visible_parts};
///
/// assert!(visible_parts(0).is_empty());
/// assert_eq!(visible_parts(2), &[FigurePart::Head, FigurePart::Torso]);
/// ```
#[must_use]
pub fn visible_parts(wrong_count: usize) -> &'static [FigurePart] {
    &FigurePart::ALL[..wrong_count.min(MAX_WRONG)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_parts_before_first_miss() {
        assert!(visible_parts(0).is_empty());
    }

    #[test]
    fn parts_accumulate_one_per_miss() {
        for count in 0..=MAX_WRONG {
            let parts = visible_parts(count);
            assert_eq!(parts.len(), count);
            // Every earlier stage is a prefix of the later one
            if count > 0 {
                assert_eq!(&parts[..count - 1], visible_parts(count - 1));
            }
        }
    }

    #[test]
    fn reveal_order() {
        assert_eq!(visible_parts(1), &[FigurePart::Head]);
        assert_eq!(visible_parts(3)[2], FigurePart::LeftArm);
        assert_eq!(visible_parts(4)[3], FigurePart::RightArm);
        assert_eq!(visible_parts(5)[4], FigurePart::LeftLeg);
        assert_eq!(visible_parts(6)[5], FigurePart::RightLeg);
    }

    #[test]
    fn capped_at_full_figure() {
        assert_eq!(visible_parts(99), &FigurePart::ALL);
    }
}
