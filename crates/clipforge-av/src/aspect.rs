//! Aspect classification and canonical output resolution selection.

use std::fmt;

/// Coarse aspect classification of a video frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// Classify a frame by comparing width against height.
    pub fn classify(width: u32, height: u32) -> Self {
        use std::cmp::Ordering;
        match width.cmp(&height) {
            Ordering::Greater => Orientation::Landscape,
            Ordering::Less => Orientation::Portrait,
            Ordering::Equal => Orientation::Square,
        }
    }

    fn fits_landscape(self) -> bool {
        matches!(self, Orientation::Landscape | Orientation::Square)
    }

    fn fits_portrait(self) -> bool {
        matches!(self, Orientation::Portrait | Orientation::Square)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        };
        write!(f, "{}", name)
    }
}

/// Canonical output resolution for a concatenated pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetResolution {
    pub width: u32,
    pub height: u32,
}

impl TargetResolution {
    pub const LANDSCAPE: TargetResolution = TargetResolution {
        width: 1920,
        height: 1080,
    };
    pub const PORTRAIT: TargetResolution = TargetResolution {
        width: 1080,
        height: 1920,
    };
    pub const SQUARE: TargetResolution = TargetResolution {
        width: 1080,
        height: 1080,
    };

    /// Select the output resolution for a pair of orientations.
    ///
    /// The first matching rule wins. Square passes both membership tests,
    /// so a Square/Square pair resolves to the landscape canonical.
    pub fn select(first: Orientation, second: Orientation) -> Self {
        if first.fits_landscape() && second.fits_landscape() {
            Self::LANDSCAPE
        } else if first.fits_portrait() && second.fits_portrait() {
            Self::PORTRAIT
        } else {
            Self::SQUARE
        }
    }
}

impl fmt::Display for TargetResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Orientation::{Landscape, Portrait, Square};

    #[test]
    fn classify_landscape() {
        assert_eq!(Orientation::classify(1920, 1080), Landscape);
        assert_eq!(Orientation::classify(2, 1), Landscape);
        assert_eq!(Orientation::classify(4096, 2160), Landscape);
    }

    #[test]
    fn classify_portrait() {
        assert_eq!(Orientation::classify(1080, 1920), Portrait);
        assert_eq!(Orientation::classify(1, 2), Portrait);
        assert_eq!(Orientation::classify(720, 1280), Portrait);
    }

    #[test]
    fn classify_square() {
        assert_eq!(Orientation::classify(1, 1), Square);
        assert_eq!(Orientation::classify(1080, 1080), Square);
    }

    #[test]
    fn select_covers_all_nine_pairs() {
        let cases = [
            (Landscape, Landscape, TargetResolution::LANDSCAPE),
            (Landscape, Square, TargetResolution::LANDSCAPE),
            (Square, Landscape, TargetResolution::LANDSCAPE),
            (Square, Square, TargetResolution::LANDSCAPE),
            (Portrait, Portrait, TargetResolution::PORTRAIT),
            (Portrait, Square, TargetResolution::PORTRAIT),
            (Square, Portrait, TargetResolution::PORTRAIT),
            (Landscape, Portrait, TargetResolution::SQUARE),
            (Portrait, Landscape, TargetResolution::SQUARE),
        ];

        for (first, second, expected) in cases {
            assert_eq!(
                TargetResolution::select(first, second),
                expected,
                "select({first}, {second})"
            );
        }
    }

    #[test]
    fn select_is_deterministic() {
        for first in [Landscape, Portrait, Square] {
            for second in [Landscape, Portrait, Square] {
                assert_eq!(
                    TargetResolution::select(first, second),
                    TargetResolution::select(first, second)
                );
            }
        }
    }

    #[test]
    fn display_formats() {
        assert_eq!(TargetResolution::LANDSCAPE.to_string(), "1920x1080");
        assert_eq!(TargetResolution::PORTRAIT.to_string(), "1080x1920");
        assert_eq!(Landscape.to_string(), "landscape");
    }
}
