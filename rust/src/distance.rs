//! Path lengths with explicit infinities.
//!
//! Longest-path relaxation needs an "unreachable" value that absorbs addition
//! and loses every comparison. `Distance` makes that explicit instead of
//! leaning on IEEE-754 infinities.

use std::fmt;
use std::ops::{Add, Neg};

/// Length of a longest path between two nodes.
///
/// Variants are declared in ascending order so the derived `PartialOrd`
/// gives `NegInfinity < Finite(_) < PosInfinity`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub enum Distance {
    /// No path exists.
    #[default]
    NegInfinity,
    Finite(f64),
    /// Only produced by negating `NegInfinity` (an unconstrained latest start).
    PosInfinity,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0.0);

    /// The finite value, if any.
    #[inline]
    pub fn finite(self) -> Option<f64> {
        match self {
            Distance::Finite(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    #[inline]
    pub fn is_neg_infinity(self) -> bool {
        matches!(self, Distance::NegInfinity)
    }

    /// Larger of two distances. `NegInfinity` is the identity.
    #[inline]
    pub fn max(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::NegInfinity, d) | (d, Distance::NegInfinity) => d,
            (Distance::PosInfinity, _) | (_, Distance::PosInfinity) => Distance::PosInfinity,
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.max(b)),
        }
    }

    /// Convert to `f64`, mapping the infinities onto IEEE infinities.
    pub fn to_f64(self) -> f64 {
        match self {
            Distance::NegInfinity => f64::NEG_INFINITY,
            Distance::Finite(value) => value,
            Distance::PosInfinity => f64::INFINITY,
        }
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        if value == f64::NEG_INFINITY {
            Distance::NegInfinity
        } else if value == f64::INFINITY {
            Distance::PosInfinity
        } else {
            Distance::Finite(value)
        }
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        match (self, rhs) {
            // Unreachable wins over everything, including +inf
            (Distance::NegInfinity, _) | (_, Distance::NegInfinity) => Distance::NegInfinity,
            (Distance::PosInfinity, _) | (_, Distance::PosInfinity) => Distance::PosInfinity,
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a + b),
        }
    }
}

impl Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        match self {
            Distance::NegInfinity => Distance::PosInfinity,
            Distance::Finite(value) => Distance::Finite(-value),
            Distance::PosInfinity => Distance::NegInfinity,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::NegInfinity => write!(f, "-inf"),
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::PosInfinity => write!(f, "inf"),
        }
    }
}
