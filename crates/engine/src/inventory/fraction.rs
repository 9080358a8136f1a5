use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// An exact rational number, kept in lowest terms with a positive denominator.
///
/// Capacity bookkeeping adds and removes many small weights (1/64, 1/16, ...);
/// floats would drift, so all of it goes through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numerator: 0, denominator: 1 };
    pub const ONE: Fraction = Fraction { numerator: 1, denominator: 1 };

    /// Panics if `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "fraction with zero denominator");
        Self::reduced(numerator as i128, denominator as i128)
    }

    /// `1 / denominator`, with a zero denominator treated as one.
    pub const fn recip(denominator: u32) -> Self {
        let d = if denominator == 0 { 1 } else { denominator as i64 };
        Self { numerator: 1, denominator: d }
    }

    pub const fn from_int(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }

    fn reduced(mut n: i128, mut d: i128) -> Self {
        if d < 0 {
            n = -n;
            d = -d;
        }
        let g = gcd(n.unsigned_abs(), d.unsigned_abs()).max(1) as i128;
        Self {
            numerator: (n / g) as i64,
            denominator: (d / g) as i64,
        }
    }

    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    pub fn mul_int(self, factor: u32) -> Self {
        Self::reduced(self.numerator as i128 * factor as i128, self.denominator as i128)
    }

    /// `self / other`, truncated toward zero (the floor for non-negative
    /// operands). Panics if `other` is zero.
    pub fn div_floor(self, other: Fraction) -> i64 {
        assert!(!other.is_zero(), "division by a zero fraction");
        let n = self.numerator as i128 * other.denominator as i128;
        let d = self.denominator as i128 * other.numerator as i128;
        (n / d) as i64
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        let n = self.numerator as i128 * rhs.denominator as i128 + rhs.numerator as i128 * self.denominator as i128;
        Self::reduced(n, self.denominator as i128 * rhs.denominator as i128)
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        let n = self.numerator as i128 * rhs.denominator as i128 - rhs.numerator as i128 * self.denominator as i128;
        Self::reduced(n, self.denominator as i128 * rhs.denominator as i128)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
