//! Quaternion value type and its algebra.
//!
//! A quaternion is held as four `f64` components `w + i·𝐢 + j·𝐣 + k·𝐤` with
//! the invariant that every component is finite. Writes of NaN or infinite
//! values are silently discarded and the prior value retained; callers that
//! want a hard failure instead use [`Quaternion::try_new`].
//!
//! All operations are pure and reentrant: they take values and return fresh
//! values, with no shared scratch state anywhere.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{CalcError, Result};

/// Quaternion with one real and three imaginary components (f64 precision).
#[derive(Clone, Copy, PartialEq)]
pub struct Quaternion {
    w: f64,
    i: f64,
    j: f64,
    k: f64,
}

impl Quaternion {
    /// Multiplicative identity `(1, 0, 0, 0)`; also the default value.
    pub const IDENTITY: Self = Self {
        w: 1.0,
        i: 0.0,
        j: 0.0,
        k: 0.0,
    };

    /// Additive identity `(0, 0, 0, 0)`. The only quaternion with zero norm.
    pub const ZERO: Self = Self {
        w: 0.0,
        i: 0.0,
        j: 0.0,
        k: 0.0,
    };

    /// Construct a quaternion under the silent-clamp policy: any non-finite
    /// argument is discarded and that component keeps its default from
    /// [`Quaternion::IDENTITY`].
    pub fn new(w: f64, i: f64, j: f64, k: f64) -> Self {
        let mut q = Self::IDENTITY;
        q.set_w(w);
        q.set_i(i);
        q.set_j(j);
        q.set_k(k);
        q
    }

    /// Strict construction: rejects the first non-finite component with
    /// [`CalcError::NonFiniteComponent`] instead of clamping.
    pub fn try_new(w: f64, i: f64, j: f64, k: f64) -> Result<Self> {
        for (component, value) in [("w", w), ("i", i), ("j", j), ("k", k)] {
            if !value.is_finite() {
                return Err(CalcError::NonFiniteComponent { component, value });
            }
        }
        Ok(Self { w, i, j, k })
    }

    /// Build from a `[w, i, j, k]` array, clamping non-finite entries.
    pub fn from_components(components: [f64; 4]) -> Self {
        let [w, i, j, k] = components;
        Self::new(w, i, j, k)
    }

    /// The components as a `[w, i, j, k]` array.
    #[inline]
    pub fn to_components(&self) -> [f64; 4] {
        [self.w, self.i, self.j, self.k]
    }

    /// Real part.
    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }

    /// First imaginary component.
    #[inline]
    pub fn i(&self) -> f64 {
        self.i
    }

    /// Second imaginary component.
    #[inline]
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Third imaginary component.
    #[inline]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Assign the real part. Returns whether the write was accepted; a
    /// non-finite value is discarded and the prior value retained.
    pub fn set_w(&mut self, value: f64) -> bool {
        if value.is_finite() {
            self.w = value;
            true
        } else {
            false
        }
    }

    /// Assign the first imaginary component under the clamp policy.
    pub fn set_i(&mut self, value: f64) -> bool {
        if value.is_finite() {
            self.i = value;
            true
        } else {
            false
        }
    }

    /// Assign the second imaginary component under the clamp policy.
    pub fn set_j(&mut self, value: f64) -> bool {
        if value.is_finite() {
            self.j = value;
            true
        } else {
            false
        }
    }

    /// Assign the third imaginary component under the clamp policy.
    pub fn set_k(&mut self, value: f64) -> bool {
        if value.is_finite() {
            self.k = value;
            true
        } else {
            false
        }
    }

    /// Conjugate: imaginary components negated, real part unchanged.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            i: -self.i,
            j: -self.j,
            k: -self.k,
        }
    }

    /// Squared norm: sum of squares of all four components. Zero only for
    /// the zero quaternion.
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.w * self.w + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Multiplicative inverse `conjugate / norm²`.
    ///
    /// Fails with [`CalcError::DivisionByZero`] for the zero quaternion
    /// rather than letting infinities leak into the components.
    pub fn inverse(&self) -> Result<Self> {
        let norm_sq = self.norm_sq();
        if norm_sq == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(self.conjugate() / norm_sq)
    }

    /// Right division `self * rhs⁻¹`, the calculator's divide operation.
    ///
    /// The only fallible arithmetic path: a zero-norm divisor is reported
    /// as [`CalcError::DivisionByZero`].
    pub fn checked_div(&self, rhs: Quaternion) -> Result<Self> {
        Ok(*self * rhs.inverse()?)
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// Arithmetic trait implementations
// ---------------------------------------------------------------------------

impl Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            w: self.w + rhs.w,
            i: self.i + rhs.i,
            j: self.j + rhs.j,
            k: self.k + rhs.k,
        }
    }
}

impl Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            w: self.w - rhs.w,
            i: self.i - rhs.i,
            j: self.j - rhs.j,
            k: self.k - rhs.k,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            w: -self.w,
            i: -self.i,
            j: -self.j,
            k: -self.k,
        }
    }
}

/// Hamilton product. Non-commutative: `a * b != b * a` in general.
impl Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.i * rhs.i - self.j * rhs.j - self.k * rhs.k,
            i: self.w * rhs.i + self.i * rhs.w + self.j * rhs.k - self.k * rhs.j,
            j: self.w * rhs.j - self.i * rhs.k + self.j * rhs.w + self.k * rhs.i,
            k: self.w * rhs.k + self.i * rhs.j - self.j * rhs.i + self.k * rhs.w,
        }
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            w: self.w * rhs,
            i: self.i * rhs,
            j: self.j * rhs,
            k: self.k * rhs,
        }
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        rhs * self
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self {
            w: self.w / rhs,
            i: self.i / rhs,
            j: self.j / rhs,
            k: self.k / rhs,
        }
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from(components: [f64; 4]) -> Self {
        Self::from_components(components)
    }
}

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.w, self.i, self.j, self.k)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.w)?;
        for (value, unit) in [(self.i, "i"), (self.j, "j"), (self.k, "k")] {
            if value >= 0.0 {
                write!(f, " + {value}{unit}")?;
            } else {
                write!(f, " - {}{unit}", -value)?;
            }
        }
        Ok(())
    }
}
