//! # Lévy Distribution
//!
//! The Lévy distribution is a heavy tailed distribution over values greater than the
//! location `mu`, stretched by the scale `c`. Its second moment diverges, so the
//! variance and standard deviation are infinite for every valid parameterization.
//!
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

mod stdev;

pub use self::stdev::{levy_stdev, levy_stdev_batch};

use crate::nan::is_nan;
use serde::{Deserialize, Serialize};

/// Error types for Lévy distribution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LevyError {
    /// Location parameter was NaN.
    #[error("Location parameter (mu) must not be NaN.")]
    InvalidLocation,

    /// Scale parameter was NaN or not strictly positive.
    #[error("Scale parameter (c) must be strictly positive.")]
    InvalidScale,

    /// Locations and scales have different lengths.
    #[error("Locations and scales have different lengths.")]
    UnequalLengths,
}

/// Result type for Lévy distribution calculations.
pub type LevyResult<T> = Result<T, LevyError>;

#[cfg(feature = "pyo3")]
impl From<LevyError> for pyo3::PyErr {
    fn from(err: LevyError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// Valid parameters of a Lévy distribution.
///
/// Construction rejects exactly the parameters for which [`levy_stdev`] returns NaN,
/// deserialization goes through the same checks.
///
/// ```
///     use levy_stats::{Levy, LevyError};
///     let dist = Levy::try_new(-5.0, 2.5).unwrap();
///     assert_eq!(dist.stdev(), f64::INFINITY);
///
///     assert_eq!(Levy::try_new(0.0, 0.0), Err(LevyError::InvalidScale));
///     assert_eq!(Levy::try_new(f64::NAN, 1.0), Err(LevyError::InvalidLocation));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(T, T)", into = "(T, T)")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct Levy<T>
where
    T: num_traits::Float,
{
    mu: T,
    c: T,
}

impl<T> Levy<T>
where
    T: num_traits::Float,
{
    /// Construct a new Lévy distribution from location `mu` and scale `c`.
    ///
    /// The location may be infinite, the scale may be positive infinity.
    ///
    /// # Errors
    /// [`LevyError::InvalidLocation`] if `mu` is NaN, [`LevyError::InvalidScale`] if `c`
    /// is NaN or not strictly positive.
    pub fn try_new(mu: T, c: T) -> LevyResult<Self> {
        if is_nan(mu) {
            return Err(LevyError::InvalidLocation);
        }
        if is_nan(c) || c <= T::zero() {
            return Err(LevyError::InvalidScale);
        }
        Ok(Self { mu, c })
    }

    /// Location parameter.
    #[must_use]
    pub fn mu(&self) -> T {
        self.mu
    }

    /// Scale parameter.
    #[must_use]
    pub fn c(&self) -> T {
        self.c
    }

    /// Standard deviation, always positive infinity.
    #[must_use]
    pub fn stdev(&self) -> T {
        levy_stdev(self.mu, self.c)
    }
}

impl<T> TryFrom<(T, T)> for Levy<T>
where
    T: num_traits::Float,
{
    type Error = LevyError;

    fn try_from((mu, c): (T, T)) -> LevyResult<Self> {
        Self::try_new(mu, c)
    }
}

impl<T> From<Levy<T>> for (T, T)
where
    T: num_traits::Float,
{
    fn from(dist: Levy<T>) -> Self {
        (dist.mu, dist.c)
    }
}
