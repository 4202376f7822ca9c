//! NaN checks.
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

/// Test if a floating point value is NaN.
///
/// NaN is the only value which does not compare equal to itself.
///
/// ```
///     use levy_stats::is_nan;
///     assert!(is_nan(f64::NAN));
///     assert!(!is_nan(f64::INFINITY));
///     assert!(is_nan(f32::NAN));
/// ```
#[inline(always)]
#[must_use]
#[allow(
    clippy::eq_op,
    reason = "Self comparison is the definition of NaN."
)]
pub fn is_nan<T>(x: T) -> bool
where
    T: num_traits::Float,
{
    x != x
}

#[cfg(test)]
mod tests {
    use super::is_nan;
    use crate::constants::{NAN, NINF, PINF};

    #[test]
    fn test_is_nan() {
        assert!(is_nan(NAN));
        assert!(is_nan(-NAN));
        assert!(is_nan(0.0_f64 / 0.0));
        assert!(is_nan(PINF - PINF));
        assert!(is_nan(f32::NAN));
    }

    #[test]
    fn test_not_nan() {
        for x in [0.0, -0.0, 1.0, -1.0, f64::MIN_POSITIVE, f64::MAX, PINF, NINF] {
            assert!(!is_nan(x), "{x} is not NaN");
        }
        assert!(!is_nan(1.5_f32));
    }
}
