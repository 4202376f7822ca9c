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

use rayon::prelude::*;

use crate::levy::{LevyError, LevyResult};
use crate::nan::is_nan;

/// Standard deviation of a Lévy distribution with location `mu` and scale `c`.
///
/// The Lévy distribution has infinite variance, so for any valid parameters this is
/// positive infinity. Invalid parameters return NaN:
///     - `mu` is NaN.
///     - `c` is NaN.
///     - `c` is not strictly positive (including negative infinity).
///
/// ```
///     use levy_stats::levy_stdev;
///     assert_eq!(levy_stdev(0.0, 1.0), f64::INFINITY);
///     assert_eq!(levy_stdev(f64::INFINITY, 1.0), f64::INFINITY);
///     assert!(levy_stdev(f64::NAN, 1.0).is_nan());
///     assert!(levy_stdev(0.0_f64, -1.0).is_nan());
///
///     // Same but with f32
///     assert_eq!(levy_stdev(5.0_f32, 2.0), f32::INFINITY);
///     assert!(levy_stdev(0.0_f32, 0.0).is_nan());
/// ```
#[inline(always)]
#[must_use]
pub fn levy_stdev<T>(mu: T, c: T) -> T
where
    T: num_traits::Float,
{
    if is_nan(mu) || is_nan(c) || c <= T::zero() {
        return T::nan();
    }
    T::infinity()
}

/// Evaluate [`levy_stdev`] element-wise over matching slices of locations and scales.
///
/// Invalid parameter pairs produce NaN in their slot, they do not fail the batch.
/// This is a multi-core operation.
///
/// ```
///     use levy_stats::levy_stdev_batch;
///     let stdevs = levy_stdev_batch(&[0.0_f64, -5.0, 0.0], &[1.0, 2.5, 0.0]).unwrap();
///     assert_eq!(stdevs[..2], [f64::INFINITY; 2]);
///     assert!(stdevs[2].is_nan());
/// ```
///
/// # Errors
/// [`LevyError::UnequalLengths`] if `mu` and `c` differ in length.
pub fn levy_stdev_batch<T>(mu: &[T], c: &[T]) -> LevyResult<Vec<T>>
where
    T: num_traits::Float + Send + Sync,
{
    if mu.len() != c.len() {
        return Err(LevyError::UnequalLengths);
    }
    Ok(mu
        .par_iter()
        .zip(c)
        .with_min_len(100)
        .map(|(&mu, &c)| levy_stdev(mu, c))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{levy_stdev, levy_stdev_batch};
    use crate::constants::{NAN, NINF, PINF};
    use crate::levy::LevyError;
    use crate::nan::is_nan;

    #[test]
    fn test_stdev_valid() {
        assert_eq!(levy_stdev(0.0, 1.0), PINF);
        assert_eq!(levy_stdev(-5.0, 2.5), PINF);
        assert_eq!(levy_stdev(PINF, 1.0), PINF);
        assert_eq!(levy_stdev(NINF, 1.0), PINF);
        assert_eq!(levy_stdev(2.0, PINF), PINF);
        assert_eq!(levy_stdev(2.0, f64::MIN_POSITIVE), PINF);
    }

    #[test]
    fn test_stdev_nan_params() {
        assert!(is_nan(levy_stdev(NAN, 1.0)));
        assert!(is_nan(levy_stdev(1.0, NAN)));
        assert!(is_nan(levy_stdev(NAN, NAN)));
        assert!(is_nan(levy_stdev(NAN, NINF)));
    }

    #[test]
    fn test_stdev_nonpositive_scale() {
        for c in [0.0, -0.0, -1.0, -1e-300, NINF] {
            assert!(is_nan(levy_stdev(2.0, c)), "c={c}");
            assert!(is_nan(levy_stdev(PINF, c)), "c={c}");
            assert!(is_nan(levy_stdev(NINF, c)), "c={c}");
        }
    }

    #[test]
    fn test_stdev_grid() {
        for i in 0..100 {
            let mu = f64::from(i) / 10.0 - 5.0;
            let c = f64::from(i + 1) / 5.0;
            assert_eq!(levy_stdev(mu, c), PINF, "mu={mu} c={c}");
            assert_eq!(levy_stdev(mu, c), levy_stdev(mu, c));
            assert!(is_nan(levy_stdev(mu, -c)), "mu={mu} c={}", -c);
        }
    }

    #[test]
    fn test_stdev_f32() {
        assert_eq!(levy_stdev(0.0_f32, 1.0), f32::INFINITY);
        assert_eq!(levy_stdev(f32::NEG_INFINITY, 1.0), f32::INFINITY);
        assert!(levy_stdev(f32::NAN, 1.0).is_nan());
        assert!(levy_stdev(0.0_f32, -1.0).is_nan());
    }

    #[test]
    fn test_stdev_threads() {
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| s.spawn(move || levy_stdev(f64::from(i), 1.0)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), PINF);
            }
        });
    }

    #[test]
    fn test_batch_matches_scalar() {
        let mu: Vec<f64> = (0..1000).map(|i| f64::from(i) - 500.0).collect();
        let c: Vec<f64> = (0..1000)
            .map(|i| match i % 4 {
                0 => 0.0,
                1 => NAN,
                2 => -f64::from(i),
                _ => f64::from(i),
            })
            .collect();

        let batch = levy_stdev_batch(&mu, &c).unwrap();
        assert_eq!(batch.len(), mu.len());
        for ((&m, &s), &y) in mu.iter().zip(&c).zip(&batch) {
            let expected = levy_stdev(m, s);
            assert!(
                (is_nan(expected) && is_nan(y)) || expected == y,
                "mu={m} c={s}"
            );
        }
    }

    #[test]
    fn test_batch_bad() {
        assert_eq!(
            levy_stdev_batch(&[0.0, 1.0], &[1.0]),
            Err(LevyError::UnequalLengths)
        );
        assert!(levy_stdev_batch::<f64>(&[], &[]).unwrap().is_empty());
    }
}
