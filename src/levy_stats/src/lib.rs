//! # Levy Statistics
//! Closed form moments of the Lévy distribution.
//!
//! The Lévy distribution has infinite variance for every valid scale, so the standard
//! deviation is either `+inf` for valid parameters or NaN for invalid ones.
//!
//! ```
//!     use levy_stats::prelude::*;
//!     assert_eq!(levy_stdev(0.0, 1.0), f64::INFINITY);
//!     assert!(is_nan(levy_stdev(0.0, 0.0)));
//! ```
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

pub mod constants;
mod levy;
mod nan;

pub use crate::levy::{Levy, LevyError, LevyResult, levy_stdev, levy_stdev_batch};
pub use crate::nan::is_nan;

/// Common useful imports
pub mod prelude {
    pub use crate::constants::{NAN, NINF, PINF};
    pub use crate::levy::{Levy, LevyError, LevyResult, levy_stdev, levy_stdev_batch};
    pub use crate::nan::is_nan;
}
