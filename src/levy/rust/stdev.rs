//! Lévy distribution standard deviation.
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::utils::MaybeVec;

/// Standard deviation of a Lévy distribution with location `mu` and scale `c`.
///
/// This is infinite for all valid parameters, NaN is returned if `mu` or `c` is NaN,
/// or if `c` is not strictly positive.
///
/// A single value may be paired with a list, in which case it is repeated for each
/// entry of the list. Lists are evaluated on multiple cores.
///
/// Parameters
/// ----------
/// mu:
///     Location parameter, a float or list of floats.
/// c:
///     Scale parameter, a float or list of floats.
#[pyfunction]
#[pyo3(name = "levy_stdev")]
pub fn levy_stdev_py(mu: MaybeVec<f64>, c: MaybeVec<f64>) -> PyResult<MaybeVec<f64>> {
    if let (MaybeVec::Single(mu), MaybeVec::Single(c)) = (&mu, &c) {
        return Ok(MaybeVec::Single(levy_stats::levy_stdev(*mu, *c)));
    }

    // lists of length one broadcast the same as single values
    let n = match (mu.len(), c.len()) {
        (n_mu, n_c) if n_mu == n_c || n_c == 1 => n_mu,
        (1, n_c) => n_c,
        _ => {
            return Err(PyErr::new::<PyValueError, _>(
                "mu and c must be the same length, or one of them a single value",
            ));
        }
    };

    let mu = mu.broadcast(n);
    let c = c.broadcast(n);
    Ok(MaybeVec::Multiple(levy_stats::levy_stdev_batch(&mu, &c)?))
}
