//! Process-wide parallelism settings.
//!
//! [`ParallelConfig`] holds the number of worker threads used by the
//! parallel stabilizer scan behind
//! `BurnsideRing::par_construct_from_action` (feature `parallel`). It
//! defaults to one thread.
//!
//! ```
//! use burnside::parallel::ParallelConfig;
//!
//! let config = ParallelConfig::global();
//! assert!(config.get_nproc() >= 1);
//! assert!(config.set_nproc(Some(0)).is_err());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::error::{Error, Result};

static NPROC: AtomicUsize = AtomicUsize::new(1);

/// Handle to the process-wide parallelism settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParallelConfig {
    _private: (),
}

impl ParallelConfig {
    /// The shared configuration.
    #[must_use]
    pub fn global() -> Self {
        Self { _private: () }
    }

    /// Number of worker threads.
    #[must_use]
    pub fn get_nproc(&self) -> usize {
        NPROC.load(Ordering::Relaxed)
    }

    /// Set the number of worker threads. `None` uses every available core.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] for `Some(0)`.
    pub fn set_nproc(&self, nproc: Option<usize>) -> Result<()> {
        let n = match nproc {
            Some(0) => return Err(Error::invalid_params("number of cpus must be positive")),
            Some(n) => n,
            None => std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
        };
        debug!("using {n} worker threads");
        NPROC.store(n, Ordering::Relaxed);
        Ok(())
    }
}

impl fmt::Display for ParallelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number of cpu used = {}", self.get_nproc())
    }
}

/// The elements of `elements` satisfying `fixes`, scanned on a rayon pool
/// with [`ParallelConfig::get_nproc`] threads. Keeps the input order.
#[cfg(feature = "parallel")]
pub(crate) fn par_stabilizer(
    elements: &[crate::perm::Permutation],
    fixes: impl Fn(&crate::perm::Permutation) -> bool + Sync,
) -> Result<Vec<crate::perm::Permutation>> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ParallelConfig::global().get_nproc())
        .build()
        .map_err(|e| Error::invalid_params(format!("cannot build thread pool: {e}")))?;
    Ok(pool.install(|| {
        elements
            .par_iter()
            .filter(|g| fixes(g))
            .cloned()
            .collect()
    }))
}
