use std::num::NonZeroUsize;

use crate::ThreadPoolError;

pub mod prelude {
    pub use rayon::iter::ParallelIterator;
    use rayon::prelude::*;

    pub trait IntoMaybeParallelIterator: IntoParallelIterator {
        fn into_maybe_par_iter(self) -> Self::Iter;
    }

    pub trait MaybeIntoParallelRefIterator<'data>: IntoParallelRefIterator<'data> {
        fn maybe_par_iter(&'data self) -> Self::Iter;
    }

    impl<I: IntoParallelIterator> IntoMaybeParallelIterator for I {
        fn into_maybe_par_iter(self) -> Self::Iter {
            self.into_par_iter()
        }
    }

    impl<'data, I: IntoParallelRefIterator<'data> + ?Sized> MaybeIntoParallelRefIterator<'data>
        for I
    {
        fn maybe_par_iter(&'data self) -> Self::Iter {
            self.par_iter()
        }
    }
}

/// Sizes rayon's global pool. This can only succeed once per process.
pub fn configure_threads(num_threads: NonZeroUsize) -> Result<(), ThreadPoolError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads.get())
        .build_global()
        .map_err(|e| ThreadPoolError(e.to_string()))
}

pub fn current_num_threads() -> usize {
    rayon::current_num_threads()
}
