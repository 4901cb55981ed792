use std::num::NonZeroUsize;

use crate::ThreadPoolError;

pub mod prelude {
    pub trait IntoMaybeParallelIterator: IntoIterator + Sized {
        fn into_maybe_par_iter(self) -> Self::IntoIter {
            self.into_iter()
        }
    }

    pub trait MaybeIntoParallelRefIterator<'data> {
        type Iter: Iterator;

        fn maybe_par_iter(&'data self) -> Self::Iter;
    }

    // Implementations

    impl<I: IntoIterator> IntoMaybeParallelIterator for I {}

    impl<'data, I: 'data + ?Sized> MaybeIntoParallelRefIterator<'data> for I
    where
        &'data I: IntoIterator,
    {
        type Iter = <&'data I as IntoIterator>::IntoIter;

        fn maybe_par_iter(&'data self) -> Self::Iter {
            self.into_iter()
        }
    }
}

/// There is no pool to size without the `concurrent` feature. Requests for more than one thread
/// are accepted and ignored.
pub fn configure_threads(_num_threads: NonZeroUsize) -> Result<(), ThreadPoolError> {
    Ok(())
}

pub fn current_num_threads() -> usize {
    1
}
