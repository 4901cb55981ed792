//! A thin layer over rayon. With the `concurrent` feature the `maybe_*` methods hand out rayon
//! parallel iterators; without it they are the ordinary sequential iterators, so call sites read
//! the same in both builds.

#[cfg(feature = "concurrent")]
pub mod concurrent;
#[cfg(feature = "concurrent")]
pub use concurrent::*;

#[cfg(not(feature = "concurrent"))]
pub mod sequential;
#[cfg(not(feature = "concurrent"))]
pub use sequential::*;

/// Error returned by [`configure_threads`] when the global pool cannot be set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadPoolError(pub String);

impl std::fmt::Display for ThreadPoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unable to configure worker threads: {}", self.0)
    }
}

impl std::error::Error for ThreadPoolError {}
