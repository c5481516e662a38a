//! Index-domain fan-out used by the search passes.
//!
//! With the `rayon` feature and `parallel == true` the map runs on the rayon
//! pool; otherwise it runs sequentially. Output order always follows the index
//! order, and the function returns only after every slot is written.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[cfg(feature = "rayon")]
pub(crate) fn map_indexed<T, F>(len: usize, parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if parallel {
        (0..len).into_par_iter().map(f).collect()
    } else {
        (0..len).map(f).collect()
    }
}

#[cfg(not(feature = "rayon"))]
pub(crate) fn map_indexed<T, F>(len: usize, _parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    (0..len).map(f).collect()
}
