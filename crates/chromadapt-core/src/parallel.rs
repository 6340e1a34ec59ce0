//! Chunked execution over pixel buffers
//!
//! With the `parallel` feature the chunks are handed to rayon workers and
//! joined once at the end. Without it the same closures run sequentially
//! in storage order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Pixels per work item
pub(crate) const CHUNK_PIXELS: usize = 16 * 1024;

/// Run `f` over matching chunks of `src` and `dst`
///
/// Both slices must have the same length.
pub(crate) fn zip_for_each<A, B, F>(src: &[A], dst: &mut [B], chunk: usize, f: F)
where
    A: Sync,
    B: Send,
    F: Fn(&[A], &mut [B]) + Sync + Send,
{
    debug_assert_eq!(src.len(), dst.len());
    let chunk = chunk.max(1);

    #[cfg(feature = "parallel")]
    src.par_chunks(chunk)
        .zip(dst.par_chunks_mut(chunk))
        .for_each(|(s, d)| f(s, d));

    #[cfg(not(feature = "parallel"))]
    src.chunks(chunk)
        .zip(dst.chunks_mut(chunk))
        .for_each(|(s, d)| f(s, d));
}

/// Run `f` over chunks of `data`
pub(crate) fn for_each_mut<A, F>(data: &mut [A], chunk: usize, f: F)
where
    A: Send,
    F: Fn(&mut [A]) + Sync + Send,
{
    let chunk = chunk.max(1);

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(chunk).for_each(|c| f(c));

    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(chunk).for_each(|c| f(c));
}

/// Map every chunk of `src` to a partial result and fold the partials
///
/// `combine` must be associative and `identity` its neutral element; the
/// grouping of partials differs between the parallel and sequential paths.
pub(crate) fn map_reduce<A, R, I, M, C>(src: &[A], chunk: usize, identity: I, map: M, combine: C) -> R
where
    A: Sync,
    R: Send,
    I: Fn() -> R + Sync + Send,
    M: Fn(&[A]) -> R + Sync + Send,
    C: Fn(R, R) -> R + Sync + Send,
{
    let chunk = chunk.max(1);

    #[cfg(feature = "parallel")]
    {
        src.par_chunks(chunk).map(map).reduce(identity, combine)
    }

    #[cfg(not(feature = "parallel"))]
    {
        src.chunks(chunk).map(map).fold(identity(), combine)
    }
}
