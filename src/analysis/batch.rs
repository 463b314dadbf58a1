/// Maps `f` over `items` on the worker pool, keeping input order.
///
/// The first error aborts the batch. Without the `server` feature the map
/// runs on the calling thread; the results are identical either way.
pub(crate) fn batch<T, R, F>(items: Vec<T>, f: F) -> anyhow::Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(T) -> anyhow::Result<R> + Sync + Send,
{
    #[cfg(feature = "server")]
    {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        items.into_par_iter().map(f).collect()
    }
    #[cfg(not(feature = "server"))]
    {
        items.into_iter().map(f).collect()
    }
}
