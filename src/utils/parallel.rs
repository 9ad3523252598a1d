#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Heuristic: don't spin up Rayon for small multipolygons
const PARALLEL_THRESHOLD: usize = 64;

/// Maps every part, in parallel when the collection is large enough.
/// Output order follows input order.
#[inline]
pub fn filter_map_parts<T, U, F>(collection: &[T], f: F) -> Vec<U>
where T: Sync, U: Send, F: Fn(&T) -> Option<U> + Sync + Send {
    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    {
        if collection.len() > PARALLEL_THRESHOLD {
            return collection.par_iter().filter_map(f).collect();
        }
    }
    collection.iter().filter_map(f).collect()
}

// Helper for mutable iteration
#[inline]
pub fn iterate_mut<T, F>(collection: &mut [T], f: F)
where T: Send, F: Fn(&mut T) + Sync + Send {
    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    {
        if collection.len() > PARALLEL_THRESHOLD {
            collection.par_iter_mut().for_each(f);
            return;
        }
    }
    collection.iter_mut().for_each(f);
}
