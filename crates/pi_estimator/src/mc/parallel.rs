//! Rayon-based parallel trial counting.
//!
//! Trials are cut into fixed-size chunks. Chunk `i` runs on its own generator
//! seeded with [`derive_substream_seed`]`(seed, i)`, and the partial counts
//! are summed. Because the chunk layout is fixed by `chunk_size`, the total
//! is the same whatever the pool size.

use rayon::prelude::*;

use crate::rng::{derive_substream_seed, GeneratorKind, StdUniformRng, Xorshift64};

use super::trial::count_inside;

/// Number of chunks needed to cover `n_trials`.
#[inline]
pub fn chunk_count(n_trials: u64, chunk_size: u64) -> u64 {
    n_trials.div_ceil(chunk_size.max(1))
}

/// Trial count of chunk `index`; the last chunk may be short.
#[inline]
pub fn chunk_len(n_trials: u64, chunk_size: u64, index: u64) -> u64 {
    let chunk_size = chunk_size.max(1);
    let start = index.saturating_mul(chunk_size);
    n_trials.saturating_sub(start).min(chunk_size)
}

/// Counts a single chunk on a freshly seeded sub-stream.
pub fn count_chunk(
    generator: GeneratorKind,
    seed: u64,
    n_trials: u64,
    chunk_size: u64,
    index: u64,
) -> u64 {
    let len = chunk_len(n_trials, chunk_size, index);
    let sub_seed = derive_substream_seed(seed, index);
    match generator {
        GeneratorKind::Xorshift64 => count_inside(&mut Xorshift64::from_seed(sub_seed), len),
        GeneratorKind::Std => count_inside(&mut StdUniformRng::from_seed(sub_seed), len),
    }
}

/// Counts inside trials across all chunks in parallel.
///
/// Runs on `pool` when given, otherwise on the global Rayon pool.
pub fn count_inside_parallel(
    generator: GeneratorKind,
    seed: u64,
    n_trials: u64,
    chunk_size: u64,
    pool: Option<&rayon::ThreadPool>,
) -> u64 {
    let n_chunks = chunk_count(n_trials, chunk_size);
    let run = || {
        (0..n_chunks)
            .into_par_iter()
            .map(|index| count_chunk(generator, seed, n_trials, chunk_size, index))
            .sum::<u64>()
    };
    match pool {
        Some(pool) => pool.install(run),
        None => run(),
    }
}

/// Builds a dedicated pool with `threads` workers.
pub fn build_pool(threads: usize) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("pi-worker-{}", i))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_layout() {
        assert_eq!(chunk_count(0, 10), 0);
        assert_eq!(chunk_count(10, 10), 1);
        assert_eq!(chunk_count(11, 10), 2);

        assert_eq!(chunk_len(25, 10, 0), 10);
        assert_eq!(chunk_len(25, 10, 1), 10);
        assert_eq!(chunk_len(25, 10, 2), 5);
        assert_eq!(chunk_len(25, 10, 3), 0);

        let total: u64 = (0..chunk_count(25, 10)).map(|i| chunk_len(25, 10, i)).sum();
        assert_eq!(total, 25);
    }

    #[test]
    fn test_parallel_zero_trials() {
        assert_eq!(
            count_inside_parallel(GeneratorKind::Xorshift64, 42, 0, 1024, None),
            0
        );
    }

    #[test]
    fn test_parallel_equals_sum_of_chunks() {
        let (n, chunk) = (50_000, 4_096);
        let expected: u64 = (0..chunk_count(n, chunk))
            .map(|i| count_chunk(GeneratorKind::Xorshift64, 42, n, chunk, i))
            .sum();
        assert_eq!(
            count_inside_parallel(GeneratorKind::Xorshift64, 42, n, chunk, None),
            expected
        );
    }

    #[test]
    fn test_parallel_independent_of_pool_size() {
        let single = build_pool(1).unwrap();
        let quad = build_pool(4).unwrap();
        for generator in [GeneratorKind::Xorshift64, GeneratorKind::Std] {
            let a = count_inside_parallel(generator, 7, 100_000, 1_000, Some(&single));
            let b = count_inside_parallel(generator, 7, 100_000, 1_000, Some(&quad));
            assert_eq!(a, b);
            assert!(a <= 100_000);
        }
    }

    #[test]
    fn test_single_chunk_uses_derived_seed() {
        let n = 1_000;
        let mut rng = Xorshift64::from_seed(derive_substream_seed(42, 0));
        assert_eq!(
            count_inside_parallel(GeneratorKind::Xorshift64, 42, n, n, None),
            count_inside(&mut rng, n)
        );
    }
}
