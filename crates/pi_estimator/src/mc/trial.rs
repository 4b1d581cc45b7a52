//! The per-trial predicate and the sequential counting loop.

use crate::rng::UniformSource;

/// Unit quarter-circle membership, closed boundary.
#[inline]
pub fn is_inside(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

/// Runs `n_trials` trials on `rng` and returns how many landed inside.
///
/// Each trial draws `x` then `y` from the same stream. The result is always
/// in `[0, n_trials]`.
///
/// # Examples
///
/// ```rust
/// use pi_estimator::mc::count_inside;
/// use pi_estimator::rng::Xorshift64;
///
/// let mut rng = Xorshift64::from_seed(42);
/// assert_eq!(count_inside(&mut rng, 1_000), 803);
/// ```
#[inline]
pub fn count_inside<R: UniformSource>(rng: &mut R, n_trials: u64) -> u64 {
    let mut inside = 0u64;
    for _ in 0..n_trials {
        let x = rng.next_uniform();
        let y = rng.next_uniform();
        if is_inside(x, y) {
            inside += 1;
        }
    }
    inside
}
