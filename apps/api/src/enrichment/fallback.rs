//! "Try a remote enhancement, keep the local baseline on failure."

use std::future::Future;

/// A partial result that can be laid over a complete baseline.
pub trait Overlay<Base> {
    fn overlay(self, baseline: Base) -> Base;
}

#[derive(Debug)]
pub enum Outcome<T, E> {
    Enhanced(T),
    Fallback { baseline: T, error: E },
}

/// Awaits `enhancement` once. On success the patch is overlaid on `baseline`;
/// on failure `baseline` is returned untouched along with the error.
pub async fn enhance_or_fallback<T, P, E, F>(baseline: T, enhancement: F) -> Outcome<T, E>
where
    P: Overlay<T>,
    F: Future<Output = Result<P, E>>,
{
    match enhancement.await {
        Ok(patch) => Outcome::Enhanced(patch.overlay(baseline)),
        Err(error) => Outcome::Fallback { baseline, error },
    }
}
