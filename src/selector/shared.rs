use super::selector::Selector;
use crate::Target;
use crate::error::Result;
use crate::tiles::Hand;
use rand::Rng;
use rand::rngs::SmallRng;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// A [`Selector`] that can be shared across threads.
///
/// Every draw locks the generator for its whole duration, so each call is
/// atomic with respect to the others.
#[derive(Debug)]
pub struct Shared<R = SmallRng>(Mutex<Selector<R>>);

impl<R: Rng> Shared<R> {
    pub fn new(selector: Selector<R>) -> Self {
        Self(Mutex::new(selector))
    }
    pub fn draw_target(&self, low: Target, high: Target) -> Result<Target> {
        self.lock().draw_target(low, high)
    }
    pub fn draw_hand(&self, n_big: isize) -> Result<Hand> {
        self.lock().draw_hand(n_big)
    }
    /// A panic mid-draw leaves nothing half-written, so a poisoned lock is
    /// still safe to use.
    fn lock(&self) -> MutexGuard<'_, Selector<R>> {
        self.0.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

impl Default for Shared<SmallRng> {
    fn default() -> Self {
        Self::new(Selector::default())
    }
}

impl<R: Rng> From<Selector<R>> for Shared<R> {
    fn from(selector: Selector<R>) -> Self {
        Self::new(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn concurrent_hands_stay_legal() {
        let shared = Arc::new(Shared::from(Selector::seeded(1)));
        let handles = (0..4)
            .map(|n_big| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    (0..500)
                        .map(|_| shared.draw_hand(n_big).unwrap())
                        .all(|hand| hand.n_big() == n_big as usize)
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn errors_pass_through() {
        let shared = Shared::from(Selector::seeded(2));
        assert!(shared.draw_target(10, 10).is_err());
        assert!(shared.draw_hand(7).is_err());
        assert!(shared.draw_target(10, 11).is_ok());
    }
}
