use super::reveal::Reveal;
use crate::Choice;
use crate::HAND_SIZE;
use crate::MAX_BIG;
use crate::Round;
use crate::TARGET_HIGH;
use crate::TARGET_LOW;
use crate::Target;
use crate::error::Error;
use crate::error::Result;
use crate::tiles::Hand;
use crate::tiles::Pool;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Draws targets and hands from an injected random source.
///
/// The selector holds nothing but its generator. Every hand is dealt from
/// freshly built pools, so consecutive calls never influence each other
/// beyond the entropy they consume.
///
/// Hands are laid out big tiles first, in the order drawn, followed by
/// small tiles in the order drawn.
#[derive(Debug, Clone)]
pub struct Selector<R = SmallRng> {
    rng: R,
}

impl Default for Selector<SmallRng> {
    fn default() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Selector<SmallRng> {
    /// Deterministic selector for reproducible rounds.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Selector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Uniform target in `[low, high)`.
    pub fn draw_target(&mut self, low: Target, high: Target) -> Result<Target> {
        if low >= high {
            return Err(Error::InvalidRange { low, high });
        }
        let target = self.rng.random_range(low..high);
        log::debug!("drew target {} from [{}, {})", target, low, high);
        Ok(target)
    }

    /// Six tiles: `n_big` from the big pool, the rest from the small pool.
    pub fn draw_hand(&mut self, n_big: isize) -> Result<Hand> {
        let bigs = usize::try_from(n_big)
            .ok()
            .filter(|&n| n <= MAX_BIG)
            .ok_or(Error::InvalidCount(n_big))?;
        let ref mut rng = self.rng;
        let tiles = std::iter::empty()
            .chain(Pool::big().take(bigs, rng))
            .chain(Pool::small().take(HAND_SIZE - bigs, rng))
            .collect::<Vec<_>>();
        let hand = Hand::try_from(tiles)?;
        log::debug!("drew hand [{}] with {} big", hand, bigs);
        Ok(hand)
    }

    /// Deals a full round: the hand first, then the final target.
    pub fn deal(&mut self, choice: Choice) -> Result<Round> {
        let hand = self.draw_hand(choice.n_big())?;
        let target = self.draw_target(TARGET_LOW, TARGET_HIGH)?;
        let round = Round::new(hand, target);
        log::info!("dealt {} ({})", round, choice);
        Ok(round)
    }

    /// Provisional targets for a reveal sequence, last one final.
    pub fn reveal(&mut self, low: Target, high: Target, frames: usize) -> Result<Reveal<'_, R>> {
        Reveal::new(self, low, high, frames)
    }
}
