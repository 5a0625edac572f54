use super::selector::Selector;
use crate::Target;
use crate::error::Error;
use rand::Rng;

/// A flicker sequence of provisional targets.
///
/// Yields `frames` independent draws over `[low, high)`; the last one is the
/// target the display freezes on. The range is checked once up front, so
/// iteration itself cannot fail. Pacing between frames belongs to the caller.
#[derive(Debug)]
pub struct Reveal<'a, R> {
    selector: &'a mut Selector<R>,
    low: Target,
    high: Target,
    remaining: usize,
}

impl<'a, R: Rng> Reveal<'a, R> {
    pub fn new(
        selector: &'a mut Selector<R>,
        low: Target,
        high: Target,
        frames: usize,
    ) -> Result<Self, Error> {
        if low >= high {
            return Err(Error::InvalidRange { low, high });
        }
        Ok(Self {
            selector,
            low,
            high,
            remaining: frames,
        })
    }
    /// Drains the sequence and returns the frozen target.
    pub fn settle(self) -> Option<Target> {
        self.last()
    }
}

impl<'a, R: Rng> Iterator for Reveal<'a, R> {
    type Item = Target;
    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining {
            0 => None,
            _ => {
                self.remaining -= 1;
                self.selector.draw_target(self.low, self.high).ok()
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, R: Rng> ExactSizeIterator for Reveal<'a, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::REVEAL_FRAMES;

    #[test]
    fn yields_every_frame() {
        let ref mut selector = Selector::seeded(1);
        let frames = selector.reveal(101, 999, REVEAL_FRAMES).unwrap();
        assert_eq!(frames.len(), 25);
        let frames = frames.collect::<Vec<Target>>();
        assert_eq!(frames.len(), 25);
        assert!(frames.iter().all(|t| (101..999).contains(t)));
    }

    #[test]
    fn zero_frames_is_empty() {
        let ref mut selector = Selector::seeded(2);
        assert_eq!(selector.reveal(101, 999, 0).unwrap().settle(), None);
    }

    #[test]
    fn settles_on_last_frame() {
        let mut a = Selector::seeded(3);
        let mut b = Selector::seeded(3);
        let last = a.reveal(1, 1000, 7).unwrap().last();
        let settled = b.reveal(1, 1000, 7).unwrap().settle();
        assert!(last.is_some());
        assert_eq!(last, settled);
    }

    #[test]
    fn rejects_empty_range_up_front() {
        let ref mut selector = Selector::seeded(4);
        assert!(matches!(
            selector.reveal(999, 101, 25),
            Err(Error::InvalidRange { low: 999, high: 101 })
        ));
    }
}
