use super::tile::Tile;
use crate::BIG_NUMBERS;
use crate::SMALL_COPIES;
use crate::SMALL_MAX;
use rand::Rng;

/// Which of the two tile pools a [`Pool`] models.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Kind {
    Big,
    Small,
}

impl Kind {
    /// Number of draftable slots in a full pool of this kind.
    pub const fn slots(&self) -> usize {
        match self {
            Self::Big => BIG_NUMBERS.len(),
            Self::Small => SMALL_MAX as usize * SMALL_COPIES,
        }
    }
    /// Face value printed on a slot.
    ///
    /// Big slots map one-to-one onto the big numbers. Small slots come in
    /// adjacent runs of `SMALL_COPIES`, so slots 0 and 1 are both a 1,
    /// slots 2 and 3 are both a 2, and so on.
    pub fn face(&self, slot: u8) -> Tile {
        debug_assert!((slot as usize) < self.slots());
        let value = match self {
            Self::Big => BIG_NUMBERS[slot as usize],
            Self::Small => slot / SMALL_COPIES as u8 + 1,
        };
        Tile::try_from(value).expect("every slot maps onto a legal face")
    }
}

/// The slots still available for drafting from one pool.
///
/// Each bit of the mask is one physical copy of a tile. Drawing clears a
/// uniformly random set bit, so multiplicity limits fall out of slot
/// exhaustion: a small value can be drawn at most `SMALL_COPIES` times
/// because only that many of its bits exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    kind: Kind,
    mask: u32,
}

impl Pool {
    /// A full pool of the given kind.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            mask: (1u32 << kind.slots()) - 1,
        }
    }
    pub fn big() -> Self {
        Self::new(Kind::Big)
    }
    pub fn small() -> Self {
        Self::new(Kind::Small)
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    /// Slots not yet drawn.
    pub fn size(&self) -> usize {
        self.mask.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }
    /// Copies of a face value still in the pool.
    pub fn count(&self, tile: Tile) -> usize {
        (0..self.kind.slots() as u8)
            .filter(|slot| self.mask & (1u32 << slot) != 0)
            .filter(|slot| self.kind.face(*slot) == tile)
            .count()
    }

    /// Removes a uniformly random slot and returns its face value.
    /// `None` once the pool is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Tile> {
        if self.is_empty() {
            return None;
        }
        let n = self.size();
        let i = rng.random_range(0..n);
        let mut rest = self.mask;
        for _ in 0..i {
            rest &= rest - 1;
        }
        let slot = rest.trailing_zeros() as u8;
        self.mask &= !(1u32 << slot);
        Some(self.kind.face(slot))
    }

    /// Draws `n` tiles without replacement, in draw order.
    /// Stops early if the pool runs dry.
    pub fn take<R: Rng>(&mut self, n: usize, rng: &mut R) -> Vec<Tile> {
        (0..n).map_while(|_| self.draw(rng)).collect()
    }
}
