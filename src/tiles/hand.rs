use super::tile::Tile;
use crate::Arbitrary;
use crate::HAND_SIZE;
use crate::SMALL_COPIES;
use crate::error::Error;

/// The six tiles dealt for a round, in presentation order.
///
/// Display slots 0..5 are filled in this order. A `Hand` can only be built
/// from a sequence that respects the pool limits: six tiles, no big number
/// more than once, no small number more than `SMALL_COPIES` times.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Hand([Tile; HAND_SIZE]);

impl Hand {
    pub fn tiles(&self) -> &[Tile; HAND_SIZE] {
        &self.0
    }
    pub fn values(&self) -> [u8; HAND_SIZE] {
        self.0.map(u8::from)
    }
    pub fn bigs(&self) -> impl Iterator<Item = Tile> + '_ {
        self.0.iter().copied().filter(Tile::is_big)
    }
    pub fn smalls(&self) -> impl Iterator<Item = Tile> + '_ {
        self.0.iter().copied().filter(Tile::is_small)
    }
    pub fn n_big(&self) -> usize {
        self.bigs().count()
    }
    pub fn count(&self, tile: Tile) -> usize {
        self.0.iter().filter(|&&t| t == tile).count()
    }

    /// Checks length and multiplicity limits.
    fn validate(tiles: &[Tile]) -> Result<(), Error> {
        if tiles.len() != HAND_SIZE {
            return Err(Error::InvalidHand(format!(
                "expected {} tiles, got {}",
                HAND_SIZE,
                tiles.len()
            )));
        }
        for tile in tiles {
            let n = tiles.iter().filter(|&t| t == tile).count();
            let cap = if tile.is_big() { 1 } else { SMALL_COPIES };
            if n > cap {
                return Err(Error::InvalidHand(format!(
                    "{} appears {} times, at most {} allowed",
                    tile, n, cap
                )));
            }
        }
        Ok(())
    }
}

/// Vec<Tile> isomorphism (order preserved)
impl TryFrom<Vec<Tile>> for Hand {
    type Error = Error;
    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        Self::try_from(tiles.as_slice())
    }
}
impl TryFrom<&[Tile]> for Hand {
    type Error = Error;
    fn try_from(tiles: &[Tile]) -> Result<Self, Self::Error> {
        Self::validate(tiles)?;
        let mut hand = [tiles[0]; HAND_SIZE];
        hand.copy_from_slice(tiles);
        Ok(Self(hand))
    }
}
impl From<Hand> for Vec<Tile> {
    fn from(hand: Hand) -> Self {
        hand.0.to_vec()
    }
}

/// &[u8] injection
/// every value must be a legal tile before the hand rules are checked
impl TryFrom<&[u8]> for Hand {
    type Error = Error;
    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        values
            .iter()
            .map(|&n| Tile::try_from(n))
            .collect::<Result<Vec<Tile>, Error>>()
            .and_then(Self::try_from)
    }
}

/// str injection
/// "25 50 3 3 7 1"
impl std::str::FromStr for Hand {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(Tile::try_from)
            .collect::<Result<Vec<Tile>, Error>>()
            .and_then(Self::try_from)
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        use crate::selector::Selector;
        let n_big = rand::random_range(0..=crate::MAX_BIG) as isize;
        Selector::default()
            .draw_hand(n_big)
            .expect("count drawn from the legal range")
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, tile) in self.0.iter().enumerate() {
            match i {
                0 => write!(f, "{}", tile)?,
                _ => write!(f, " {}", tile)?,
            }
        }
        Ok(())
    }
}
