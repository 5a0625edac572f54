use crate::BIG_NUMBERS;
use crate::SMALL_MAX;
use crate::error::Error;

/// A single numbered tile as shown on the board.
///
/// The only legal face values are the small numbers `1..=10` and the big
/// numbers 25, 50, 75, 100, so every `Tile` in existence is one of those
/// fourteen values.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tile(u8);

impl Tile {
    pub fn value(&self) -> u8 {
        self.0
    }
    pub fn is_big(&self) -> bool {
        BIG_NUMBERS.contains(&self.0)
    }
    pub fn is_small(&self) -> bool {
        (1..=SMALL_MAX).contains(&self.0)
    }
    /// Every big tile in pool order.
    pub fn bigs() -> impl Iterator<Item = Self> {
        BIG_NUMBERS.into_iter().map(Self)
    }
    /// Every small tile in ascending order, one copy each.
    pub fn smalls() -> impl Iterator<Item = Self> {
        (1..=SMALL_MAX).map(Self)
    }
}

/// u8 injection
/// anything outside the two pools is rejected
impl TryFrom<u8> for Tile {
    type Error = Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        let tile = Self(n);
        match tile.is_big() || tile.is_small() {
            true => Ok(tile),
            false => Err(Error::InvalidTile(n as i64)),
        }
    }
}
impl TryFrom<i64> for Tile {
    type Error = Error;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u8::try_from(n)
            .map_err(|_| Error::InvalidTile(n))
            .and_then(Self::try_from)
    }
}
impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.0
    }
}

/// str injection
impl TryFrom<&str> for Tile {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidHand(format!("not a number: {:?}", s)))
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_faces() {
        let legal = (0..=u8::MAX)
            .filter_map(|n| Tile::try_from(n).ok())
            .collect::<Vec<Tile>>();
        assert_eq!(legal.len(), 14);
        assert_eq!(legal.iter().filter(|t| t.is_big()).count(), 4);
        assert_eq!(legal.iter().filter(|t| t.is_small()).count(), 10);
    }

    #[test]
    fn rejects_outsiders() {
        assert_eq!(Tile::try_from(0u8), Err(Error::InvalidTile(0)));
        assert_eq!(Tile::try_from(11u8), Err(Error::InvalidTile(11)));
        assert_eq!(Tile::try_from(26u8), Err(Error::InvalidTile(26)));
        assert_eq!(Tile::try_from(-3i64), Err(Error::InvalidTile(-3)));
        assert_eq!(Tile::try_from(1000i64), Err(Error::InvalidTile(1000)));
    }

    #[test]
    fn parses_text() {
        assert_eq!(Tile::try_from(" 75 ").map(u8::from), Ok(75));
        assert!(matches!(Tile::try_from("ten"), Err(Error::InvalidHand(_))));
    }

    #[test]
    fn serializes_as_number() {
        let tile = Tile::try_from(100u8).unwrap();
        assert_eq!(serde_json::to_string(&tile).unwrap(), "100");
        assert!(serde_json::from_str::<Tile>("12").is_err());
    }
}
