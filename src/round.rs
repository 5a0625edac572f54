use crate::Target;
use crate::tiles::Hand;

/// One dealt round: the six tiles and the number to reach with them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Round {
    hand: Hand,
    target: Target,
}

impl Round {
    pub fn new(hand: Hand, target: Target) -> Self {
        Self { hand, target }
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn target(&self) -> Target {
        self.target
    }
}

impl From<(Hand, Target)> for Round {
    fn from((hand, target): (Hand, Target)) -> Self {
        Self::new(hand, target)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}] -> {}", self.hand, self.target)
    }
}
