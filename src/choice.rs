use crate::error::Error;

/// How many big tiles the player asks for.
///
/// Variants are listed in display order, most big tiles first.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Choice {
    FourBig,
    ThreeBig,
    #[default]
    TwoBig,
    OneBig,
    AllSmall,
}

impl Choice {
    pub const fn all() -> &'static [Self] {
        &[
            Self::FourBig,
            Self::ThreeBig,
            Self::TwoBig,
            Self::OneBig,
            Self::AllSmall,
        ]
    }
    pub const fn n_big(&self) -> isize {
        match self {
            Self::FourBig => 4,
            Self::ThreeBig => 3,
            Self::TwoBig => 2,
            Self::OneBig => 1,
            Self::AllSmall => 0,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FourBig => "4 Big",
            Self::ThreeBig => "3 Big",
            Self::TwoBig => "2 Big",
            Self::OneBig => "1 Big",
            Self::AllSmall => "All small",
        }
    }
}

/// isize isomorphism
impl TryFrom<isize> for Choice {
    type Error = Error;
    fn try_from(n: isize) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|choice| choice.n_big() == n)
            .ok_or(Error::InvalidCount(n))
    }
}
impl From<Choice> for isize {
    fn from(choice: Choice) -> isize {
        choice.n_big()
    }
}

/// str injection
/// accepts display labels in any case, or a bare count
impl std::str::FromStr for Choice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<isize>() {
            return Self::try_from(n).map_err(|_| Error::InvalidChoice(s.to_string()));
        }
        Self::all()
            .iter()
            .copied()
            .find(|choice| choice.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidChoice(s.to_string()))
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_two_big() {
        assert_eq!(Choice::default(), Choice::TwoBig);
        assert_eq!(Choice::default().n_big(), 2);
    }

    #[test]
    fn counts_map_both_ways() {
        for &choice in Choice::all() {
            assert_eq!(Choice::try_from(choice.n_big()), Ok(choice));
        }
        assert_eq!(Choice::try_from(5isize), Err(Error::InvalidCount(5)));
        assert_eq!(Choice::try_from(-1isize), Err(Error::InvalidCount(-1)));
    }

    #[test]
    fn parses_labels() {
        assert_eq!("4 Big".parse::<Choice>(), Ok(Choice::FourBig));
        assert_eq!("all small".parse::<Choice>(), Ok(Choice::AllSmall));
        assert_eq!(" 1 big ".parse::<Choice>(), Ok(Choice::OneBig));
        assert_eq!("3".parse::<Choice>(), Ok(Choice::ThreeBig));
        assert_eq!("0".parse::<Choice>(), Ok(Choice::AllSmall));
    }

    #[test]
    fn rejects_nonsense() {
        assert_eq!(
            "5".parse::<Choice>(),
            Err(Error::InvalidChoice("5".to_string()))
        );
        assert_eq!(
            "lots".parse::<Choice>(),
            Err(Error::InvalidChoice("lots".to_string()))
        );
    }

    #[test]
    fn labels_round_trip() {
        for &choice in Choice::all() {
            assert_eq!(choice.to_string().parse::<Choice>(), Ok(choice));
        }
    }
}
