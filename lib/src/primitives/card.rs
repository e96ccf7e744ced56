use crate::util::*;
use std::{
    fmt,
    str::FromStr,
};

plain_enum_mod!(modesuit, ESuit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
});

impl fmt::Display for ESuit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        } )
    }
}

impl ESuit {
    pub fn letter(self) -> &'static str {
        match self {
            Self::Hearts => "H",
            Self::Spades => "S",
            Self::Diamonds => "D",
            Self::Clubs => "C",
        }
    }
}

impl FromStr for ESuit {
    type Err = &'static str;
    fn from_str(str_esuit: &str) -> Result<Self, Self::Err> {
        match str_esuit.trim().to_lowercase().as_str() {
            "h" | "hearts" => Ok(ESuit::Hearts),
            "s" | "spades" => Ok(ESuit::Spades),
            "d" | "diamonds" => Ok(ESuit::Diamonds),
            "c" | "clubs" => Ok(ESuit::Clubs),
            _ => Err("Could not convert to ESuit"),
        }
    }
}

plain_enum_mod!(moderank, ERank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
});

impl ERank {
    // Two maps to 1, ..., Ace maps to 13. Total order, no ties.
    pub fn value(self) -> isize {
        (self.to_usize() + 1).as_num::<isize>()
    }
}

impl fmt::Display for ERank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        } )
    }
}

plain_enum_mod!(modecard, ECard {
    H2, H3, H4, H5, H6, H7, H8, H9, H10, HJ, HQ, HK, HA,
    S2, S3, S4, S5, S6, S7, S8, S9, S10, SJ, SQ, SK, SA,
    D2, D3, D4, D5, D6, D7, D8, D9, D10, DJ, DQ, DK, DA,
    C2, C3, C4, C5, C6, C7, C8, C9, C10, CJ, CQ, CK, CA,
});

impl ECard {
    pub fn new(esuit: ESuit, erank: ERank) -> ECard {
        ECard::wrapped_from_usize(esuit.to_usize() * ERank::SIZE + erank.to_usize())
    }
    pub fn suit(self) -> ESuit {
        ESuit::wrapped_from_usize(self.to_usize() / ERank::SIZE)
    }
    pub fn rank(self) -> ERank {
        ERank::wrapped_from_usize(self.to_usize() % ERank::SIZE)
    }
}

impl fmt::Display for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit().letter())
    }
}

#[test]
fn test_suit_rank_enumerators() {
    assert_eq!(ESuit::values().count(), 4);
    assert_eq!(ERank::values().count(), 13);
    assert_eq!(ECard::values().count(), 52);
}

#[test]
fn test_card_ctor() {
    use itertools::iproduct;
    for (esuit, erank) in iproduct!(ESuit::values(), ERank::values()) {
        let card = ECard::new(esuit, erank);
        assert_eq!(card.suit(), esuit);
        assert_eq!(card.rank(), erank);
    }
}

#[test]
fn test_card_display() {
    assert_eq!(format!("{}", ECard::H10), "10H");
    assert_eq!(format!("{}", ECard::SA), "AS");
    assert_eq!(format!("{}", ECard::D2), "2D");
    assert_eq!(format!("{}", ECard::CQ), "QC");
}

#[test]
fn test_rank_value() {
    assert_eq!(ERank::Two.value(), 1);
    assert_eq!(ERank::Ten.value(), 9);
    assert_eq!(ERank::Jack.value(), 10);
    assert_eq!(ERank::Queen.value(), 11);
    assert_eq!(ERank::King.value(), 12);
    assert_eq!(ERank::Ace.value(), 13);
}

#[test]
fn test_suit_from_str() {
    for esuit in ESuit::values() {
        assert_eq!(ESuit::from_str(esuit.letter()), Ok(esuit));
        assert_eq!(ESuit::from_str(&esuit.letter().to_lowercase()), Ok(esuit));
    }
    assert!(ESuit::from_str("x").is_err());
    assert!(ESuit::from_str("").is_err());
}
