use crate::util::*;
use arrayvec::ArrayVec;
use std::{fmt, ops::Index, slice, str::FromStr};

plain_enum_mod!(modepi, EPlayerIndex {
    EPI0, EPI1, EPI2, EPI3,
});
define_static_value!(pub SStaticEPI0, EPlayerIndex, EPlayerIndex::EPI0);

impl fmt::Display for EPlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_usize())
    }
}

impl FromStr for EPlayerIndex {
    type Err = &'static str;
    fn from_str(str_epi: &str) -> Result<Self, Self::Err> {
        usize::from_str(str_epi).ok()
            .and_then(|n_epi| {
                EPlayerIndex::checked_from_usize(n_epi)
            })
            .ok_or("Could not convert to EPlayerIndex")
    }
}

#[derive(Clone)]
pub struct SPlayersInRound<T, PlayerIndex: TStaticOrDynamicValue<EPlayerIndex>+Copy> {
    pub epi_first: PlayerIndex,
    vect: ArrayVec<T, {EPlayerIndex::SIZE}>,
}

impl<T: fmt::Debug, PlayerIndex: TStaticOrDynamicValue<EPlayerIndex>+Copy> fmt::Debug for SPlayersInRound<T, PlayerIndex> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for epi in EPlayerIndex::values() {
            if epi==self.epi_first.value() {
                write!(f, ">")?;
            } else {
                write!(f, " ")?;
            }
            match self.get(epi) {
                None => {write!(f, "__")?;}
                Some(t) => {write!(f, "{t:?}")?;}
            }
        }
        write!(f, "")
    }
}

pub struct SPlayersInRoundIterator<InternalIter> {
    iter: InternalIter,
    n_epi: usize,
}

impl<InternalIter: Iterator> Iterator for SPlayersInRoundIterator<InternalIter> {
    type Item = (EPlayerIndex, InternalIter::Item);
    fn next(&mut self) -> Option<(EPlayerIndex, InternalIter::Item)> {
        let item_next = self.iter.next()
            .map(|t| (EPlayerIndex::wrapped_from_usize(self.n_epi), t));
        self.n_epi += 1;
        item_next
    }
}

impl<T: std::fmt::Debug, PlayerIndex: TStaticOrDynamicValue<EPlayerIndex>+Copy> Index<EPlayerIndex> for SPlayersInRound<T, PlayerIndex> {
    type Output = T;
    fn index(&self, epi: EPlayerIndex) -> &T {
        unwrap!(self.get(epi))
    }
}

impl<T: std::fmt::Debug, PlayerIndex: TStaticOrDynamicValue<EPlayerIndex>+Copy> SPlayersInRound<T, PlayerIndex> {
    pub fn new(epi_first: PlayerIndex) -> Self {
        SPlayersInRound {
            epi_first,
            vect: ArrayVec::new(),
        }
    }
    pub fn new_full(epi_first: PlayerIndex, at: [T; EPlayerIndex::SIZE]) -> Self {
        SPlayersInRound {
            epi_first,
            vect: ArrayVec::from(at),
        }
    }
    pub fn first_playerindex(&self) -> EPlayerIndex {
        self.epi_first.value()
    }
    pub fn current_playerindex(&self) -> Option<EPlayerIndex> {
        if_then_some!(
            !self.is_full(),
            self.first_playerindex().wrapping_add(self.size())
        )
    }
    pub fn size(&self) -> usize {
        self.vect.len()
    }
    pub fn is_full(&self) -> bool {
        self.size()==EPlayerIndex::SIZE
    }
    pub fn is_empty(&self) -> bool {
        self.size()==0
    }
    pub fn push(&mut self, t: T) {
        assert!(!self.is_full());
        self.vect.push(t);
    }
    pub fn first(&self) -> &T {
        debug_assert_eq!(self.position(self.first_playerindex()), 0);
        unwrap!(self.vect.first())
    }
    pub fn iter(&self) -> SPlayersInRoundIterator<slice::Iter<T>> {
        SPlayersInRoundIterator {
            iter: self.vect.iter(),
            n_epi: self.epi_first.value().to_usize(),
        }
    }
    fn position(&self, epi: EPlayerIndex) -> usize {
        epi.wrapped_difference_usize(self.epi_first.value())
    }
    pub fn get(&self, epi: EPlayerIndex) -> Option<&T> {
        self.vect.get(self.position(epi))
    }
}
