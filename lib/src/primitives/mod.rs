pub mod card;
pub mod deck;
pub mod eplayerindex;
pub mod hand;
pub mod scoreboard;
pub mod trick;
pub mod tricksequence;

pub use self::{card::*, deck::*, eplayerindex::*, hand::*, scoreboard::*, trick::*, tricksequence::*};
