//! Доменная модель crapless craps: числа, кубики, фишки, ставки, выплаты, стол.

pub mod bets;
pub mod chips;
pub mod dice;
pub mod errors;
pub mod number;
pub mod payout;
pub mod table;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::BetKey и т.п.
pub use bets::*;
pub use chips::*;
pub use dice::*;
pub use errors::*;
pub use number::*;
pub use payout::*;
pub use table::*;
