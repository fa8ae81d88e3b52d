//! Move notation
//!
//! - SAN (standard algebraic notation): parsed and produced against a
//!   `RulesEngine`, since resolving `Nbd2` needs the position
//! - UCI (`e2e4`, `e7e8q`): position independent

pub(crate) mod san;
mod uci;

pub use self::san::{algebraic, disambiguation, parse_algebraic_move};
pub use self::uci::{move_to_uci, parse_uci, split_long_uci};
