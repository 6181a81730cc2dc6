pub mod token_ledger;

pub use token_ledger::*;
