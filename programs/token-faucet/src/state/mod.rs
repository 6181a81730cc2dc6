pub mod claim_record;
pub mod faucet_config;

pub use claim_record::*;
pub use faucet_config::*;
