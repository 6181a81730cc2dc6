pub mod initialize_token;
pub mod mint;
pub mod set_authorized_minter;
pub mod views;

pub use initialize_token::*;
pub use mint::*;
pub use set_authorized_minter::*;
pub use views::*;
