pub mod initialize;
pub mod request_tokens;
pub mod set_paused;
pub mod views;

pub use initialize::*;
pub use request_tokens::*;
pub use set_paused::*;
pub use views::*;
