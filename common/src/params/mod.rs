//! Input parameters for the board endpoints.

mod board_new;
pub use board_new::*;

mod token;
pub use token::*;

mod admin;
pub use admin::*;
