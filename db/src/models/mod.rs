pub mod board_new;
pub mod visit;
pub mod write;

pub use board_new::*;
pub use visit::*;
pub use write::*;
