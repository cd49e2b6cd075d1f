pub mod constants;
pub mod ease;
pub mod error;
pub mod field;
pub mod glyphs;
pub mod magnet;
pub mod palette;
pub mod pointer;
pub mod rays;

pub use constants::*;
pub use ease::*;
pub use error::*;
pub use field::*;
pub use glyphs::*;
pub use magnet::*;
pub use palette::*;
pub use pointer::*;
pub use rays::*;
