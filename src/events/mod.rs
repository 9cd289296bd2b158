pub mod buttons;
pub mod pointer;

pub use buttons::*;
pub use pointer::*;
