pub mod constants;
pub mod lifecycle;
pub mod particle;
pub mod playback;
pub mod pointer;
pub mod scene;
pub mod show;
pub mod store;

pub use lifecycle::*;
pub use particle::*;
pub use playback::*;
pub use pointer::*;
pub use scene::*;
pub use show::*;
pub use store::*;
