pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{KiepertError, Result};
pub use tolerance::Tolerance;
