pub mod config;
pub mod error;
pub mod tolerance;
pub mod traits;

pub use config::RevealConfig;
pub use error::{RevealError, Result};
pub use tolerance::Tolerance;
