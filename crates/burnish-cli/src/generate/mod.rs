//! Text generation seam for custom exports.

mod provider;
mod stub;

pub use provider::{GeneratorError, TextGenerator};
pub use stub::StubGenerator;
