//! API request handlers.

mod clean;
mod export;
mod health;
mod jobs;
mod layout;
mod models;

pub use clean::*;
pub use export::*;
pub use health::*;
pub use jobs::*;
pub use layout::*;
pub use models::*;
