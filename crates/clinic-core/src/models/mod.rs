//! Domain models for the clinic dashboard.

mod patient;
mod user;
mod visit;

pub use patient::*;
pub use user::*;
pub use visit::*;
