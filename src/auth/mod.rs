//! Authentication
//!
//! A mock sign-in: any non-empty email and password log in as the demo vendor account, and
//! registration always succeeds after the form validates. The backend sits behind
//! [`AuthBackend`] so a real one can replace the simulation.

mod errors;
mod models;
mod registration;
mod service;
mod session;

pub use errors::*;
pub use models::*;
pub use registration::*;
pub use service::*;
pub use session::*;
