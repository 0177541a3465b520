//! Shared types for the personnel service
//!
//! Domain models, the unified error system and small utilities used by the
//! server and by anything that talks to its API.

pub mod error;
pub mod models;
pub mod util;
