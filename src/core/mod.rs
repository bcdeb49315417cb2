// Core modules: error modeling, the last-error slot, and bounded buffer copies.
pub mod buffer;
pub mod error;
pub mod last_error;
