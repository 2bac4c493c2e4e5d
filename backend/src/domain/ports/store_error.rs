//! Error type shared by the storage ports.

use super::define_port_error;

define_port_error! {
    /// Failures raised by storage adapters. Absence of a record is never an
    /// error; ports return `Ok(None)` or `Ok(false)` instead.
    pub enum StoreError {
        /// Backing store cannot serve requests.
        Unavailable { message: String } => "store unavailable: {message}",
        /// A uniqueness constraint was violated.
        Conflict { message: String } => "store conflict: {message}",
    }
}
