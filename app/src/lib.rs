//! FILENAME: app/src/lib.rs
//! Apura dashboard application library.
//!
//! Wires the engine, loader, and report crates into a per-operator
//! session, plus the shared logging facility. The `apura` binary is a
//! thin CLI over this library.

pub mod logging;
pub mod session;

pub use session::DashboardSession;
