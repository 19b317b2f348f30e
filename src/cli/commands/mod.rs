//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Shared sign-in, vehicle lookup,
//! and wake handling live in [`session`].

pub mod alert;
pub mod auth;
pub mod charge;
pub mod climate;
pub mod dispatcher;
pub mod location;
pub mod lock;
pub mod session;
pub mod status;
pub mod wake;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
