//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `actor add`: Register an actor
//! - `resource add`: Register a resource for an owner
//! - `reserve`: Request a reservation
//! - `approve`: Approve or reject a waiting reservation
//! - `cancel`: Cancel a waiting reservation
//! - `show`: Show one reservation
//! - `list`: List reservations by bucket with pagination
//! - `nearest`: Nearest past and upcoming approved reservation per resource
//! - `eligible`: Check for a completed reservation

pub mod actor;
pub mod approve;
pub mod cancel;
pub mod eligible;
pub mod list;
pub mod nearest;
pub mod reserve;
pub mod resource;
pub mod show;

pub use actor::ActorCommand;
pub use approve::ApproveCommand;
pub use cancel::CancelCommand;
pub use eligible::EligibleCommand;
pub use list::ListCommand;
pub use nearest::NearestCommand;
pub use reserve::ReserveCommand;
pub use resource::ResourceCommand;
pub use show::ShowCommand;
