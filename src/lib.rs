//! directed-reads - validation and scope resolution for directed read
//! replica preferences
//!
//! A read may carry a preference naming the replicas allowed (or not
//! allowed) to serve it. This crate verifies such preferences and picks
//! the effective one from client and request scopes before the read is
//! dispatched.

pub mod cli;
pub mod directed_read;
pub mod observability;
