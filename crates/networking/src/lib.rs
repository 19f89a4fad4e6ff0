//! Networking utilities for OPTATV
//!
//! This crate observes the environment's connectivity. It performs no
//! requests of its own.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connectivity;

pub use connectivity::{
    ConnectivityMonitor, ListenerId, ManualNetwork, NetworkEnvironment, NetworkEvent,
    NetworkListener,
};
