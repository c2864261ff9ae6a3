//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expired-entry sweep: removes expired cache entries at configured
//!   intervals, via a handle that cancels the task on shutdown

mod sweeper;

pub use sweeper::{spawn_sweep_task, SweepHandle};
