//! API Models Module
//!
//! Request and response DTOs for the cache HTTP API.

mod requests;
mod responses;

pub use requests::{InvalidateRequest, SetRequest};
pub use responses::{
    ClearResponse, DeleteResponse, ErrorResponse, GetResponse, HealthResponse,
    InvalidateResponse, SetResponse, StatsResponse,
};
