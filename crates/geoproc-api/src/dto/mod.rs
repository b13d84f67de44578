//! Data transfer objects for request and response bodies.

pub mod response;
