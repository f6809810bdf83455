//! HTTP transport integration tests.
//!
//! Each test starts its own axum server on an ephemeral port and drives it
//! with reqwest.

mod bodies;
mod support;
