//! Generated prost/tonic code for the backend service contracts.
//!
//! Sources are the `.proto` files under `proto/` at the repository root. The
//! generated output is checked in so that builds do not require `protoc`;
//! regenerate with `tonic-build` when a contract changes.

pub mod order;
pub mod payment;
