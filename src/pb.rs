//! Generated gRPC bindings for the Vigilio wire contract.

#[allow(clippy::all)]
pub mod vigilio {
    include!(concat!(env!("OUT_DIR"), "/vigilio.rs"));
}
