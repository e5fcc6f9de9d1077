//! Concrete adapter implementations of the port traits.

pub mod json_adapter;
