//! Port traits for data acquisition.

pub mod data_port;
