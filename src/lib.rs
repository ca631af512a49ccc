//! resgen - embed binary resources in native C++ builds.
//!
//! Two stages: the packer turns files into a JSON map of byte-array
//! definitions, the generator merges such maps into a source/header pair
//! exposing a lookup-by-name registry.

pub mod cli;
pub mod core;
