//! Core resource logic - sanitization, hex codec, packing, merging, rendering.

pub mod codegen;
pub mod config;
pub mod generator;
pub mod hexlit;
pub mod ident;
pub mod merge;
pub mod output;
pub mod packer;
pub mod registry;
pub mod types;
