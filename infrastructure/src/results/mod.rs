//! Result record adapters

mod json_store;

pub use json_store::JsonResultStore;
