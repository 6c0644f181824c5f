//! Admin record storage adapters

mod memory;

pub use memory::InMemoryRecordStore;
