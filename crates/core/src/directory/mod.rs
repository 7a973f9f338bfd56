//! Researcher directory: keyword search, facet filters, sorting and paging

pub mod ports;
pub mod service;

pub use ports::{DirectoryRepository, RawFacets};
pub use service::DirectoryService;
