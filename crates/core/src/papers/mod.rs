//! Paper uploads, edits, listings and ownership-checked downloads

pub mod ports;
pub mod service;
mod validation;

pub use ports::{PaperUpdate, PublicationRepository, StoredPaper};
pub use service::{Download, PaperService};
