// Application layer: the front end's logic over a single ledger.
// Parses raw user input, drives the ledger, persists it and builds reports.

pub mod error;
pub mod reporting;
mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
