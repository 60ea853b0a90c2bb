pub mod config;
pub mod error;
pub mod listing;
pub mod msg;
pub mod printers;
pub mod writer;

pub use config::{Config, DEFAULT_NAME};
pub use error::Error;
pub use listing::Listing;
pub use printers::{AsmPrinter, Builder, Printer, SymbolPrinter};
