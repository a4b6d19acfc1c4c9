#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod export;
mod memory;

pub use export::{EXPORT_VERSION, ExportError, export_sessions};
pub use memory::InMemorySessionRepository;
