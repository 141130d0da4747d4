// Eye on Rivals - API Core
//
// Backend for the competitive-intelligence dashboard: JSON snapshot files,
// Gemini-generated market estimates and article summaries, and the external
// scraper process.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
