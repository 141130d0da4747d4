pub mod content;
pub mod numbers;

pub use content::*;
pub use numbers::*;
