pub mod actions;
pub mod models;

pub use actions::load_patents;
pub use models::{Patent, PatentsResponse, PATENT_FILES};
