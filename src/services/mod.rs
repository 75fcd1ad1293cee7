pub mod difficulty;
pub mod extractor;
pub mod kb_builder;
pub mod ranking;
pub mod region_filter;

pub use difficulty::{classify, classify_all};
pub use extractor::extract_courses;
pub use kb_builder::{build_course_documents, KbBuildOptions, KbBuildOutput};
pub use region_filter::{extract_address, RegionFilter};
