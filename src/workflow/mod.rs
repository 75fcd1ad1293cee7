pub mod course_filter;
pub mod weather_enrichment;

pub use course_filter::{CourseFilter, CourseFilterRequest, CourseFilterResult};
pub use weather_enrichment::{WeatherEnrichment, WeatherRequest, WeatherResult};
