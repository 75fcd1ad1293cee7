pub mod course;
pub mod loaders;
pub mod mountain;
pub mod weather;

pub use course::{Course, Difficulty, MISSING_METRIC};
pub use loaders::{load_json_file, write_jsonl};
pub use mountain::{Mountain, MountainCourse, MountainListing};
pub use weather::WeatherInfo;
