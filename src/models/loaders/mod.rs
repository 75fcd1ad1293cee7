pub mod json_loader;

pub use json_loader::{load_json_file, write_jsonl};
