pub mod text;

pub use self::text::{extract_json_object, truncate_chars};
