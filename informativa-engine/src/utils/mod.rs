pub mod preview;

pub use preview::{collapse_whitespace, context_window, snippet_around};
