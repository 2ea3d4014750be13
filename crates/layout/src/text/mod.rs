pub mod wrapper;

pub use wrapper::{LineLayout, TextFragment, break_lines};
