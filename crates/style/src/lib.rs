pub mod dimension;
pub mod font;
pub mod stylesheet;
pub mod text;

pub use dimension::{Margins, PageSetup, PageSize};
pub use font::{BuiltinFont, FontFamily, FontStyle, FontWeight};
pub use stylesheet::{StyleDescriptor, StyleRegistry, StyleRole};
pub use text::{TextAlign, VerticalAlign};
