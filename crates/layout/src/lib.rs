use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Node has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Table row {row} has {found} cells, expected {expected}.")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Table declares {found} column widths for {expected} columns.")]
    ColumnCountMismatch { expected: usize, found: usize },
    #[error("Table has no header row.")]
    EmptyTable,
    #[error("{0} cannot be placed inside a side-by-side group.")]
    UnsupportedNesting(&'static str),
}

pub mod algorithms;
pub mod document;
pub mod drawing;
pub mod elements;
pub mod engine;
pub mod fonts;
pub mod markup;
pub(crate) mod nodes;
pub mod output;
pub mod table;
pub mod text;

pub use self::document::Document;
pub use self::drawing::{Drawing, Group, ShapeSink, TextAnchor, TextStyle};
pub use self::elements::{Flowable, Paragraph, Rule, SideBySide};
pub use self::engine::LayoutEngine;
pub use self::output::{LaidOutPage, OutlineEntry, Paint, PaintOp, Stroke, TextRun};
pub use self::table::{CellRange, CellStyle, CellStyleKind, Table, TableStyle};

pub use geo_types::{Color, Point, Rect, Size};
