//! Table-level correction: correcting target columns and classifying the result.

pub mod classify;
pub mod table_corrector;

pub use classify::{CellClass, CellClassifier, ColumnSummary, Palette, classify};
pub use table_corrector::{
    CorrectedTable, DEFAULT_SHADOW_PREFIX, TableCorrector, TargetColumn, shadow_column_name,
};
