pub mod orchestration;

pub use orchestration::{extract, run_export, ExportArgs, ExportReport, Extraction};
