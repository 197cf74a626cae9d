//! User interface module - terminal output.
//!
//! The tool is non-interactive; everything user-facing goes through the
//! `formatter` functions re-exported here.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_report, display_status, display_success,
    format_extraction_start, format_report,
};
