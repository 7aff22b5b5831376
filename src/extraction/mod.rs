//! The reconciliation engine.
//!
//! Extraction proceeds bottom-up: text normalization feeds header
//! resolution and summary-figure lookup, the date extractor turns remark
//! text into ranges, [`reconcile_file`] ties one file together, and
//! [`run_audit`] merges a batch of files into the year-wide result.

mod aggregate;
mod dates;
mod header;
mod month;
mod normalize;
mod reconcile;
mod summary;

pub use aggregate::run_audit;
pub use dates::{DateExtraction, DateProblem, DateRangeExtractor};
pub use header::{resolve_header, ColumnMap, HeaderResolution};
pub use month::{month_label, month_sort_key};
pub use normalize::{matches_any, normalize, normalize_cell};
pub use reconcile::{reconcile_file, EmployeeUpdate, FileOutcome};
pub use summary::{extract_summary_totals, SummaryTotals};
