pub mod csv_source;
pub mod error;
pub mod pipeline;
pub mod run;
pub mod source;
pub mod sqlite_source;
pub mod writer;

pub use csv_source::CsvSource;
pub use error::{IngestError, Result};
pub use pipeline::{clean_batch, clean_records, CategoryCount, CleanOutcome, CleanReport};
pub use run::{run_source, SourceReport};
pub use source::{RawRecord, RecordSource, SourceBatch};
pub use sqlite_source::SqliteSource;
pub use writer::write_clean_csv;
