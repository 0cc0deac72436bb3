//! Record framing and classification.
//!
//! Turns tailed lines into blank-line delimited records and classifies each
//! record by origin tag and direction marker.

mod assembler;
mod classify;
mod error;
mod timestamp;

pub use assembler::{is_account_login, records, RawRecord, RecordAssembler};
pub use classify::{
    classify, ClassifiedRecord, ClientMethod, Direction, Origin, RecordShape,
    ACCOUNTS_STARTUP_TAG, CLIENT_GRE_TAG, THREAD_LOGGER_TAG,
};
pub use error::ClassifyError;
pub use timestamp::{parse_log_time, LOG_TIME_FORMAT};
