use chrono::NaiveDate;
use thiserror::Error;

/// Rejections of a selected target date. Raised before any request is sent.
///
/// The messages are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Day, month or year is missing or not a number
    #[error("Mohon isi semua field tanggal")]
    MissingField,

    /// The fields do not form a real calendar date
    #[error("Tanggal tidak valid")]
    InvalidDate { day: u32, month: u32, year: i32 },

    /// The date is today or earlier
    #[error("Tanggal target harus di masa depan")]
    NotInFuture { date: NaiveDate },

    /// The date lies beyond the prediction horizon
    #[error(
        "Prediksi maksimal {horizon_days} hari dari sekarang. Pilih tanggal paling lambat {latest_label}"
    )]
    HorizonExceeded {
        horizon_days: u64,
        latest: NaiveDate,
        latest_label: String,
    },
}

/// Failures of the outbound prediction call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// Non-2xx response, with the server's `error` string when it sent one
    #[error("HTTP error: {status}")]
    Status { status: u16, error: Option<String> },

    /// The body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Error text supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Status {
                error: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

/// The response does not match the expected contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Respons server tidak valid: `{0}` tidak tersedia")]
    MalformedResponse(&'static str),
}

/// Failures raised by a chart rendering runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Chart container `{0}` not found")]
    MissingContainer(String),

    #[error("Chart runtime error: {0}")]
    Runtime(String),

    #[error("Chart payload could not be converted: {0}")]
    Payload(String),
}
