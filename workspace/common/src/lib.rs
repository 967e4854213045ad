//! Transport types and view logic shared by the dashboard frontend.
//! Everything here is plain data and pure functions so it can be tested
//! natively, away from the browser.

pub mod collection;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod payload;
pub mod record;
pub mod summary;

pub use collection::{Collection, FieldKind, FieldSpec, UnknownCollection};
pub use endpoint::{DEFAULT_BACKEND_URL, SUMMARY_PATH, collection_path, normalize_base_url};
pub use error::{CREATE_FALLBACK_MESSAGE, ClientError, ErrorDetail};
pub use form::{CreateOutcome, ListView, QuickAddAction, QuickAddForm, SubmitStep};
pub use payload::{FormValues, PayloadError, build_payload};
pub use record::{ItemsResponse, MAX_COLUMNS, Record, derive_columns, display_value, row_cells, row_key};
pub use summary::{Summary, display_count, display_currency};
