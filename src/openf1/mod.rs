//! OpenF1 API client and response types.

pub mod http;
pub mod types;

pub use http::{OpenF1Client, OPENF1_BASE_URL};
pub use types::{Driver, PositionRecord, Session, SessionKind};
