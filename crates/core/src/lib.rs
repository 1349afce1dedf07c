//! `sysconsole-core` — transport DTOs for the admin-console backend.
//!
//! Every type here mirrors a JSON shape exchanged with the backend. The
//! backend owns the authoritative state; nothing in this crate performs I/O.

pub mod auth;
pub mod error;
pub mod id;
pub mod nullable;
pub mod page;
pub mod status;
pub mod system;
pub mod time;

pub use error::{ModelError, ModelResult};
pub use id::RecordId;
pub use page::{PageQuery, Paginated, PaginationParams};
pub use status::EnableStatus;
pub use time::parse_timestamp;
