pub mod error;
pub mod types;

pub use error::{InspectError, Result};
pub use types::{EntryInfo, EntryKind, HashAlgorithm};
