pub mod core;
pub mod entry;
pub mod utils;

pub use crate::core::{EntryInfo, EntryKind, HashAlgorithm, InspectError, Result};

pub use crate::entry::FileEntry;

#[cfg(feature = "tokio")]
pub use crate::entry::AsyncFileEntry;

pub mod prelude {
    pub use crate::core::{EntryInfo, EntryKind, HashAlgorithm};
    pub use crate::entry::FileEntry;

    #[cfg(feature = "tokio")]
    pub use crate::entry::AsyncFileEntry;
}
