pub mod hash;
pub mod mime;
pub mod path;
pub mod text;

pub use hash::digest_bytes;
pub use mime::sniff_mime;
pub use path::{base_name, extension_of, is_hidden, stem_of};
pub use text::is_likely_text;
