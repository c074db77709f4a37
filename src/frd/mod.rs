mod bytes;
mod error;
mod file;
mod polygon;
mod texture;
mod track;
mod tree;
mod walk;
mod xobj;

/// Bounded little-endian byte cursor.
pub use bytes::Cursor;
/// Error and result aliases.
pub use error::{FrdError, Result};
/// In-memory track file.
pub use file::FrdFile;
/// Poly-object type tags.
pub use polygon::PolyObjTag;
/// Texture block size.
pub use texture::TEXTURE_BLOCK_SIZE;
/// Record tree types.
pub use tree::{RecordKind, RecordNode, RecordTree};
/// Walk entry points and output.
pub use walk::{HEADER_SIZE, WalkResult, Walker, walk_frd};
/// Extra-object type tags.
pub use xobj::XObjTag;
