//! Image pipeline: decode, grayscale, thumbnail, JPEG encode.
//!
//! Every stage is a pure function over in-memory pixel grids; nothing here
//! touches the network. Transforms allocate fresh grids and never mutate
//! their input.

pub mod decode;
pub mod encode;
pub mod grayscale;
pub mod thumbnail;

pub use decode::decode;
pub use encode::encode_jpeg;
pub use grayscale::to_grayscale;
pub use thumbnail::{thumbnail, MAX_THUMBNAIL_EDGE};
