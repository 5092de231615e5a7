pub mod decoder;
pub mod document;
pub mod encoder;
pub mod path;
pub(crate) mod value;

pub use decoder::{decode_listing, decode_stored_flow};
pub use document::*;
pub use encoder::encode_flow;
pub use path::{extract_path_params, normalize_path, operation_id};
