pub mod draft;
pub mod model;

pub use draft::*;
pub use model::*;

pub(crate) use model::new_id;
