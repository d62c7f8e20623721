pub mod profile_response;
pub mod tag_response;

pub use profile_response::*;
pub use tag_response::TagView;
