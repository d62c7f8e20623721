pub mod tag_filter;

pub use tag_filter::TagFilter;
