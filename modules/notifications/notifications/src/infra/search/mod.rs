//! Search infrastructure shared by every entity search.

pub mod pager;
pub mod sort;

pub use pager::{LimitCfg, SearchPager};
pub use sort::{SortExt, SortMap};
