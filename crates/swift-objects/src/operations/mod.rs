//! Object operations against the Swift v1 API.
//!
//! Each operation maps one options struct onto one HTTP exchange and wraps
//! the response in a typed result with deferred extraction. There is no
//! retry, caching, or partial-failure handling; errors surface to the caller
//! once.

mod objects;
mod pagination;

pub use objects::{CreateReceipt, DownloadResult, GetResult, ListPage, ObjectOperations};
pub use pagination::ObjectPager;
