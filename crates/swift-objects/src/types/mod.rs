//! Types and value objects for Swift object operations.
//!
//! Options structs carry the optional query parameters and headers of one
//! call; they have no identity or lifecycle beyond that call. `Object` and
//! `ObjectMetadata` describe remote resources as reported by the server.

mod copy;
mod create;
mod delete;
mod destination;
mod download;
mod get;
mod list;
mod metadata;
mod object;
mod update;

pub(crate) mod http_date;

pub use copy::CopyOpts;
pub use create::CreateOpts;
pub use delete::DeleteOpts;
pub use destination::Destination;
pub use download::DownloadOpts;
pub use get::GetOpts;
pub use list::ListOpts;
pub use metadata::ObjectMetadata;
pub use object::Object;
pub use update::UpdateOpts;
