//! Runtime side of parcel.
//!
//! Files generated by `parcel-codegen` contain a `pub fn init()` that calls
//! [`registry::add_resource`]. The application must call every generated
//! `init()` once at startup, before it reads any resource with
//! [`registry::open`]. Nothing is registered implicitly.

pub mod error;
pub mod registry;

pub use error::RegistryError;
