pub mod catalog;
pub use catalog::Catalog;

mod error;
pub use error::{Error, IntoError};

pub mod reflect;
pub use reflect::{reflect, ReflectOptions, Reflector};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses pgscaffold's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
