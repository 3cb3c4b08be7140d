use super::Error;

/// Error when reflection discovers no tables at all.
#[derive(Debug)]
pub(super) struct EmptySchema {
    schema: Box<str>,
}

impl std::error::Error for EmptySchema {}

impl core::fmt::Display for EmptySchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no tables were found in schema `{}`", self.schema)
    }
}

impl Error {
    pub fn empty_schema(schema: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptySchema(EmptySchema {
            schema: schema.into().into(),
        }))
    }

    pub fn is_empty_schema(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::EmptySchema(_)))
    }
}
