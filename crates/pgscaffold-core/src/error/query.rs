use super::Error;

/// Error when a catalog query or a row decode fails.
///
/// This wraps errors from the underlying database client as well as
/// malformed catalog values, such as an index key that cannot be decoded.
#[derive(Debug)]
pub(super) struct QueryError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("catalog query failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates a query error from a driver error.
    pub fn query(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Query(QueryError {
            inner: Box::new(err),
        }))
    }

    /// Creates a query error from a message describing a malformed catalog value.
    pub fn query_message(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Query(QueryError {
            inner: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a query error.
    pub fn is_query(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Query(_)))
    }
}
