use super::Error;

/// Error when the database cannot be reached.
///
/// This occurs when:
/// - The connection cannot be opened (bad host, refused, authentication failure)
/// - The connection opened but the initial ping failed
///
/// Raised before any IR is built.
#[derive(Debug)]
pub(super) struct ConnectivityError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectivityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectivityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("cannot connect to database: ")?;
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
    /// Creates a connectivity error from a driver error.
    pub fn connectivity(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Connectivity(ConnectivityError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a connectivity error.
    pub fn is_connectivity(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Connectivity(_)))
    }
}
