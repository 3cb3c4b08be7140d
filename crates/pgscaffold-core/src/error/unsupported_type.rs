use super::Error;

/// Error when a native column type has no target type.
///
/// Guessing a type would silently produce wrong code, so reflection of the
/// offending table stops here.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    native: Box<str>,
    hint: Option<Box<str>>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported type: {}", self.native)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an unsupported type error for the given native type name.
    pub fn unsupported_type(native: impl Into<String>, hint: Option<&str>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            native: native.into().into(),
            hint: hint.map(Into::into),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedType(_)))
    }
}
