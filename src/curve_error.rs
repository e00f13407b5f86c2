use std::fmt::{self, Display};

/// Broad category of a [`CurveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveErrorKind {
    /// The caller passed something the algorithms cannot work with, e.g. an
    /// empty control polygon or fewer than two samples.
    InvalidInput,
    /// A session file could not be read, parsed or written.
    Config,
}

impl Display for CurveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveErrorKind::InvalidInput => write!(f, "invalid input"),
            CurveErrorKind::Config => write!(f, "config"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurveError {
    kind: CurveErrorKind,
    message: String,
    context: Vec<String>,
}

pub type CurveResult<T> = Result<T, CurveError>;

impl CurveError {
    pub fn new(kind: CurveErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Vec::new(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(CurveErrorKind::InvalidInput, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(CurveErrorKind::Config, message)
    }

    pub fn kind(&self) -> CurveErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Context lines, innermost first.
    pub fn context(&self) -> &[String] {
        &self.context
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }
}

impl Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        for line in &self.context {
            write!(f, "\n  while {}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for CurveError {}

impl From<&str> for CurveError {
    fn from(message: &str) -> Self {
        CurveError::invalid_input(message)
    }
}

impl From<std::io::Error> for CurveError {
    fn from(error: std::io::Error) -> Self {
        CurveError::config(error.to_string())
    }
}

impl From<serde_yaml::Error> for CurveError {
    fn from(error: serde_yaml::Error) -> Self {
        CurveError::config(error.to_string())
    }
}

/// Attaches context to the error of a [`CurveResult`] with a shared closure,
/// so one closure can decorate every fallible step of an operation.
pub trait WithContext<T> {
    fn with_context<F>(self, context: &F) -> CurveResult<T>
    where
        F: Fn(CurveError) -> CurveError;
}

impl<T> WithContext<T> for CurveResult<T> {
    fn with_context<F>(self, context: &F) -> CurveResult<T>
    where
        F: Fn(CurveError) -> CurveError,
    {
        self.map_err(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing() -> CurveResult<()> {
        Err("no control points".into())
    }

    #[test]
    fn test_context_is_appended_in_order() {
        let inner = |err: CurveError| err.with_context("evaluating");
        let outer = |err: CurveError| err.with_context("sampling");

        let err = failing()
            .with_context(&inner)
            .with_context(&outer)
            .unwrap_err();

        assert_eq!(err.kind(), CurveErrorKind::InvalidInput);
        assert_eq!(err.message(), "no control points");
        assert_eq!(err.context(), ["evaluating", "sampling"]);
        assert_eq!(
            err.to_string(),
            "invalid input: no control points\n  while evaluating\n  while sampling"
        );
    }

    #[test]
    fn test_io_error_maps_to_config() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml");
        let err: CurveError = io.into();
        assert_eq!(err.kind(), CurveErrorKind::Config);
    }
}
