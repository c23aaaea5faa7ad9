use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// Result that is a wrapper of `Result<T, airtable_meta::Error>`
pub type Result<T> = std::result::Result<T, Error>;

/// ErrorKind is all kinds of Error of airtable-meta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// airtable-meta don't know what happened here, and no actions other
    /// than just returning it back. For example, reqwest returns a connect
    /// error before a status code exists.
    Unexpected,

    /// The Airtable API answered with a non-2xx status code.
    ///
    /// The status code is preserved on the error and can be read back via
    /// [`Error::http_status`]. The response body, when available, is part
    /// of the message.
    RequestFailed,

    /// A schema document returned by Airtable could not be parsed into the
    /// typed model.
    ///
    /// This error is returned when a response is missing required members
    /// or carries members of the wrong shape.
    SchemaInvalid,

    /// A name-based lookup over an already-fetched collection found no
    /// match.
    ///
    /// This is a local linear-search miss, distinct from a remote 404
    /// (which is [`ErrorKind::RequestFailed`]).
    NotFound,
}

impl ErrorKind {
    /// Convert self into static str.
    pub fn into_static(self) -> &'static str {
        self.into()
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

impl From<ErrorKind> for &'static str {
    fn from(v: ErrorKind) -> &'static str {
        match v {
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::RequestFailed => "RequestFailed",
            ErrorKind::SchemaInvalid => "SchemaInvalid",
            ErrorKind::NotFound => "NotFound",
        }
    }
}

/// Error is the error struct returned by all airtable-meta functions.
pub struct Error {
    kind: ErrorKind,
    message: String,

    status: Option<u16>,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(status) = self.status {
            write!(f, " ({status})")?;
        }

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            write!(
                f,
                "{}",
                self.context
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        if let Some(source) = &self.source {
            write!(f, ", source: {source}")?;
        }

        Ok(())
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("status", &self.status);
            de.field("context", &self.context);
            de.field("source", &self.source);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "    {k}: {v}")?;
            }
        }
        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "Source: {source:?}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|v| v.as_ref())
    }
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),

            status: None,
            context: Vec::default(),
            source: None,
        }
    }

    /// Add more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Attach the HTTP status code this error was raised for.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Set source for error.
    ///
    /// # Notes
    ///
    /// If the source has been set, we will raise a panic here.
    pub fn set_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "the source error has been set");

        self.source = Some(src.into());
        self
    }

    /// Append extra text to the error message, keeping kind, status,
    /// context and source untouched.
    ///
    /// Used to enrich remote errors with a diagnostic hint without forcing
    /// callers to match on a new error kind.
    pub fn append_message(mut self, suffix: impl AsRef<str>) -> Self {
        self.message.push_str(suffix.as_ref());
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return the HTTP status code carried by this error, if any.
    ///
    /// Only set on errors raised for a non-2xx response.
    pub fn http_status(&self) -> Option<u16> {
        self.status
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for Error {
    fn from(v: serde_json::Error) -> Self {
        Self::new(ErrorKind::SchemaInvalid, "handling json data failed").set_source(v)
    }
}

impl From<reqwest::Error> for Error {
    fn from(v: reqwest::Error) -> Self {
        Self::new(ErrorKind::Unexpected, "http transport failed").set_source(v)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use once_cell::sync::Lazy;

    use super::*;

    static TEST_ERROR: Lazy<Error> = Lazy::new(|| Error {
        kind: ErrorKind::RequestFailed,
        message: "listing bases failed".to_string(),
        status: Some(422),
        context: vec![
            ("url", "https://api.airtable.com/v0/meta/bases".to_string()),
            ("called", "Api::bases".to_string()),
        ],
        source: Some(anyhow!("networking error")),
    });

    #[test]
    fn test_error_display() {
        let s = format!("{}", Lazy::force(&TEST_ERROR));
        assert_eq!(
            s,
            r#"RequestFailed (422), context: { url: https://api.airtable.com/v0/meta/bases, called: Api::bases } => listing bases failed, source: networking error"#
        )
    }

    #[test]
    fn test_error_debug() {
        let s = format!("{:?}", Lazy::force(&TEST_ERROR));
        assert_eq!(
            s,
            r#"RequestFailed => listing bases failed

Context:
    url: https://api.airtable.com/v0/meta/bases
    called: Api::bases

Source: networking error
"#
        )
    }

    #[test]
    fn test_append_message_keeps_kind_and_status() {
        let err = Error::new(ErrorKind::RequestFailed, "not found")
            .with_status(404)
            .append_message("; check your billing plan");

        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert_eq!(err.http_status(), Some(404));
        assert_eq!(err.message(), "not found; check your billing plan");
    }
}
