use derive_more::Display;
use thiserror::Error;

/// An error produced by a device link.
#[derive(Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
pub struct LinkError {
    msg: String,
}

impl LinkError {
    /// Creates a new [`LinkError`].
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    /// The error reported when a command is issued on a closed link.
    #[must_use]
    pub fn closed() -> Self {
        Self::new("Link is closed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!("voltage out of range", format!("{}", LinkError::new("voltage out of range")));
        assert_eq!("Link is closed", format!("{}", LinkError::closed()));
    }
}
