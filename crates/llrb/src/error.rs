use std::error::Error;
use std::fmt;

/// Failure of an order-statistics query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// The operation needs at least one entry.
    EmptyTree,
    /// `floor`/`ceiling` found no qualifying key.
    NoBound,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::EmptyTree => write!(f, "operation requires a non-empty tree"),
            TreeError::NoBound => write!(f, "no key satisfies the requested bound"),
        }
    }
}

impl Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::TreeError;

    #[test]
    fn display_messages() {
        assert_eq!(
            TreeError::EmptyTree.to_string(),
            "operation requires a non-empty tree"
        );
        assert_eq!(
            TreeError::NoBound.to_string(),
            "no key satisfies the requested bound"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(TreeError::NoBound);
        assert!(err.source().is_none());
    }
}
