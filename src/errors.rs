/// Errors that can occur when operating on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqListError {
    /// The operation has no meaning on a list without elements.
    EmptyContainer {
        /// Name of the rejected operation.
        op: &'static str,
    },
}

impl SeqListError {
    pub(crate) fn empty(op: &'static str) -> Self {
        SeqListError::EmptyContainer { op }
    }
}

impl core::fmt::Display for SeqListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SeqListError::EmptyContainer { op } => write!(f, "empty list: cannot {op}"),
        }
    }
}

impl std::error::Error for SeqListError {}

pub type Result<T> = core::result::Result<T, SeqListError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pop_back", "empty list: cannot pop_back")]
    #[case("sort", "empty list: cannot sort")]
    #[case("unique", "empty list: cannot unique")]
    fn message_names_operation(#[case] op: &'static str, #[case] expected: &str) {
        assert_eq!(SeqListError::empty(op).to_string(), expected);
    }

    #[rstest]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(SeqListError::empty("reverse"));
        assert!(err.to_string().contains("reverse"));
    }
}
