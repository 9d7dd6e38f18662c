use thiserror::Error;

/// Failures raised by wrapped functions and the wrappers themselves.
///
/// Wrappers never translate errors coming from inner layers; whatever the
/// innermost function returns reaches the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    #[error("{function}() needs at least one argument")]
    MissingArgument { function: String },

    #[error("{function}() takes {expected} positional arguments but {got} were given")]
    Arity {
        function: String,
        expected: usize,
        got: usize,
    },

    #[error("{function}() got an unexpected keyword argument '{keyword}'")]
    UnexpectedKeyword { function: String, keyword: String },

    #[error("arithmetic overflow in {function}()")]
    Overflow { function: String },

    #[error("recursive call into {function}() before the stack was bound")]
    UnboundRecursion { function: String },

    #[error("{function}() exceeded the recursion limit of {limit}")]
    RecursionLimit { function: String, limit: usize },

    #[error("recursion handle for {function}() is already bound")]
    AlreadyBound { function: String },
}
