use std::fmt;

/// The arguments of a single call: positional values in order, then
/// keyword `(name, value)` pairs in the order they were passed.
///
/// Equality and hashing are structural. Nothing is normalized, so
/// `(4, 3)` and `(3, 4)` differ, and so do `(4)` and `(x=4)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args<T> {
    pub positional: Vec<T>,
    pub keywords: Vec<(String, T)>,
}

impl<T> Args<T> {
    pub fn new() -> Self {
        Self {
            positional: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn positional(values: Vec<T>) -> Self {
        Self {
            positional: values,
            keywords: Vec::new(),
        }
    }

    pub fn kwarg(mut self, name: impl Into<String>, value: T) -> Self {
        self.keywords.push((name.into(), value));
        self
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Args<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Args<T> {
    fn from(values: Vec<T>) -> Self {
        Args::positional(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Args<T> {
    fn from(values: [T; N]) -> Self {
        Args::positional(values.into())
    }
}

/// Renders as the inside of a call's parentheses: `4,3,x=2`.
impl<T: fmt::Display> fmt::Display for Args<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in &self.positional {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        for (name, value) in &self.keywords {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}={}", name, value)?;
            first = false;
        }
        Ok(())
    }
}
