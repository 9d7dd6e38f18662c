use uuid::Uuid;

/// Identity of a declared function. Two `FnMeta` values built separately
/// never share an id, even when their names match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FnId(Uuid);

impl FnId {
    pub fn new() -> Self {
        FnId(Uuid::new_v4())
    }
}

impl Default for FnId {
    fn default() -> Self {
        Self::new()
    }
}

/// Name, documentation and identity of the innermost function of a stack.
///
/// Wrappers hand out their inner callable's `FnMeta` instead of their own,
/// so a fully decorated `fib` still reports itself as `fib`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnMeta {
    pub id: FnId,
    pub name: String,
    pub doc: Option<String>,
}

impl FnMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FnId::new(),
            name: name.into(),
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}
