/// DocumentMetadata value object: the per-run generated parts of a document header
///
/// Name and namespace are fresh on every generation; the namespace embeds a
/// random UUID so two runs never produce the same document namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    name: String,
    namespace: String,
    created: String,
}

impl DocumentMetadata {
    pub fn new(name: String, namespace: String, created: String) -> Self {
        Self {
            name,
            namespace,
            created,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// RFC 3339 creation timestamp
    pub fn created(&self) -> &str {
        &self.created
    }
}
