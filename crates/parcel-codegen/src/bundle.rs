use std::path::{Component, Path};

/// A named byte payload to embed.
///
/// The name is used verbatim as the output file stem and as the registry key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub name: String,
    pub body: Vec<u8>,
}

impl Bundle {
    pub fn new(name: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Whether the name can serve as a single file stem.
    pub fn has_valid_name(&self) -> bool {
        if self.name.is_empty() || self.name.contains('/') || self.name.contains('\\') {
            return false;
        }

        let mut components = Path::new(&self.name).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }
}
