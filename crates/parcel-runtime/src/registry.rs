use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use crate::error::RegistryError;

type Resources = HashMap<String, &'static [u8]>;

static RESOURCES: OnceLock<RwLock<Resources>> = OnceLock::new();

fn resources() -> &'static RwLock<Resources> {
    RESOURCES.get_or_init(|| RwLock::new(HashMap::new()))
}

// Entries are only ever inserted whole, so a poisoned lock still guards a
// consistent map.
fn read() -> RwLockReadGuard<'static, Resources> {
    resources().read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Resources> {
    resources().write().unwrap_or_else(PoisonError::into_inner)
}

/// Register `bytes` under `name`.
///
/// Registering identical bytes under a name that is already present is a
/// no-op, so a generated `init()` may safely run more than once. Different
/// bytes under an existing name are rejected with
/// [`RegistryError::Duplicate`] and the first registration is kept.
pub fn add_resource(name: &str, bytes: &'static [u8]) -> Result<(), RegistryError> {
    let mut map = write();
    if let Some(existing) = map.get(name) {
        if *existing == bytes {
            return Ok(());
        }
        return Err(RegistryError::Duplicate {
            name: name.to_string(),
        });
    }

    map.insert(name.to_string(), bytes);
    tracing::debug!(resource = name, bytes = bytes.len(), "registered resource");
    Ok(())
}

/// Look up the bytes registered under `name`.
pub fn open(name: &str) -> Result<&'static [u8], RegistryError> {
    read()
        .get(name)
        .copied()
        .ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })
}

/// Whether a resource is registered under `name`.
pub fn contains(name: &str) -> bool {
    read().contains_key(name)
}

/// All registered names, sorted.
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = read().keys().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // The registry is process-wide; each test uses its own names.

    #[test]
    fn test_add_and_open() {
        add_resource("unit.add_open", b"hello").unwrap();
        assert_eq!(open("unit.add_open").unwrap(), b"hello");
        assert!(contains("unit.add_open"));
    }

    #[test]
    fn test_open_missing() {
        let err = open("unit.missing").unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotFound {
                name: "unit.missing".to_string()
            }
        );
        assert!(!contains("unit.missing"));
    }

    #[test]
    fn test_same_bytes_twice_is_noop() {
        add_resource("unit.idempotent", &[1, 2, 3]).unwrap();
        add_resource("unit.idempotent", &[1, 2, 3]).unwrap();
        assert_eq!(open("unit.idempotent").unwrap(), &[1u8, 2, 3]);
    }

    #[test]
    fn test_different_bytes_rejected() {
        add_resource("unit.conflict", b"first").unwrap();
        let err = add_resource("unit.conflict", b"second").unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate { ref name } if name == "unit.conflict"));
        assert_eq!(open("unit.conflict").unwrap(), b"first");
    }

    #[test]
    fn test_empty_resource() {
        add_resource("unit.empty", &[]).unwrap();
        assert!(open("unit.empty").unwrap().is_empty());
    }

    #[test]
    fn test_names_sorted() {
        add_resource("unit.names.b", b"b").unwrap();
        add_resource("unit.names.a", b"a").unwrap();
        let names: Vec<String> = names()
            .into_iter()
            .filter(|n| n.starts_with("unit.names."))
            .collect();
        assert_eq!(names, vec!["unit.names.a", "unit.names.b"]);
    }
}
