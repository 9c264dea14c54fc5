use std::path::Path;

use serde::{Deserialize, Serialize};
use syn::parse::Parser;

/// Controls how a bundle is turned into source (parcel.config.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Name of the generated module; must be a valid Rust identifier
    #[serde(default = "default_module_name")]
    pub module_name: String,

    /// Emit the two-line doc header, including the generation timestamp
    #[serde(default)]
    pub include_docs: bool,

    /// Crate path that exposes the `registry` module
    #[serde(default = "default_registry_crate")]
    pub registry_crate: String,
}

fn default_module_name() -> String {
    "assets".to_string()
}

fn default_registry_crate() -> String {
    "parcel_runtime".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            module_name: default_module_name(),
            include_docs: false,
            registry_crate: default_registry_crate(),
        }
    }
}

impl GenerationConfig {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            ..Self::default()
        }
    }

    /// Enable or disable the doc header.
    pub fn with_docs(mut self, include_docs: bool) -> Self {
        self.include_docs = include_docs;
        self
    }

    pub fn with_registry_crate(mut self, registry_crate: impl Into<String>) -> Self {
        self.registry_crate = registry_crate.into();
        self
    }

    /// Check that `module_name` is a single identifier and `registry_crate`
    /// a plain module path, both written exactly as they will be emitted.
    pub fn validate(&self) -> Result<(), syn::Error> {
        let module: syn::Ident = syn::parse_str(&self.module_name)?;
        if module != self.module_name {
            return Err(syn::Error::new_spanned(
                &module,
                format!("module name {:?} is not a bare identifier", self.module_name),
            ));
        }

        let path = syn::Path::parse_mod_style.parse_str(&self.registry_crate)?;
        let mut rebuilt = String::new();
        if path.leading_colon.is_some() {
            rebuilt.push_str("::");
        }
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        rebuilt.push_str(&segments.join("::"));
        if rebuilt != self.registry_crate {
            return Err(syn::Error::new_spanned(
                &path,
                format!("registry crate {:?} is not a bare module path", self.registry_crate),
            ));
        }

        Ok(())
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
