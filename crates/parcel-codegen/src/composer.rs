use crate::bundle::Bundle;
use crate::config::GenerationConfig;
use crate::encoder;
use crate::error::CodegenError;
use crate::fs::FileSystem;
use crate::writer;

/// `date`-style layout used for the generation timestamp.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S UTC %Y";

/// Turns bundles into Rust source files that register their payload with
/// the runtime registry.
///
/// A composer holds no state besides its file system and config, so one
/// instance can process any number of bundles in sequence.
pub struct Composer<F> {
    fs: F,
    config: GenerationConfig,
}

impl<F> std::fmt::Debug for Composer<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<F: FileSystem> Composer<F> {
    pub fn new(fs: F, config: GenerationConfig) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Generate `<bundle.name>.rs` and write it through the file system.
    ///
    /// Formatter and file-system errors are returned as-is. Nothing is
    /// opened when the module name or registry path is not a plain
    /// identifier/path, or when the assembled source fails to parse.
    pub fn compose(&self, bundle: &Bundle) -> Result<(), CodegenError> {
        if !bundle.has_valid_name() {
            return Err(CodegenError::InvalidBundleName(bundle.name.clone()));
        }
        self.config.validate()?;

        tracing::debug!(
            bundle = %bundle.name,
            bytes = bundle.body.len(),
            module = %self.config.module_name,
            "composing bundle"
        );

        let source = self.render(bundle);
        let filename = writer::write_source(&self.fs, &bundle.name, &source)?;

        tracing::info!(bundle = %bundle.name, file = %filename, "wrote embedded resource");
        Ok(())
    }

    /// Assemble the unformatted compilation unit for `bundle`.
    ///
    /// Output depends only on the bundle and config, except for the
    /// timestamp line written when docs are enabled.
    pub fn render(&self, bundle: &Bundle) -> String {
        let module = &self.config.module_name;
        let mut template = String::new();

        if self.config.include_docs {
            let now = chrono::Utc::now().format(TIMESTAMP_FORMAT);
            template.push_str(&format!("//! Module {} contains embedded resources\n", module));
            template.push_str(&format!("//! Auto-generated at {}\n", now));
        }

        template.push_str(&format!("pub mod {} {{\n", module));
        template.push('\n');
        template.push_str(&format!("use {}::registry;\n", self.config.registry_crate));
        template.push('\n');
        template.push_str("pub fn init() -> Result<(), registry::RegistryError> {\n");
        template.push_str(&format!("\tregistry::add_resource({:?}, &[\n", bundle.name));
        template.push_str(&encoder::encode(&bundle.body));
        template.push_str("\t])\n");
        template.push_str("}\n");
        template.push_str("}\n");

        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{OpenFlags, WriteFile};
    use pretty_assertions::assert_eq;
    use std::io;

    /// Never opens anything; `render` does not touch the file system.
    struct NoFs;

    impl FileSystem for NoFs {
        fn open_file(&self, name: &str, _: OpenFlags, _: u32) -> io::Result<Box<dyn WriteFile>> {
            Err(io::Error::new(io::ErrorKind::Unsupported, name.to_string()))
        }
    }

    #[test]
    fn test_render_without_docs() {
        let composer = Composer::new(NoFs, GenerationConfig::new("assets"));
        let source = composer.render(&Bundle::new("icons", b"Hi".to_vec()));

        let expected = "pub mod assets {\n\
                        \n\
                        use parcel_runtime::registry;\n\
                        \n\
                        pub fn init() -> Result<(), registry::RegistryError> {\n\
                        \tregistry::add_resource(\"icons\", &[\n\
                        \t\t72, 105,\n\
                        \t])\n\
                        }\n\
                        }\n";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_render_with_docs() {
        let config = GenerationConfig::new("assets").with_docs(true);
        let composer = Composer::new(NoFs, config);
        let source = composer.render(&Bundle::new("icons", vec![1]));

        let lines: Vec<&str> = source.lines().collect();
        assert_eq!(lines[0], "//! Module assets contains embedded resources");
        assert!(lines[1].starts_with("//! Auto-generated at "));
        assert_eq!(lines[2], "pub mod assets {");
    }

    #[test]
    fn test_render_custom_registry_crate() {
        let config = GenerationConfig::new("assets").with_registry_crate("crate::parcel");
        let composer = Composer::new(NoFs, config);
        let source = composer.render(&Bundle::new("x", vec![]));
        assert!(source.contains("use crate::parcel::registry;\n"));
    }

    #[test]
    fn test_render_escapes_name() {
        let composer = Composer::new(NoFs, GenerationConfig::default());
        let source = composer.render(&Bundle::new("say \"hi\"", vec![]));
        assert!(source.contains(r#"registry::add_resource("say \"hi\"", &["#));
        assert!(writer::format_source(&source).is_ok());
    }

    #[test]
    fn test_render_is_valid_rust() {
        let composer = Composer::new(NoFs, GenerationConfig::default());
        for body in [Vec::new(), vec![0u8; 100], (0..=255).collect()] {
            let source = composer.render(&Bundle::new("data", body));
            writer::format_source(&source).unwrap();
        }
    }

    #[test]
    fn test_compose_rejects_bad_name() {
        let composer = Composer::new(NoFs, GenerationConfig::default());
        let err = composer.compose(&Bundle::new("../escape", vec![])).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidBundleName(ref n) if n == "../escape"));
    }

    #[test]
    fn test_compose_passes_io_error_through() {
        let composer = Composer::new(NoFs, GenerationConfig::default());
        let err = composer.compose(&Bundle::new("icons", vec![])).unwrap_err();
        match err {
            CodegenError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::Unsupported);
                assert_eq!(e.to_string(), "icons.rs");
            }
            e => panic!("Expected Io, got: {:?}", e),
        }
    }
}
