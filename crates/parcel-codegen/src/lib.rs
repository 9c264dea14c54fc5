pub mod bundle;
pub mod composer;
pub mod config;
pub mod encoder;
pub mod error;
pub mod fs;
pub mod writer;

// Re-exports
pub use bundle::Bundle;
pub use composer::Composer;
pub use config::GenerationConfig;
pub use error::CodegenError;
pub use fs::{DirFileSystem, FileSystem, OpenFlags, WriteFile};
