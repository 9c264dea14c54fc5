use std::io;

use crate::error::CodegenError;
use crate::fs::{FileSystem, OpenFlags, WriteFile, OUTPUT_MODE};

/// File extension of generated sources.
pub const SOURCE_EXTENSION: &str = "rs";

/// Parse and pretty-print a Rust compilation unit.
///
/// Fails with [`CodegenError::Syntax`] if `source` is not a valid file.
pub fn format_source(source: &str) -> Result<String, CodegenError> {
    let file = syn::parse_file(source)?;
    Ok(prettyplease::unparse(&file))
}

/// Output file name for a bundle.
pub fn output_filename(name: &str) -> String {
    format!("{}.{}", name, SOURCE_EXTENSION)
}

/// Format `source` and persist it as `<name>.rs` through `fs`.
///
/// The file is closed on every path once opened. A write error takes
/// precedence over a close error. A failed write leaves whatever was
/// written on disk.
pub fn write_source<F: FileSystem>(
    fs: &F,
    name: &str,
    source: &str,
) -> Result<String, CodegenError> {
    let formatted = format_source(source)?;
    let filename = output_filename(name);

    let mut file = fs.open_file(&filename, OpenFlags::WRITE_CREATE_TRUNCATE, OUTPUT_MODE)?;
    let written = write_all(file.as_mut(), formatted.as_bytes());
    let closed = file.close();
    written.and(closed)?;

    Ok(filename)
}

fn write_all(file: &mut dyn WriteFile, mut buf: &[u8]) -> io::Result<()> {
    while !buf.is_empty() {
        match file.write(buf) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "failed to write whole buffer",
                ))
            }
            Ok(n) => buf = &buf[n..],
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
