use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Owner read/write only.
pub const OUTPUT_MODE: u32 = 0o600;

/// How a file should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenFlags {
    pub write: bool,
    pub create: bool,
    pub truncate: bool,
}

impl OpenFlags {
    /// Write-only, create if missing, truncate if present.
    pub const WRITE_CREATE_TRUNCATE: Self = Self {
        write: true,
        create: true,
        truncate: true,
    };
}

/// An open, writable file handle.
pub trait WriteFile {
    /// Write some bytes, returning how many were accepted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Release the handle, reporting any deferred error.
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// The file-system capability the writer persists through.
pub trait FileSystem {
    fn open_file(&self, name: &str, flags: OpenFlags, mode: u32) -> io::Result<Box<dyn WriteFile>>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn open_file(&self, name: &str, flags: OpenFlags, mode: u32) -> io::Result<Box<dyn WriteFile>> {
        (**self).open_file(name, flags, mode)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn open_file(&self, name: &str, flags: OpenFlags, mode: u32) -> io::Result<Box<dyn WriteFile>> {
        (**self).open_file(name, flags, mode)
    }
}

/// Resolves names relative to a root directory on the host file system.
#[derive(Debug, Clone)]
pub struct DirFileSystem {
    root: PathBuf,
}

impl DirFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSystem for DirFileSystem {
    fn open_file(&self, name: &str, flags: OpenFlags, mode: u32) -> io::Result<Box<dyn WriteFile>> {
        let mut options = std::fs::OpenOptions::new();
        options
            .write(flags.write)
            .create(flags.create)
            .truncate(flags.truncate);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let file = options.open(self.root.join(name))?;
        Ok(Box::new(HostFile(file)))
    }
}

struct HostFile(std::fs::File);

impl WriteFile for HostFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut self.0, buf)
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        // Dropping a File discards close errors; syncing surfaces them first.
        self.0.sync_all()
    }
}
