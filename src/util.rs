/// Filesystem primitives shared by the scaffolder.
pub mod fs {
    use std::fs::{self, OpenOptions};
    use std::io::{self, ErrorKind};

    use camino::Utf8Path;

    /// Ensure a directory exists, creating it recursively if needed.
    ///
    /// Returns `true` only when this call created the leaf directory. A
    /// directory that appears concurrently between the check and the create
    /// counts as already present.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        create_leaf_dir(path)
    }

    fn create_leaf_dir(path: &Utf8Path) -> io::Result<bool> {
        match fs::create_dir(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Ensure an empty file exists at `path`, creating missing parents first.
    ///
    /// Anything already at `path` is left alone, so existing content is never
    /// truncated. Returns `true` when this call created the file.
    pub fn ensure_empty_file(path: &Utf8Path) -> io::Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
            ensure_dir(parent)?;
        }

        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err),
        }
    }

}
