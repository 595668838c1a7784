use std::fs;
use std::io;
use std::path::Path;

use recruit_core::FileBlob;

/// Reads a picked file into memory, named by its final path component.
pub fn load_file(path: &Path) -> io::Result<FileBlob> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(FileBlob::new(name, bytes))
}

/// Loads every path in order; fails on the first unreadable file.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> io::Result<Vec<FileBlob>> {
    paths.iter().map(|path| load_file(path.as_ref())).collect()
}
