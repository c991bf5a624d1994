use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a file atomically: fill a temp file in the destination directory,
/// then persist it over `dest`.
///
/// # Errors
/// Returns an error if the parent directory cannot be created, the writer
/// closure fails, or the temp file cannot be persisted.
pub fn write_atomic<T, F>(dest: &Path, write: F) -> io::Result<T>
where
    F: FnOnce(&mut dyn Write) -> io::Result<T>,
{
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        std::fs::create_dir_all(parent)?;
    }
    let mut tmp = NamedTempFile::new_in(parent)?;
    let out = {
        let mut w = BufWriter::new(tmp.as_file_mut());
        let out = write(&mut w)?;
        w.flush()?;
        out
    };
    // Persist with short retries; Windows may hold the old file briefly.
    let mut last_err: Option<io::Error> = None;
    for attempt in 0..5 {
        match tmp.persist(dest) {
            Ok(_) => return Ok(out),
            Err(pe) => {
                last_err = Some(pe.error);
                tmp = pe.file;
                std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
            }
        }
    }
    Err(last_err.unwrap_or_else(|| io::Error::other("failed to persist file")))
}
