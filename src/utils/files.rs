use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reduce an upload-supplied filename to something safe to join onto a
/// storage directory. Keeps ASCII alphanumerics and `.-_`, maps
/// whitespace to `_`, drops everything else including path separators,
/// then trims leading/trailing dots so the result can never climb out
/// of the directory or hide as a dotfile.
///
/// Returns an empty string for names with no salvageable characters;
/// callers treat that the same as "no file supplied".
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            out.push(c);
        } else if c.is_whitespace() {
            out.push('_');
        }
    }

    out.trim_matches('.').to_string()
}

fn tmp_sibling(path: &Path) -> io::Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    Ok(path.with_file_name(format!("{}.tmp", file_name.to_string_lossy())))
}

/// Write `bytes` to `path` without a half-written file ever being
/// visible under the final name: write a `.tmp` sibling, then rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = tmp_sibling(path)?;
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}

/// Move an uploaded temp file into the storage directory with the same
/// scoped-write discipline as [`write_atomic`]. A plain copy is used
/// because the multipart temp file may live on a different filesystem.
pub fn store_upload(src: &Path, dest: &Path) -> io::Result<()> {
    let tmp = tmp_sibling(dest)?;
    fs::copy(src, &tmp)?;
    fs::rename(&tmp, dest)
}
