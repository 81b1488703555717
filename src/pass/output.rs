//! Batch delivery: stdout, file export, clipboard.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::SecureBufWriter;

/// Export file name used when the caller gives a directory or nothing.
pub const DEFAULT_EXPORT_NAME: &str = "passwords.txt";

/// Print each password on its own line.
pub fn to_stdout(batch: &[String]) {
    let stdout = std::io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());
    for password in batch {
        let _ = out.write_all(password.as_bytes());
        let _ = out.write_all(b"\n");
    }
}

/// Write the batch newline-joined to `path`, replacing any previous
/// export. Missing parent directories are created.
pub fn to_file(batch: &[String], path: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    let mut out = SecureBufWriter::new(file);
    for password in batch {
        out.write_all(password.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Copy the batch newline-joined to the system clipboard.
///
/// Failures are swallowed: the batch still exists and the caller may
/// deliver it elsewhere. Returns whether the copy succeeded so the UI
/// can acknowledge it.
pub fn to_clipboard(batch: &[String]) -> bool {
    let mut joined = batch.join("\n");
    let copied = match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(joined.clone()) {
            Ok(()) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                true
            }
            Err(_) => false,
        },
        Err(_) => false,
    };
    joined.zeroize();
    copied
}

/// Resolve a user-supplied export target the way `-o` accepts it: bare
/// `.` or a trailing-slash directory gets the default file name, and a
/// `.txt` extension is ensured otherwise.
pub fn resolve_export_path(path: &str) -> String {
    if path.is_empty() || path == "." {
        DEFAULT_EXPORT_NAME.to_string()
    } else if path.ends_with('/') {
        format!("{path}{DEFAULT_EXPORT_NAME}")
    } else if !path.ends_with(".txt") {
        format!("{path}.txt")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_resolution() {
        assert_eq!(resolve_export_path("."), "passwords.txt");
        assert_eq!(resolve_export_path(""), "passwords.txt");
        assert_eq!(resolve_export_path("out/"), "out/passwords.txt");
        assert_eq!(resolve_export_path("mine"), "mine.txt");
        assert_eq!(resolve_export_path("mine.txt"), "mine.txt");
    }

    #[test]
    fn file_export_is_newline_joined_and_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        let path = path.to_str().unwrap();

        let first = vec!["aaaa".to_string(), "bbbb".to_string()];
        to_file(&first, path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "aaaa\nbbbb\n");

        let second = vec!["cccc".to_string()];
        to_file(&second, path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "cccc\n");
    }

    #[test]
    fn file_export_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deep/passwords.txt");
        let path = path.to_str().unwrap();

        to_file(&["pppp".to_string()], path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "pppp\n");
    }
}
