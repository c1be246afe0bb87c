//! Output directory and document files.
//!
//! Flat layout: one file per saved document, named by its derived filename.
//! Existing files are overwritten without warning.

mod writer;

pub use writer::{ensure_output_dir, write_document};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_dir_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b");
        ensure_output_dir(&out).unwrap();
        let path = write_document(&out, "fl100.pdf", b"%PDF-1.4").unwrap();
        assert_eq!(path, out.join("fl100.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn ensure_output_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("forms");
        ensure_output_dir(&out).unwrap();
        ensure_output_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn overwrite_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        write_document(dir.path(), "x.pdf", b"first, longer content").unwrap();
        let path = write_document(dir.path(), "x.pdf", b"second").unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }

    #[test]
    fn dir_blocked_by_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("forms");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let err = ensure_output_dir(&blocker).unwrap_err();
        assert!(err.to_string().contains("forms"));
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(write_document(&missing, "x.pdf", b"x").is_err());
    }
}
