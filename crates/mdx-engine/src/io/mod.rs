//! Document loader and HTML sink around the pure core.

use std::fs;
use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::{parsing::ParsedDoc, parse_document, render_html};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Expected a file but found a directory: {0}")]
    IsDirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// Read a markdown document as UTF-8 text
pub fn load_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(IoError::IsDirectory(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write an HTML fragment, creating parent directories as needed
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, html).map_err(IoError::Io)
}

/// Maps `source_root/a/b.md` to `output_root/a/b.html`.
pub fn output_path(
    source: &Path,
    source_root: &Path,
    output_root: &Path,
) -> Result<PathBuf, IoError> {
    let outside = || IoError::OutsideRoot {
        path: source.to_path_buf(),
        root: source_root.to_path_buf(),
    };
    let relative = source.strip_prefix(source_root).map_err(|_| outside())?;
    let relative = RelativePathBuf::from_path(relative).map_err(|_| outside())?;
    Ok(relative.with_extension("html").to_path(output_root))
}

/// Load, parse, render and write one document.
///
/// Stops at the first loader or sink error.
pub fn convert_file(source: &Path, target: &Path) -> Result<ParsedDoc, IoError> {
    let text = load_document(source)?;
    let doc = parse_document(&text);
    write_html(target, &render_html(&doc.blocks))?;
    log::debug!(
        "converted {} -> {} ({} blocks)",
        source.display(),
        target.display(),
        doc.blocks.len()
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_document_success() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "post.md", "# Hello\n\nWorld");
        assert_eq!(load_document(&path).unwrap(), "# Hello\n\nWorld");
    }

    #[test]
    fn test_load_document_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_document(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_document_directory() {
        let dir = TempDir::new().unwrap();
        let result = load_document(dir.path());
        assert!(matches!(result, Err(IoError::IsDirectory(_))));
    }

    #[test]
    fn test_write_html_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("dist/nested/page.html");
        write_html(&target, "<p>x</p>").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_output_path_mirrors_layout() {
        let out = output_path(
            Path::new("/site/content/posts/first.md"),
            Path::new("/site/content"),
            Path::new("/site/dist"),
        )
        .unwrap();
        assert_eq!(out, Path::new("/site/dist/posts/first.html"));
    }

    #[test]
    fn test_output_path_outside_root() {
        let result = output_path(
            Path::new("/elsewhere/first.md"),
            Path::new("/site/content"),
            Path::new("/site/dist"),
        );
        assert!(matches!(result, Err(IoError::OutsideRoot { .. })));
    }

    #[test]
    fn test_convert_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let source = write_source(&dir, "blog.md", "# Blog\n\n- one\n- two\n");
        let target = dir.path().join("dist/blog.html");

        let doc = convert_file(&source, &target).unwrap();

        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "<h1>Blog</h1><ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_convert_file_missing_source_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.html");
        let result = convert_file(&dir.path().join("nope.md"), &target);
        assert!(matches!(result, Err(IoError::NotFound(_))));
        assert!(!target.exists());
    }
}
