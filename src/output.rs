// Output path derivation and all-or-nothing writes of converted text

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{ConvertError, Result};

/// Where the rendered text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// `<input stem>.txt` next to the input
    Derived,
    /// Explicit path given by the user
    File(PathBuf),
    /// Return the text to the caller without writing a file
    Print,
}

impl OutputTarget {
    /// Resolve the file this target writes, if any
    pub fn resolve(&self, input: &Path) -> Option<PathBuf> {
        match self {
            OutputTarget::Derived => Some(default_output_path(input)),
            OutputTarget::File(path) => Some(path.clone()),
            OutputTarget::Print => None,
        }
    }
}

/// Input path with its extension replaced by `.txt`
///
/// An input that already ends in `.txt` gets `<stem>_text.txt` so it is never
/// overwritten.
pub fn default_output_path(input: &Path) -> PathBuf {
    let derived = input.with_extension("txt");
    if derived != input {
        return derived;
    }

    let file_stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{file_stem}_text.txt"))
}

/// Text framed by a titled rule, used when printing instead of writing a file
pub fn format_banner(title: &str, text: &str) -> String {
    let rule = "=".repeat(50);
    format!("\n{rule}\n{title}\n{rule}\n{text}\n")
}

/// Sibling scratch path used while writing `target`
fn partial_path(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    target.with_file_name(format!(".{file_name}.partial"))
}

/// Write `content` to `target` as UTF-8
///
/// The text goes to a sibling scratch file first and is renamed into place
/// only once fully written, so a failed write leaves no partial output.
pub async fn write_output(target: &Path, content: &str) -> Result<()> {
    let scratch = partial_path(target);
    debug!("Writing {} bytes via {}", content.len(), scratch.display());

    // WHY: writing straight to `target` would truncate an existing file before
    // the new text is safely on disk
    if let Err(e) = fs::write(&scratch, content.as_bytes()).await {
        warn!("Failed to write {}: {}", scratch.display(), e);
        let _ = fs::remove_file(&scratch).await;
        return Err(ConvertError::FileWrite { path: target.to_path_buf(), source: e });
    }

    if let Err(e) = fs::rename(&scratch, target).await {
        warn!("Failed to move output into place at {}: {}", target.display(), e);
        let _ = fs::remove_file(&scratch).await;
        return Err(ConvertError::FileWrite { path: target.to_path_buf(), source: e });
    }

    info!("Wrote {} bytes to {}", content.len(), target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path(Path::new("dir/movie.srt")), PathBuf::from("dir/movie.txt"));
        assert_eq!(default_output_path(Path::new("movie")), PathBuf::from("movie.txt"));
        assert_eq!(default_output_path(Path::new("show.s01e01.srt")), PathBuf::from("show.s01e01.txt"));
    }

    #[test]
    fn test_default_output_path_never_overwrites_input() {
        assert_eq!(default_output_path(Path::new("dir/notes.txt")), PathBuf::from("dir/notes_text.txt"));
    }

    #[test]
    fn test_resolve_targets() {
        let input = Path::new("a/b.srt");
        assert_eq!(OutputTarget::Derived.resolve(input), Some(PathBuf::from("a/b.txt")));
        assert_eq!(
            OutputTarget::File(PathBuf::from("out.txt")).resolve(input),
            Some(PathBuf::from("out.txt"))
        );
        assert_eq!(OutputTarget::Print.resolve(input), None);
    }

    #[test]
    fn test_format_banner() {
        let banner = format_banner("RESULT", "Hello");
        let rule = "=".repeat(50);
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines, vec!["", rule.as_str(), "RESULT", rule.as_str(), "Hello"]);
    }

    #[tokio::test]
    async fn test_write_output() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out.txt");

        write_output(&target, "Olá mundo").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "Olá mundo");
        assert!(!partial_path(&target).exists());
    }

    #[tokio::test]
    async fn test_write_output_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out.txt");
        std::fs::write(&target, "old content that is longer").unwrap();

        write_output(&target, "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_write_output_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("no-such-dir").join("out.txt");

        let result = write_output(&target, "text").await;

        assert!(matches!(result, Err(ConvertError::FileWrite { .. })));
        assert!(!target.exists());
    }
}
