//! Template name to file path mapping.
//!
//! Template names use dots as separators: `"blog.post"` names the file
//! `blog/post.view` under the configured root. The mapping is a pure
//! string transformation; whether the file exists is the caller's
//! concern, which keeps the resolver trivially testable.

use std::path::{Path, PathBuf};

/// File extension of template files.
pub const TEMPLATE_EXTENSION: &str = "view";

/// Maps a dotted template name to its path under `root`.
///
/// Every `.` becomes a directory separator and the template extension
/// is appended.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use viewstack::template_path;
///
/// let path = template_path(Path::new("templates"), "blog.post");
/// assert_eq!(path, Path::new("templates").join("blog").join("post.view"));
/// ```
pub fn template_path(root: &Path, name: &str) -> PathBuf {
    let relative = name.replace('.', std::path::MAIN_SEPARATOR_STR);
    root.join(format!("{}.{}", relative, TEMPLATE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_name() {
        let path = template_path(Path::new("/srv/templates"), "home");
        assert_eq!(path, Path::new("/srv/templates").join("home.view"));
    }

    #[test]
    fn test_dots_become_directories() {
        let path = template_path(Path::new("/srv/templates"), "user.profile.card");
        let expected = Path::new("/srv/templates")
            .join("user")
            .join("profile")
            .join("card.view");
        assert_eq!(path, expected);
    }

    #[test]
    fn test_relative_root() {
        let path = template_path(Path::new("templates"), "home");
        assert_eq!(path, Path::new("templates").join("home.view"));
    }

    #[test]
    fn test_extension_is_always_appended() {
        let path = template_path(Path::new(""), "home");
        assert!(path.to_string_lossy().ends_with(".view"));
    }
}
