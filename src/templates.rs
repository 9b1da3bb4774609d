// Template file handling: the all-or-nothing directory listing, slug
// derivation, and reading a template body from disk.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Recognized template suffix. The filename minus this suffix is the
/// slug of the remote template it overwrites.
pub const TEMPLATE_SUFFIX: &str = ".html";

/// List the template directory in enumeration order (not sorted). Every
/// entry must end in `.html`; if any does not, the whole run aborts
/// before a single network call is made — a stray file usually means the
/// tool was pointed at the wrong directory.
pub fn list_templates(dir: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read template directory {dir}"))?;

    let mut names = Vec::new();
    let mut bad = 0usize;
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list entry in {dir}"))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(TEMPLATE_SUFFIX) {
            bad += 1;
        }
        names.push(name);
    }

    if bad > 0 {
        bail!(
            "Some templates don't have a {TEMPLATE_SUFFIX} ending or some \
             non-template files exist in {dir}. Aborting..."
        );
    }
    Ok(names)
}

/// Strip the `.html` suffix once to obtain the template slug. A name
/// without the suffix comes back unchanged.
pub fn slug_for(filename: &str) -> &str {
    filename.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(filename)
}

/// Read a template body in full. Failure here is fatal: a listed file
/// that cannot be read means the directory no longer matches what the
/// operator confirmed.
pub fn read_template(dir: &str, filename: &str) -> Result<String> {
    let path = Path::new(dir).join(filename);
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read template file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn slug_strips_suffix_once() {
        assert_eq!(slug_for("welcome.html"), "welcome");
        assert_eq!(slug_for("welcome.html.html"), "welcome.html");
    }

    #[test]
    fn slug_leaves_other_names_alone() {
        assert_eq!(slug_for("welcome"), "welcome");
        assert_eq!(slug_for("welcome.htm"), "welcome.htm");
    }

    #[test]
    fn lists_only_html_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("welcome.html"), "Hi!").unwrap();
        fs::write(dir.path().join("goodbye.html"), "Bye!").unwrap();

        let mut names = list_templates(dir.path().to_str().unwrap()).unwrap();
        names.sort();
        assert_eq!(names, vec!["goodbye.html", "welcome.html"]);
    }

    #[test]
    fn one_bad_extension_fails_the_whole_listing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("welcome.html"), "Hi!").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a template").unwrap();

        let err = list_templates(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Aborting"));
    }

    #[test]
    fn reads_template_body() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("welcome.html"), "<p>Hi!</p>").unwrap();

        let body = read_template(dir.path().to_str().unwrap(), "welcome.html").unwrap();
        assert_eq!(body, "<p>Hi!</p>");
    }

    #[test]
    fn missing_template_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_template(dir.path().to_str().unwrap(), "gone.html").is_err());
    }
}
