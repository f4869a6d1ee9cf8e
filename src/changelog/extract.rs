//! Release notes for a single version

use super::Changelog;

/// Notes used when the repository has no changelog
const NO_CHANGES: &str = "No changes.\n\n";

/// Link to the full changelog at `version_tag`
pub fn full_changelog_link(version_tag: &str) -> String {
  format!(
    "See the full [CHANGELOG.md](https://github.com/github/codeql-action/blob/{}/CHANGELOG.md) for more information.",
    version_tag
  )
}

/// Everything up to (not including) the second `## ` heading, then the link line
///
/// `content` is `None` when the changelog file does not exist.
pub fn extract_release_notes(content: Option<&str>, version_tag: &str) -> String {
  let mut notes = match content {
    None => NO_CHANGES.to_string(),
    Some(content) => {
      let changelog = Changelog::parse(content);
      let mut snippet = changelog.preamble().to_string();
      if let Some(section) = changelog.first_section() {
        snippet.push_str(section);
      }
      snippet
    }
  };

  notes.push_str(&full_changelog_link(version_tag));
  notes
}
