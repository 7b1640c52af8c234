//! Scaffolds a dated, empty post under the posts directory.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use unicode_segmentation::UnicodeSegmentation;

use crate::configuration::PostSettings;

#[derive(thiserror::Error, Debug)]
pub enum ScaffoldError {
    #[error("{0}")]
    InvalidTitle(String),
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
    #[error("Failed to write the post file")]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct PostTitle(String);

impl PostTitle {
    /// Returns an instance of `PostTitle` if the input is non-blank, at
    /// most 256 graphemes long and yields a non-empty slug.
    pub fn parse(title: String) -> Result<PostTitle, String> {
        let is_empty_or_whitespace = title.trim().is_empty();
        let is_too_long = title.graphemes(true).count() > 256;
        if is_empty_or_whitespace || is_too_long {
            return Err(format!("{} is not a valid post title", title));
        }
        let title = Self(title.trim().to_owned());
        if title.slug().is_empty() {
            return Err(format!("{} has nothing to build a file name from", title.0));
        }
        Ok(title)
    }

    /// Lower-cased alphanumerics, with every other run of characters
    /// collapsed into a single `-`.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.0.len());
        for c in self.0.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_end_matches('-').to_owned()
    }
}

impl AsRef<str> for PostTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn post_file_name(title: &PostTitle, date: NaiveDate, extension: &str) -> String {
    format!("{}-{}.{}", date.format("%Y-%m-%d"), title.slug(), extension)
}

fn front_matter(title: &PostTitle, layout: &str) -> String {
    format!(
        "---\nlayout: {}\ntitle: \"{}\"\n---\n",
        layout,
        title.as_ref().replace('"', "\\\"")
    )
}

/// Writes a new post dated `date` and returns its path. Never overwrites
/// an existing post.
#[tracing::instrument(name = "Creating a post", skip_all, fields(title = %title.as_ref()))]
pub fn create_post(
    settings: &PostSettings,
    base_path: &Path,
    title: &PostTitle,
    date: NaiveDate,
) -> Result<PathBuf, ScaffoldError> {
    let directory = base_path.join(&settings.directory);
    std::fs::create_dir_all(&directory)?;

    let path = directory.join(post_file_name(title, date, &settings.extension));
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Err(ScaffoldError::AlreadyExists(path))
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(front_matter(title, &settings.layout).as_bytes())?;

    tracing::info!(path = %path.display(), "Post created");
    Ok(path)
}
