// SPDX-License-Identifier: MPL-2.0
//! Portfolio data model and loading.
//!
//! A portfolio is a TOML file with a `[[projects]]` array. Every field except
//! `title`, `description` and `dates` is optional; missing media or link data
//! simply renders nothing for that slot. Relative media paths resolve against
//! the portfolio file's own directory so a portfolio folder can be moved
//! around as a unit.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Title that historically marked the only gallery-enabled project. Data
/// files that predate the `gallery` flag still rely on it.
pub const LEGACY_GALLERY_TITLE: &str = "PlastyAI - Microplastic Tracker";

/// An outbound link rendered as a badge on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    /// Named icon for the badge (e.g. `"github"`, `"globe"`). Unknown or
    /// absent names fall back to a generic link glyph.
    #[serde(default)]
    pub icon: Option<String>,
    pub label: String,
    pub url: String,
}

/// One project entry. Mirrors the card's public contract: summary fields plus
/// an optional preview (single image, video, or an ordered image set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Link target for the default preview slot.
    #[serde(default)]
    pub href: Option<String>,
    /// Markdown-formatted description.
    pub description: String,
    /// Free-text date range.
    pub dates: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Canonical URL, shown as a muted caption.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<PathBuf>,
    #[serde(default)]
    pub video: Option<PathBuf>,
    #[serde(default)]
    pub images: Vec<PathBuf>,
    #[serde(default)]
    pub links: Vec<LinkRef>,
    /// Whether the card opens the full-screen gallery overlay when pressed.
    #[serde(default)]
    pub gallery: bool,
}

/// Preview slot content, in precedence order: image set, then video, then a
/// single image, then nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview<'a> {
    Gallery(&'a [PathBuf]),
    Video(&'a Path),
    Image(&'a Path),
    None,
}

impl Project {
    /// Resolves the preview slot according to the precedence rules.
    #[must_use]
    pub fn preview(&self) -> Preview<'_> {
        if !self.images.is_empty() {
            Preview::Gallery(&self.images)
        } else if let Some(video) = &self.video {
            Preview::Video(video)
        } else if let Some(image) = &self.image {
            Preview::Image(image)
        } else {
            Preview::None
        }
    }

    /// Whether pressing the card opens the gallery overlay. Requires both the
    /// explicit flag and a non-empty image set.
    #[must_use]
    pub fn has_gallery(&self) -> bool {
        self.gallery && !self.images.is_empty()
    }

    /// Canonical URL trimmed for display: scheme, `www.` prefix and trailing
    /// slash removed.
    #[must_use]
    pub fn display_link(&self) -> Option<String> {
        self.link.as_deref().map(|link| {
            link.trim_start_matches("https://")
                .trim_start_matches("http://")
                .trim_start_matches("www.")
                .trim_end_matches('/')
                .to_string()
        })
    }
}

/// A loaded portfolio: optional display title plus the project list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Loads a portfolio file, normalizes legacy gallery markers, and resolves
/// relative media paths against the file's parent directory.
pub fn load_from_path(path: &Path) -> Result<Portfolio> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Portfolio(format!("{}: {}", path.display(), e)))?;
    let mut portfolio: Portfolio = toml::from_str(&content)?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    for project in &mut portfolio.projects {
        normalize(project, base);
    }

    Ok(portfolio)
}

fn normalize(project: &mut Project, base: &Path) {
    if project.title == LEGACY_GALLERY_TITLE {
        project.gallery = true;
    }

    if let Some(image) = project.image.take() {
        project.image = Some(resolve(base, image));
    }
    if let Some(video) = project.video.take() {
        project.video = Some(resolve(base, video));
    }
    for image in &mut project.images {
        *image = resolve(base, std::mem::take(image));
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            href: None,
            description: "A project.".to_string(),
            dates: "Jan 2024 - Present".to_string(),
            tags: Vec::new(),
            link: None,
            image: None,
            video: None,
            images: Vec::new(),
            links: Vec::new(),
            gallery: false,
        }
    }

    #[test]
    fn preview_prefers_image_set_over_video_and_image() {
        let mut p = project("Demo");
        p.image = Some(PathBuf::from("still.png"));
        p.video = Some(PathBuf::from("clip.mp4"));
        p.images = vec![PathBuf::from("a.png")];

        assert!(matches!(p.preview(), Preview::Gallery(set) if set.len() == 1));
    }

    #[test]
    fn preview_prefers_video_over_image() {
        let mut p = project("Demo");
        p.image = Some(PathBuf::from("still.png"));
        p.video = Some(PathBuf::from("clip.mp4"));

        assert!(matches!(p.preview(), Preview::Video(_)));
    }

    #[test]
    fn preview_falls_back_to_single_image_then_nothing() {
        let mut p = project("Demo");
        p.image = Some(PathBuf::from("still.png"));
        assert!(matches!(p.preview(), Preview::Image(_)));

        p.image = None;
        assert!(matches!(p.preview(), Preview::None));
    }

    #[test]
    fn gallery_requires_flag_and_images() {
        let mut p = project("Demo");
        p.gallery = true;
        assert!(!p.has_gallery());

        p.images = vec![PathBuf::from("x.png")];
        assert!(p.has_gallery());

        p.gallery = false;
        assert!(!p.has_gallery());
    }

    #[test]
    fn legacy_title_enables_gallery_on_load() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("portfolio.toml");
        let mut file = fs::File::create(&path).expect("failed to create file");
        write!(
            file,
            r#"
[[projects]]
title = "{}"
description = "Tracks microplastics."
dates = "2024"
images = ["x.png"]
"#,
            LEGACY_GALLERY_TITLE
        )
        .expect("failed to write portfolio");

        let portfolio = load_from_path(&path).expect("load failed");
        assert!(portfolio.projects[0].has_gallery());
    }

    #[test]
    fn other_titles_do_not_enable_gallery() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("portfolio.toml");
        fs::write(
            &path,
            r#"
[[projects]]
title = "Other Project"
description = "Something else."
dates = "2024"
images = ["x.png"]
"#,
        )
        .expect("failed to write portfolio");

        let portfolio = load_from_path(&path).expect("load failed");
        assert!(!portfolio.projects[0].has_gallery());
    }

    #[test]
    fn relative_media_paths_resolve_against_portfolio_dir() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("portfolio.toml");
        fs::write(
            &path,
            r#"
[[projects]]
title = "Demo"
description = "d"
dates = "2024"
image = "media/shot.png"
images = ["media/a.png", "/abs/b.png"]
"#,
        )
        .expect("failed to write portfolio");

        let portfolio = load_from_path(&path).expect("load failed");
        let p = &portfolio.projects[0];
        assert_eq!(p.image.as_deref(), Some(dir.path().join("media/shot.png").as_path()));
        assert_eq!(p.images[0], dir.path().join("media/a.png"));
        assert_eq!(p.images[1], PathBuf::from("/abs/b.png"));
    }

    #[test]
    fn missing_optional_fields_deserialize_to_empty_slots() {
        let portfolio: Portfolio = toml::from_str(
            r#"
[[projects]]
title = "Minimal"
description = "d"
dates = "2024"
"#,
        )
        .expect("parse failed");

        let p = &portfolio.projects[0];
        assert!(p.tags.is_empty());
        assert!(p.links.is_empty());
        assert!(p.image.is_none() && p.video.is_none() && p.images.is_empty());
        assert!(matches!(p.preview(), Preview::None));
    }

    #[test]
    fn display_link_trims_scheme_and_www() {
        let mut p = project("Demo");
        p.link = Some("https://www.example.com/".to_string());
        assert_eq!(p.display_link().as_deref(), Some("example.com"));
    }

    #[test]
    fn missing_file_reports_portfolio_error() {
        let err = load_from_path(Path::new("/nonexistent/portfolio.toml")).unwrap_err();
        assert!(matches!(err, Error::Portfolio(_)));
    }
}
