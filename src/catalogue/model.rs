use std::path::Path;

use crate::foundation::error::{VernissageError, VernissageResult};

/// Display orientation of a gallery image, used to pick card widths on the
/// horizontal gallery track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    /// Infer orientation from an image path. Filenames in the photo library
    /// carry `vertical`/`horizontal` suffixes; anything unmarked reads as
    /// landscape.
    pub fn from_image_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.contains("vertical") || lower.contains("portrait") {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GalleryItem {
    pub url: String,
    #[serde(default)]
    pub orientation: Orientation,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Primary image, shown as slide background and center card. May be
    /// empty, in which case [`Catalogue::image_for`] substitutes the
    /// default image.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
}

/// The static, read-only content the site is built from. Loaded once at
/// startup; the engine never mutates it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalogue {
    pub default_image: String,
    pub projects: Vec<Project>,
}

impl Catalogue {
    pub fn from_json_str(json: &str) -> VernissageResult<Self> {
        let catalogue: Self = serde_json::from_str(json)
            .map_err(|e| VernissageError::catalogue(format!("invalid catalogue JSON: {e}")))?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    pub fn from_path(path: &Path) -> VernissageResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            VernissageError::catalogue(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> VernissageResult<()> {
        if self.projects.is_empty() {
            return Err(VernissageError::catalogue(
                "catalogue must contain at least one project",
            ));
        }
        if self.default_image.is_empty() {
            return Err(VernissageError::catalogue(
                "catalogue default_image must be non-empty",
            ));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Project by index; anything out of range falls back to the first
    /// project rather than failing the render.
    pub fn project(&self, index: usize) -> &Project {
        self.projects.get(index).unwrap_or(&self.projects[0])
    }

    /// A project's primary image, substituting the default when the
    /// reference is missing.
    pub fn image_for<'a>(&'a self, project: &'a Project) -> &'a str {
        if project.image.is_empty() {
            &self.default_image
        } else {
            &project.image
        }
    }
}
