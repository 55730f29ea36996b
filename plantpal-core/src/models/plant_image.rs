use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an image originally came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Unsplash,
    Pexels,
    User,
    #[default]
    Default,
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Unsplash => write!(f, "unsplash"),
            ImageSource::Pexels => write!(f, "pexels"),
            ImageSource::User => write!(f, "user"),
            ImageSource::Default => write!(f, "default"),
        }
    }
}

impl FromStr for ImageSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsplash" => Ok(ImageSource::Unsplash),
            "pexels" => Ok(ImageSource::Pexels),
            "user" => Ok(ImageSource::User),
            "default" => Ok(ImageSource::Default),
            _ => Err(format!(
                "Invalid image source '{}'. Valid options: unsplash, pexels, user, default",
                s
            )),
        }
    }
}

/// An image attached to a plant.
///
/// Image identifiers are strings rather than UUIDs: images imported from
/// external search providers carry source-prefixed ids (`unsplash-...`,
/// `pexels-...`) that must survive a round-trip through the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantImage {
    pub id: String,
    pub url: String,
    pub thumbnail_url: String,
    pub alt: String,
    pub source: ImageSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photographer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}

/// Payload for attaching a new image to a plant; the identifier is
/// assigned by whichever side performs the create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlantImage {
    pub url: String,
    pub thumbnail_url: String,
    pub alt: String,
    pub source: ImageSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photographer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}

impl NewPlantImage {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            thumbnail_url: url.clone(),
            url,
            alt: alt.into(),
            source: ImageSource::User,
            photographer: None,
            photographer_url: None,
            is_primary: None,
        }
    }

    pub fn with_thumbnail_url(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = thumbnail_url.into();
        self
    }

    pub fn with_source(mut self, source: ImageSource) -> Self {
        self.source = source;
        self
    }

    /// Builds the stored image record with an assigned identifier.
    pub fn into_image(self, id: impl Into<String>) -> PlantImage {
        PlantImage {
            id: id.into(),
            url: self.url,
            thumbnail_url: self.thumbnail_url,
            alt: self.alt,
            source: self.source,
            photographer: self.photographer,
            photographer_url: self.photographer_url,
            is_primary: self.is_primary,
        }
    }
}
