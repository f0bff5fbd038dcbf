//! Session photo models

use serde::{Deserialize, Serialize};

/// Review state of a session photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoStatus {
    Pending,
    Approved,
    Rejected,
}

impl PhotoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoStatus::Pending => "pending",
            PhotoStatus::Approved => "approved",
            PhotoStatus::Rejected => "rejected",
        }
    }
}

/// Photo attached to a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPhoto {
    pub id: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub caption: String,
    pub approval_status: PhotoStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub rejection_reason: String,
    #[serde(default)]
    pub uploaded_at: String,
}

/// Photo as listed in the trainer's own gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerGalleryPhoto {
    pub id: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub caption: String,
    pub approval_status: PhotoStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub rejection_reason: String,
    #[serde(default)]
    pub uploaded_at: String,
    #[serde(default)]
    pub school_name: String,
    #[serde(default)]
    pub day_number: u8,
}

/// Sponsor gallery: approved photos of verified sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub featured: Vec<SessionPhoto>,
    #[serde(default)]
    pub photos: Vec<SessionPhoto>,
}

impl Gallery {
    /// Featured photos first, then the rest.
    pub fn all(&self) -> impl Iterator<Item = &SessionPhoto> {
        self.featured.iter().chain(self.photos.iter())
    }
}
