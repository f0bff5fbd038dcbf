//! Photo display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{opt_or_dash, or_dash, truncate_string};
use crate::client::models::{Gallery, SessionPhoto, TrainerGalleryPhoto};
use crate::output::formatters::format_timestamp_local;

/// Photo row for the review queue and the sponsor gallery.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PhotoDisplay {
    #[tabled(rename = "PHOTO ID")]
    pub id: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "FEATURED")]
    pub featured: String,

    #[tabled(rename = "CAPTION")]
    pub caption: String,

    #[tabled(rename = "UPLOADED")]
    pub uploaded: String,

    /// Image URL (shown, never downloaded)
    #[tabled(rename = "URL")]
    pub url: String,
}

fn featured_mark(featured: bool) -> String {
    if featured { "★" } else { "" }.to_string()
}

impl From<SessionPhoto> for PhotoDisplay {
    fn from(photo: SessionPhoto) -> Self {
        Self {
            id: photo.id,
            status: crate::program::status_label(photo.approval_status.as_str()).to_string(),
            featured: featured_mark(photo.is_featured),
            caption: truncate_string(&or_dash(&photo.caption), 40),
            uploaded: format_timestamp_local(&photo.uploaded_at),
            url: opt_or_dash(photo.image_url.as_deref().or(photo.image.as_deref())),
        }
    }
}

/// Flatten a gallery into rows, featured photos first.
pub fn gallery_rows(gallery: &Gallery) -> Vec<PhotoDisplay> {
    gallery.all().cloned().map(PhotoDisplay::from).collect()
}

/// Photo row for the trainer's own gallery.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TrainerPhotoDisplay {
    #[tabled(rename = "PHOTO ID")]
    pub id: String,

    #[tabled(rename = "SCHOOL")]
    pub school: String,

    #[tabled(rename = "DAY")]
    pub day: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "FEATURED")]
    pub featured: String,

    /// Why the reviewer rejected the photo, if they did
    #[tabled(rename = "REJECTION")]
    pub rejection: String,
}

impl From<TrainerGalleryPhoto> for TrainerPhotoDisplay {
    fn from(photo: TrainerGalleryPhoto) -> Self {
        Self {
            id: photo.id,
            school: or_dash(&photo.school_name),
            day: format!("Day {}", photo.day_number),
            status: crate::program::status_label(photo.approval_status.as_str()).to_string(),
            featured: featured_mark(photo.is_featured),
            rejection: truncate_string(&or_dash(&photo.rejection_reason), 40),
        }
    }
}
