//! Directory workflow: list, search, and show a visitor's photo.

use std::path::PathBuf;

use frontdesk_core::{Visitor, VisitorId};
use frontdesk_media::ImageStore;
use frontdesk_store::VisitorRepository;

use crate::error::DeskError;

/// Outcome of looking up a visitor's photo when nothing went wrong.
///
/// A photo on record whose file is missing is
/// [`DeskError::ImageNotFound`] instead, so the two cases never blur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Photo {
    Attached(PathBuf),
    /// The visitor registered without a photo.
    NoneAttached,
}

/// Read-only view over registered visitors.
pub struct Directory<'a, R: ?Sized> {
    repo: &'a R,
    images: &'a ImageStore,
}

impl<'a, R: VisitorRepository + ?Sized> Directory<'a, R> {
    pub fn new(repo: &'a R, images: &'a ImageStore) -> Self {
        Self { repo, images }
    }

    pub fn list(&self) -> Result<Vec<Visitor>, DeskError> {
        Ok(self.repo.find_all()?)
    }

    /// Visitors whose name or email contains `term`. `None` and `""` list
    /// everyone.
    pub fn search(&self, term: Option<&str>) -> Result<Vec<Visitor>, DeskError> {
        match term {
            None | Some("") => self.list(),
            Some(term) => Ok(self.repo.find_by_name_or_email_substring(term)?),
        }
    }

    pub fn select(&self, id: VisitorId) -> Result<Option<Visitor>, DeskError> {
        Ok(self.repo.find_by_id(id)?)
    }

    /// Resolve the photo for a selected visitor.
    pub fn photo(&self, visitor: &Visitor) -> Result<Photo, DeskError> {
        let Some(name) = visitor.image_name.as_deref() else {
            return Ok(Photo::NoneAttached);
        };
        let path = self.images.resolve(name).map_err(|err| {
            tracing::warn!(id = %visitor.id, image = name, "could not resolve photo on record");
            DeskError::from(err)
        })?;
        Ok(Photo::Attached(path))
    }
}
