//! Photo store.
//!
//! ## Write protocol
//!
//! 1. Derive the name `<email>.<extension>`.
//! 2. Decode the uploaded bytes.
//! 3. Scale to fit the envelope, keeping the aspect ratio.
//! 4. Encode in the format the extension names.
//! 5. Write to a uniquely named `<name>.<pid>-<seq>.tmp` sibling
//!    ([`ImageStore::stage`]).
//! 6. Rename to the final name ([`StagedPhoto::commit`], atomic on POSIX).
//!
//! Steps 5 and 6 are split so a caller can do other work (the record insert)
//! in between and leave any existing photo untouched if that work fails.
//! A staged photo that is dropped without being committed is deleted.
//!
//! A committed upload for an email overwrites the earlier photo.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use frontdesk_core::{PhotoEnvelope, PhotoUpload};

use crate::error::{io_err, MediaError};

/// `<email>.<extension>`. Pure, no I/O.
pub fn image_name(email: &str, extension: &str) -> String {
    format!("{email}.{extension}")
}

/// Size of a `width` × `height` image scaled by the smaller of the two axis
/// factors, so it fits inside `envelope` without distortion.
///
/// Images smaller than the envelope are scaled up. Each side is at least 1px.
pub fn scaled_dimensions(width: u32, height: u32, envelope: PhotoEnvelope) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width.max(1), height.max(1));
    }
    let (w, h) = (u64::from(width), u64::from(height));
    let (bw, bh) = (u64::from(envelope.width), u64::from(envelope.height));

    // bw / w <= bh / h, compared without division.
    let (sw, sh) = if bw * h <= bh * w {
        (bw, h * bw / w)
    } else {
        (w * bh / h, bh)
    };
    (
        u32::try_from(sw).unwrap_or(u32::MAX).max(1),
        u32::try_from(sh).unwrap_or(u32::MAX).max(1),
    )
}

/// Photos of visitors, kept in one directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
    envelope: PhotoEnvelope,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>, envelope: PhotoEnvelope) -> Self {
        Self {
            root: root.into(),
            envelope,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn envelope(&self) -> PhotoEnvelope {
        self.envelope
    }

    /// Scale and save `upload` as `<email>.<extension>`.
    ///
    /// Returns `Ok(None)` when there is nothing to store; that is not an error.
    pub fn store(
        &self,
        email: &str,
        upload: Option<&PhotoUpload>,
    ) -> Result<Option<String>, MediaError> {
        self.stage(email, upload)?.map(StagedPhoto::commit).transpose()
    }

    /// Steps 1–5 of the write protocol: the photo is fully written but not
    /// yet visible under its final name.
    pub fn stage(
        &self,
        email: &str,
        upload: Option<&PhotoUpload>,
    ) -> Result<Option<StagedPhoto>, MediaError> {
        let Some(upload) = upload else {
            return Ok(None);
        };

        let format = ImageFormat::from_extension(&upload.extension)
            .filter(|f| f.writing_enabled())
            .ok_or_else(|| MediaError::UnsupportedExtension {
                extension: upload.extension.clone(),
            })?;
        let name = image_name(email, &upload.extension);
        let path = self.path_for(&name)?;

        let source = image::load_from_memory(&upload.bytes).map_err(MediaError::Decode)?;
        let (width, height) = scaled_dimensions(source.width(), source.height(), self.envelope);
        let scaled = source.resize_exact(width, height, FilterType::Lanczos3);
        let encoded = encode(scaled, format)?;

        std::fs::create_dir_all(&self.root).map_err(|e| io_err(&self.root, e))?;
        let tmp = staging_path(&self.root, &name);
        std::fs::write(&tmp, &encoded).map_err(|e| io_err(&tmp, e))?;
        tracing::debug!(width, height, "staged photo: {}", tmp.display());

        Ok(Some(StagedPhoto {
            name,
            tmp,
            path,
            committed: false,
        }))
    }

    /// Path of a stored photo, or [`MediaError::NotFound`] if the file is gone.
    pub fn resolve(&self, image_name: &str) -> Result<PathBuf, MediaError> {
        let path = self.path_for(image_name)?;
        if path.is_file() {
            Ok(path)
        } else {
            Err(MediaError::NotFound {
                name: image_name.to_string(),
            })
        }
    }

    fn path_for(&self, image_name: &str) -> Result<PathBuf, MediaError> {
        let invalid = image_name.is_empty()
            || image_name == "."
            || image_name == ".."
            || image_name.contains(['/', '\\', '\0']);
        if invalid {
            return Err(MediaError::InvalidName {
                name: image_name.to_string(),
            });
        }
        Ok(self.root.join(image_name))
    }
}

/// A fully written photo waiting for its final name.
#[derive(Debug)]
pub struct StagedPhoto {
    name: String,
    tmp: PathBuf,
    path: PathBuf,
    committed: bool,
}

impl StagedPhoto {
    /// The name the photo will have once committed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Move the photo into place and return its name.
    pub fn commit(mut self) -> Result<String, MediaError> {
        std::fs::rename(&self.tmp, &self.path).map_err(|e| io_err(&self.path, e))?;
        self.committed = true;
        tracing::info!("stored photo: {}", self.path.display());
        Ok(std::mem::take(&mut self.name))
    }
}

impl Drop for StagedPhoto {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(err) = std::fs::remove_file(&self.tmp) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.tmp.display(),
                    error = %err,
                    "could not remove staged photo"
                );
            }
        }
    }
}

/// Two stages of the same name (same email registered twice at once) must
/// not share a file, or one could clobber or delete the other.
fn staging_path(root: &Path, name: &str) -> PathBuf {
    static STAGED: AtomicU64 = AtomicU64::new(0);
    let seq = STAGED.fetch_add(1, Ordering::Relaxed);
    root.join(format!("{name}.{}-{seq}.tmp", std::process::id()))
}

fn encode(image: DynamicImage, format: ImageFormat) -> Result<Vec<u8>, MediaError> {
    // Encoders without alpha support (JPEG) reject RGBA input.
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        _ => image,
    };
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).map_err(MediaError::Encode)?;
    Ok(out.into_inner())
}
