//! Host Devices
//!
//! Device adapters for a terminal host: the "camera" is a still image on
//! disk and the position is supplied by the operator.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use platform::crypto::to_data_url;
use tokio::sync::mpsc;

use crate::domain::repository::{Camera, Geolocation, PositionWatch};
use crate::domain::value_objects::{Coordinates, WatchId, WatchOptions};
use crate::error::{AttendanceError, AttendanceResult};

/// MIME type guessed from the file extension
fn image_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Camera backed by an image file
#[derive(Debug)]
pub struct FileCamera {
    path: PathBuf,
    streaming: AtomicBool,
}

impl FileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            streaming: AtomicBool::new(false),
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming.load(Ordering::SeqCst)
    }
}

impl Camera for FileCamera {
    async fn request_access(&self) -> AttendanceResult<()> {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) if meta.is_file() => {
                self.streaming.store(true, Ordering::SeqCst);
                tracing::debug!(path = %self.path.display(), "Camera stream opened");
                Ok(())
            }
            Ok(_) => Err(AttendanceError::CameraUnavailable(format!(
                "{} is not a file",
                self.path.display()
            ))),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Err(AttendanceError::CameraDenied)
            }
            Err(e) => Err(AttendanceError::CameraUnavailable(e.to_string())),
        }
    }

    fn snapshot(&self) -> Option<String> {
        if !self.is_streaming() {
            return None;
        }
        match std::fs::read(&self.path) {
            Ok(bytes) if !bytes.is_empty() => Some(to_data_url(image_mime(&self.path), &bytes)),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Could not read frame");
                None
            }
        }
    }

    fn stop_tracks(&self) {
        if self.streaming.swap(false, Ordering::SeqCst) {
            tracing::debug!(path = %self.path.display(), "Stopped camera track");
        }
    }
}

/// Geolocation that reports an operator-supplied fix
///
/// `None` behaves like a host without geolocation support.
#[derive(Debug)]
pub struct FixedGeolocation {
    fix: Option<Coordinates>,
    next_id: AtomicU64,
}

impl FixedGeolocation {
    pub fn new(fix: Option<Coordinates>) -> Self {
        Self {
            fix,
            next_id: AtomicU64::new(1),
        }
    }
}

impl Geolocation for FixedGeolocation {
    fn watch_position(&self, options: &WatchOptions) -> AttendanceResult<PositionWatch> {
        let fix = self.fix.ok_or(AttendanceError::LocationUnsupported)?;
        let id = WatchId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (tx, updates) = mpsc::unbounded_channel();
        // The receiver is alive here, sending cannot fail.
        let _ = tx.send(Ok(fix));

        tracing::debug!(watch = %id, high_accuracy = options.enable_high_accuracy, "Watch started");
        Ok(PositionWatch { id, updates })
    }

    fn clear_watch(&self, id: WatchId) {
        tracing::debug!(watch = %id, "Watch cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::from_data_url;

    #[tokio::test]
    async fn test_file_camera_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();
        let camera = FileCamera::new(&path);

        assert!(camera.snapshot().is_none());
        camera.request_access().await.unwrap();

        let (mime, bytes) = from_data_url(&camera.snapshot().unwrap()).unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(bytes, [0xFF, 0xD8, 0xFF]);

        camera.stop_tracks();
        assert!(!camera.is_streaming());
        assert!(camera.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let camera = FileCamera::new(dir.path().join("missing.png"));

        let err = camera.request_access().await.unwrap_err();
        assert!(matches!(err, AttendanceError::CameraUnavailable(_)));
    }

    #[tokio::test]
    async fn test_fixed_geolocation() {
        let geo = FixedGeolocation::new(Some(Coordinates::new(12.9, 77.6, Some(15.0))));
        let mut watch = geo.watch_position(&WatchOptions::default()).unwrap();
        let fix = watch.updates.recv().await.unwrap().unwrap();
        assert_eq!(fix.latitude, 12.9);

        let none = FixedGeolocation::new(None);
        assert!(matches!(
            none.watch_position(&WatchOptions::default()),
            Err(AttendanceError::LocationUnsupported)
        ));
    }
}
