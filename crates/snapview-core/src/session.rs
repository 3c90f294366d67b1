use snapview_types::CapturedImage;
use tokio::sync::RwLock;

/// Holds the most recent capture for the lifetime of the session.
/// Replace-only: `replace` swaps the whole image under the lock, so a
/// reader never observes a half-written buffer.
#[derive(Default)]
pub struct CaptureSession {
    current: RwLock<Option<CapturedImage>>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    pub async fn replace(&self, image: CapturedImage) {
        *self.current.write().await = Some(image);
    }

    /// Clone of the current capture, if any.
    pub async fn snapshot(&self) -> Option<CapturedImage> {
        self.current.read().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.current.read().await.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(tag: u8) -> CapturedImage {
        CapturedImage::new(2, 1, vec![tag; 8])
    }

    #[tokio::test]
    async fn starts_empty() {
        let session = CaptureSession::new();
        assert!(session.is_empty().await);
        assert_eq!(session.snapshot().await, None);
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_image() {
        let session = CaptureSession::new();
        session.replace(image(1)).await;
        session.replace(image(2)).await;

        let current = session.snapshot().await.unwrap();
        assert_eq!(current.data, vec![2; 8]);
    }

    #[tokio::test]
    async fn snapshot_is_a_copy() {
        let session = CaptureSession::new();
        session.replace(image(7)).await;

        let mut copy = session.snapshot().await.unwrap();
        copy.data[0] = 0;

        assert_eq!(session.snapshot().await.unwrap().data[0], 7);
    }
}
