//! Question image proxy.

use bytes::Bytes;
use qbank_config::join_key;
use tracing::{debug, warn};

use crate::{LakeError, QbankLake};

/// An image read from object storage, with the content type to serve it as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Serves question images from the questions directory of the lake.
///
/// The content type is fixed by configuration; it is never inferred from the
/// object itself.
#[derive(Debug, Clone)]
pub struct BlobProxy {
    lake: QbankLake,
    questions_dir: String,
    content_type: String,
}

impl BlobProxy {
    #[must_use]
    pub fn new(lake: QbankLake, questions_dir: &str, content_type: &str) -> Self {
        Self {
            lake,
            questions_dir: questions_dir.to_string(),
            content_type: content_type.to_string(),
        }
    }

    /// Fetch the image at `relative_path` under the questions directory.
    ///
    /// Paths that cannot name an object (empty, or with `.`/`..` segments) are
    /// reported as not found rather than as malformed.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::NotFound`] if no such image exists, and
    /// [`LakeError::ObjectStore`] if the store fails.
    pub async fn fetch_image(&self, relative_path: &str) -> Result<Image, LakeError> {
        let relative = join_key(&self.questions_dir, relative_path);
        let not_found = || LakeError::NotFound {
            path: join_key(self.lake.root(), &relative),
        };

        if relative_path.trim_matches('/').is_empty() {
            return Err(not_found());
        }
        match self.lake.exists(&relative).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(path = %relative, "image not found");
                return Err(not_found());
            }
            Err(LakeError::InvalidPath(error)) => {
                debug!(path = %relative, %error, "image path rejected");
                return Err(not_found());
            }
            Err(error) => return Err(error),
        }

        let bytes = self.lake.read(&relative).await?;
        Ok(Image {
            bytes,
            content_type: self.content_type.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    async fn proxy() -> BlobProxy {
        let lake = QbankLake::in_memory("QuestionBank");
        lake.write("questions/q1.png", &b"\x89PNG\r\n\x1a\nq1"[..])
            .await
            .unwrap();
        lake.write("questions/2020/q2.png", &b"q2"[..]).await.unwrap();
        lake.write("secret.csv", "top secret").await.unwrap();
        BlobProxy::new(lake, "questions", "image/png")
    }

    #[tokio::test]
    async fn present_image_returns_exact_bytes() {
        let image = proxy().await.fetch_image("q1.png").await.unwrap();
        assert_eq!(image.bytes.as_ref(), b"\x89PNG\r\n\x1a\nq1");
        assert_eq!(image.content_type, "image/png");
    }

    #[tokio::test]
    async fn nested_paths_resolve() {
        let image = proxy().await.fetch_image("2020/q2.png").await.unwrap();
        assert_eq!(image.bytes.as_ref(), b"q2");
    }

    #[rstest]
    #[case("missing.png")]
    #[case("")]
    #[case("../secret.csv")]
    #[case("2020//q2.png")]
    #[tokio::test]
    async fn unresolvable_paths_are_not_found(#[case] path: &str) {
        let error = proxy().await.fetch_image(path).await.unwrap_err();
        assert!(error.is_not_found(), "{path}: unexpected error {error}");
    }
}
