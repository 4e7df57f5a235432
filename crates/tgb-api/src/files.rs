//! Two-step file retrieval: `getFile` resolves an id to a `file_path`, then the
//! bytes come from the token-scoped file root. Stateless; nothing is retried.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use tgb_core::{
    errors::Error,
    objects::{FileDescriptor, Update},
    Result,
};

use crate::{client::BotClient, transport::Transport};

/// Outcome of [`BotClient::download`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Download {
    /// No destination given: the content itself.
    Bytes(Vec<u8>),
    /// Written to `path`.
    Saved { path: PathBuf, bytes: u64 },
}

impl<T: Transport> BotClient<T> {
    /// Phase 1: `file_id` → `file_path`.
    ///
    /// A rejected `getFile` or a descriptor without a path is `Error::Resolution`.
    /// Transport and decode failures pass through unchanged.
    pub async fn resolve_file_path(&self, file_id: &str) -> Result<String> {
        match self.get_file(file_id).await {
            Ok(FileDescriptor {
                file_path: Some(path),
                ..
            }) if !path.is_empty() => Ok(path),
            Ok(_) => Err(Error::Resolution {
                file_id: file_id.to_string(),
                description: None,
            }),
            Err(Error::RemoteRejected { description, .. }) => Err(Error::Resolution {
                file_id: file_id.to_string(),
                description,
            }),
            Err(e) => Err(e),
        }
    }

    pub fn file_url(&self, file_path: &str) -> String {
        self.identity().file_url(file_path)
    }

    /// Phase 2 alone, for a `file_path` the caller already holds.
    pub async fn download_file_path(&self, file_path: &str) -> Result<Vec<u8>> {
        debug!(file_path, "fetching file content");
        self.transport.get_bytes(&self.file_url(file_path)).await
    }

    pub async fn download_bytes(&self, file_id: &str) -> Result<Vec<u8>> {
        let path = self.resolve_file_path(file_id).await?;
        self.download_file_path(&path).await
    }

    /// Resolve, fetch, write everything to `sink` and flush it. Returns bytes written.
    ///
    /// The sink is flushed even when the write fails; the write error wins.
    pub async fn download_into<W>(&self, file_id: &str, sink: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let bytes = self.download_bytes(file_id).await?;
        let written = sink.write_all(&bytes).await;
        let flushed = sink.flush().await;
        written?;
        flushed?;
        Ok(bytes.len() as u64)
    }

    /// Resolve, fetch, then save the content at `dest`.
    ///
    /// Bytes go to a sibling `.part` file first and are renamed onto `dest` only
    /// after a full write and flush. On any failure the `.part` file is removed
    /// and whatever was at `dest` is left untouched.
    pub async fn download_to_path(&self, file_id: &str, dest: &Path) -> Result<u64> {
        let bytes = self.download_bytes(file_id).await?;
        let part = partial_path(dest);

        let saved = match write_file(&part, &bytes).await {
            Ok(()) => tokio::fs::rename(&part, dest).await.map_err(Error::from),
            Err(e) => Err(e),
        };
        if let Err(e) = saved {
            let _ = tokio::fs::remove_file(&part).await;
            return Err(e);
        }

        info!(file_id, dest = %dest.display(), bytes = bytes.len(), "file saved");
        Ok(bytes.len() as u64)
    }

    /// Bytes when `dest` is `None`, otherwise save and report where.
    pub async fn download(&self, file_id: &str, dest: Option<&Path>) -> Result<Download> {
        match dest {
            None => Ok(Download::Bytes(self.download_bytes(file_id).await?)),
            Some(path) => {
                let bytes = self.download_to_path(file_id, path).await?;
                Ok(Download::Saved {
                    path: path.to_path_buf(),
                    bytes,
                })
            }
        }
    }

    /// Save the largest photo of `update.message` to `dest`.
    ///
    /// Fails with `NoPhotoFound` before any request when the update has no photo.
    pub async fn download_photo(&self, update: &Update, dest: &Path) -> Result<u64> {
        let best = update
            .message
            .as_ref()
            .ok_or(Error::NoPhotoFound)?
            .largest_photo()?;
        self.download_to_path(&best.file_id, dest).await
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    let written = file.write_all(bytes).await;
    let flushed = file.flush().await;
    written?;
    flushed?;
    file.sync_all().await?;
    Ok(())
}

/// `dir/.name.<pid>.part` next to `dest`, so the final rename stays on one filesystem.
fn partial_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "download".to_string());
    dest.with_file_name(format!(".{name}.{}.part", std::process::id()))
}
