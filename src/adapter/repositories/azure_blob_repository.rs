//! Azure Blob Repository Implementation
//!
//! BlobRepositoryのAzure Blob Storage実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use azure_storage::prelude::*;
use azure_storage_blobs::blob::{BlobBlockType, BlockList};
use azure_storage_blobs::prelude::*;
use log::{debug, info};
use std::path::Path;
use tokio::io::AsyncReadExt;

use crate::domain::entities::blob_target::BlobTarget;
use crate::domain::repositories::blob_repository::{BlobRepository, UploadReceipt};

/// ブロックアップロードのチャンクサイズ（4 MB）
const BLOCK_SIZE: usize = 4 * 1024 * 1024;

/// ブロックIDを生成
///
/// ブロックIDはBlob内で一意かつ同一長である必要があるため、ゼロ埋めの連番を
/// base64エンコードして使用する。
fn block_id_for(index: usize) -> String {
    azure_core::base64::encode(format!("{:08}", index).as_bytes())
}

/// Azure Blob StorageベースのBlobリポジトリ
///
/// SASトークン認証でBlock Blobをアップロードする。BLOCK_SIZE以下のファイルは
/// Put Blobで直接、それを超えるファイルはPut Block + Put Block Listで
/// チャンクごとにストリーミングアップロードする（全体をメモリに載せない）。
pub struct AzureBlobRepository;

impl AzureBlobRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// アップロード先のBlobClientを構築
    fn blob_client(target: &BlobTarget) -> Result<BlobClient> {
        let credentials = StorageCredentials::sas_token(target.credential().as_str())
            .context("Invalid SAS token")?;

        Ok(ClientBuilder::new(target.account().to_string(), credentials)
            .blob_client(target.container().to_string(), target.blob_name().to_string()))
    }

    /// ファイル全体を単一のPut Blobでアップロード
    async fn upload_direct(client: &BlobClient, file_path: &Path) -> Result<()> {
        let content = tokio::fs::read(file_path)
            .await
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        client.put_block_blob(content).await?;
        Ok(())
    }

    /// ファイルをチャンクごとに読みながらブロックとしてアップロード
    async fn upload_blocks(client: &BlobClient, file_path: &Path) -> Result<()> {
        let mut file = tokio::fs::File::open(file_path)
            .await
            .with_context(|| format!("Failed to open file: {}", file_path.display()))?;

        let mut blocks = Vec::new();
        let mut buf = vec![0u8; BLOCK_SIZE];
        let mut index = 0;

        loop {
            // チャンクが一杯になるかEOFに達するまで読む
            let mut filled = 0;
            while filled < BLOCK_SIZE {
                let n = file
                    .read(&mut buf[filled..])
                    .await
                    .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
                if n == 0 {
                    break;
                }
                filled += n;
            }

            if filled == 0 {
                break;
            }

            let block_id = block_id_for(index);
            debug!("Uploading block {} ({} bytes)", index, filled);

            client.put_block(block_id.clone(), buf[..filled].to_vec()).await?;
            blocks.push(BlobBlockType::new_uncommitted(block_id));
            index += 1;

            if filled < BLOCK_SIZE {
                break;
            }
        }

        client.put_block_list(BlockList { blocks }).await?;
        Ok(())
    }
}

#[async_trait]
impl BlobRepository for AzureBlobRepository {
    async fn upload(&self, target: &BlobTarget, file_path: &Path) -> Result<UploadReceipt> {
        let metadata = tokio::fs::metadata(file_path)
            .await
            .with_context(|| format!("Cannot read file: {}", file_path.display()))?;
        let file_size = metadata.len();

        let client = Self::blob_client(target)?;

        info!(
            "Uploading {} bytes to blob '{}' in container '{}'",
            file_size,
            target.blob_name(),
            target.container()
        );

        if file_size <= BLOCK_SIZE as u64 {
            Self::upload_direct(&client, file_path).await?;
        } else {
            Self::upload_blocks(&client, file_path).await?;
        }

        Ok(UploadReceipt::new(target.blob_name().to_string(), file_size))
    }
}

impl Default for AzureBlobRepository {
    fn default() -> Self {
        Self::new()
    }
}
