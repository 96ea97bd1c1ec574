//! # Blob Repository Trait
//!
//! Blobのアップロードを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::blob_target::BlobTarget;

/// アップロード結果
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    /// アップロードされたBlob名
    pub blob_name: String,
    /// アップロードされたバイト数
    pub bytes_uploaded: u64,
}

impl UploadReceipt {
    /// 新しいアップロード結果を作成
    pub fn new(blob_name: String, bytes_uploaded: u64) -> Self {
        Self {
            blob_name,
            bytes_uploaded,
        }
    }
}

/// Blobリポジトリ
///
/// ストレージサービスへの単一Blobのアップロードを担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobRepository: Send + Sync {
    /// ファイルをBlobとしてアップロード
    ///
    /// # Arguments
    ///
    /// * `target` - アップロード先（アカウント、コンテナ、Blob名、認証情報）
    /// * `file_path` - アップロードするローカルファイルのパス
    ///
    /// # Returns
    ///
    /// アップロード結果
    ///
    /// # Errors
    ///
    /// ファイルの読み込みまたはアップロードに失敗した場合にエラーを返す。
    /// ストレージサービスからのエラーはそのまま伝播する。
    async fn upload(&self, target: &BlobTarget, file_path: &Path) -> Result<UploadReceipt>;
}
