//! # Upload File Use Case
//!
//! ファイルアップロードユースケース

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::domain::entities::blob_target::BlobTarget;
use crate::domain::entities::upload_request::UploadRequest;
use crate::domain::repositories::blob_repository::{BlobRepository, UploadReceipt};
use crate::domain::repositories::credential_repository::{
    CredentialRepository, ResolvedCredential,
};

/// ファイルアップロードユースケース
///
/// トークンを2段階で解決し、アップロード先を導出して単一のアップロードを実行する。
/// トークンが直接指定された場合、認証情報リポジトリには一切アクセスしない。
pub struct UploadFileUseCase<C: CredentialRepository, B: BlobRepository> {
    credential_repository: Arc<C>,
    blob_repository: Arc<B>,
}

impl<C: CredentialRepository, B: BlobRepository> UploadFileUseCase<C, B> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `credential_repository` - 認証情報リポジトリ
    /// * `blob_repository` - Blobリポジトリ
    pub fn new(credential_repository: Arc<C>, blob_repository: Arc<B>) -> Self {
        Self {
            credential_repository,
            blob_repository,
        }
    }

    /// トークンを解決してアップロード先を導出
    ///
    /// # Arguments
    ///
    /// * `request` - アップロードリクエスト
    /// * `token` - 直接指定されたトークン（省略時はリポジトリから解決）
    ///
    /// # Errors
    ///
    /// トークンが解決できない場合にエラーを返す
    pub async fn resolve_target(
        &self,
        request: &UploadRequest,
        token: Option<String>,
    ) -> Result<BlobTarget> {
        let credential = match token {
            Some(token) => {
                debug!("Using token supplied on the command line");
                ResolvedCredential::new(token)?
            }
            None => {
                debug!("No token supplied, resolving from credential repository");
                self.credential_repository.resolve().await?
            }
        };

        BlobTarget::from_request(request, credential)
    }

    /// ファイルをアップロード
    ///
    /// # Arguments
    ///
    /// * `request` - アップロードリクエスト
    /// * `token` - 直接指定されたトークン（省略時はリポジトリから解決）
    ///
    /// # Returns
    ///
    /// アップロード結果
    ///
    /// # Errors
    ///
    /// トークンの解決またはアップロードに失敗した場合にエラーを返す。
    /// リトライは行わない。
    pub async fn execute(
        &self,
        request: &UploadRequest,
        token: Option<String>,
    ) -> Result<UploadReceipt> {
        let target = self.resolve_target(request, token).await?;

        info!(
            "Uploading {} as blob '{}' to container '{}'",
            request.file_path().display(),
            target.blob_name(),
            target.container()
        );

        self.blob_repository
            .upload(&target, request.file_path())
            .await
    }
}
