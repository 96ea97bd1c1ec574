//! # UploadRequest Entity
//!
//! 検証済みのアップロードリクエスト

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// アップロードリクエスト
///
/// アップロード対象のファイルパス、コンテナ名、ストレージアカウント名を保持する。
/// 構築時に検証されるため、存在するインスタンスは常に有効な入力を表す。
#[derive(Debug, Clone)]
pub struct UploadRequest {
    file_path: PathBuf,
    container: String,
    account: String,
}

impl UploadRequest {
    /// 新しいアップロードリクエストを作成
    ///
    /// ファイルパスのチルダは展開される。
    ///
    /// # Errors
    ///
    /// 以下の場合にエラーを返す：
    /// - コンテナ名またはアカウント名が空の場合
    /// - ファイルパスが存在する通常ファイルを指していない場合
    pub fn new(file: &str, container: &str, account: &str) -> Result<Self> {
        if container.is_empty() {
            bail!("Container name must not be empty");
        }
        if account.is_empty() {
            bail!("Storage account name must not be empty");
        }

        let expanded = shellexpand::tilde(file);
        let file_path = PathBuf::from(expanded.as_ref());

        match std::fs::metadata(&file_path) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => bail!("Not a regular file: {}", file_path.display()),
            Err(e) => bail!("Cannot read file {}: {}", file_path.display(), e),
        }

        Ok(Self {
            file_path,
            container: container.to_string(),
            account: account.to_string(),
        })
    }

    /// アップロード対象のファイルパスを返す
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// コンテナ名を返す
    pub fn container(&self) -> &str {
        &self.container
    }

    /// ストレージアカウント名を返す
    pub fn account(&self) -> &str {
        &self.account
    }

    /// オブジェクトキーとして使用するBlob名を返す
    ///
    /// ファイルパスの最終セグメント（拡張子を含む）
    pub fn blob_name(&self) -> Result<&str> {
        match self.file_path.file_name().and_then(|n| n.to_str()) {
            Some(name) => Ok(name),
            None => bail!(
                "Cannot derive blob name from path: {}",
                self.file_path.display()
            ),
        }
    }
}
