//! # Credential Repository Trait
//!
//! 認証トークンの解決を抽象化

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// トークン解決のエラー
///
/// `--token` が指定されず、トークンファイルからも解決できなかった場合の
/// 失敗を型付きで表現する。暗黙の未定義値がURLテンプレートに流れ込むことはない。
#[derive(Debug, Error)]
pub enum CredentialError {
    /// トークンが指定されず、トークンファイルも存在しない
    #[error("No token provided")]
    NoTokenProvided,

    /// トークンファイルは存在するが TOKEN キーがない
    #[error("No TOKEN entry found in {0}")]
    MissingTokenKey(String),

    /// トークンが空文字列
    #[error("Token must not be empty")]
    EmptyToken,

    /// トークンファイルの読み込みまたはパースに失敗
    #[error("Failed to read token file {path}: {message}")]
    ReadFailure { path: String, message: String },
}

/// 解決済み認証情報
///
/// SASトークンを表す不透明な文字列。構築時に非空であることが保証される。
#[derive(Debug, Clone)]
pub struct ResolvedCredential(String);

impl ResolvedCredential {
    /// 新しい認証情報を作成
    ///
    /// # Errors
    ///
    /// トークンが空文字列の場合に `CredentialError::EmptyToken` を返す
    pub fn new(token: String) -> Result<Self, CredentialError> {
        if token.is_empty() {
            return Err(CredentialError::EmptyToken);
        }
        Ok(Self(token))
    }

    /// トークン文字列への参照を返す
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 認証情報リポジトリ
///
/// トークンの解決を担当するリポジトリ。`--token` が指定されなかった場合にのみ
/// 呼び出される。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// 認証情報を解決する
    ///
    /// # Returns
    ///
    /// 解決済み認証情報
    ///
    /// # Errors
    ///
    /// トークンが見つからない、または読み込みに失敗した場合にエラーを返す
    async fn resolve(&self) -> Result<ResolvedCredential, CredentialError>;
}
