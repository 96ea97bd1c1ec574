//! Env File Credential Repository Implementation
//!
//! CredentialRepositoryのdotenvファイル実装

use async_trait::async_trait;
use log::{debug, info};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::domain::repositories::credential_repository::{
    CredentialError, CredentialRepository, ResolvedCredential,
};

/// ホームディレクトリ直下のトークンファイル名
pub const TOKEN_FILE_NAME: &str = ".blob-uploader-azure.env";

/// トークンファイル内で参照するキー
pub const TOKEN_KEY: &str = "TOKEN";

/// dotenvファイルベースの認証情報リポジトリ
///
/// `<home>/.blob-uploader-azure.env` を `KEY=VALUE` 形式でパースし、
/// `TOKEN` キーの値を認証情報として返す。呼び出しごとに読み直す（キャッシュなし）。
pub struct EnvFileCredentialRepository {
    path: PathBuf,
}

impl EnvFileCredentialRepository {
    /// 指定されたパスのトークンファイルを参照するリポジトリを作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 既定のトークンファイルパスを返す
    ///
    /// `$HOME/.blob-uploader-azure.env`
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Path::new(&home).join(TOKEN_FILE_NAME)
    }

    fn read_failure(&self, message: String) -> CredentialError {
        CredentialError::ReadFailure {
            path: self.path.display().to_string(),
            message,
        }
    }
}

#[async_trait]
impl CredentialRepository for EnvFileCredentialRepository {
    async fn resolve(&self) -> Result<ResolvedCredential, CredentialError> {
        let exists = tokio::fs::try_exists(&self.path).await.unwrap_or(false);
        if !exists {
            debug!("Token file not found: {}", self.path.display());
            return Err(CredentialError::NoTokenProvided);
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.read_failure(e.to_string()))?;

        for item in dotenvy::from_read_iter(Cursor::new(content)) {
            let (key, value) = item.map_err(|e| self.read_failure(e.to_string()))?;
            if key == TOKEN_KEY {
                info!("Resolved token from {}", self.path.display());
                return ResolvedCredential::new(value);
            }
        }

        Err(CredentialError::MissingTokenKey(
            self.path.display().to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_token_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TOKEN_FILE_NAME);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_resolve_token() {
        let (_dir, path) = write_token_file("TOKEN=abc123\n");
        let repo = EnvFileCredentialRepository::new(path);

        let credential = repo.resolve().await.unwrap();

        assert_eq!(credential.as_str(), "abc123");
    }

    #[tokio::test]
    async fn test_resolve_token_among_other_keys() {
        let (_dir, path) = write_token_file("OTHER=x\nTOKEN=sv=2021&sig=abc\nLAST=y\n");
        let repo = EnvFileCredentialRepository::new(path);

        let credential = repo.resolve().await.unwrap();

        assert_eq!(credential.as_str(), "sv=2021&sig=abc");
    }

    #[tokio::test]
    async fn test_missing_file_is_no_token_provided() {
        let dir = tempfile::tempdir().unwrap();
        let repo = EnvFileCredentialRepository::new(dir.path().join(TOKEN_FILE_NAME));

        let error = repo.resolve().await.unwrap_err();

        assert!(matches!(error, CredentialError::NoTokenProvided));
        assert_eq!(error.to_string(), "No token provided");
    }

    #[tokio::test]
    async fn test_missing_token_key_fails() {
        let (_dir, path) = write_token_file("OTHER=x\n");
        let repo = EnvFileCredentialRepository::new(path);

        let error = repo.resolve().await.unwrap_err();

        assert!(matches!(error, CredentialError::MissingTokenKey(_)));
    }

    #[tokio::test]
    async fn test_empty_token_value_fails() {
        let (_dir, path) = write_token_file("TOKEN=\n");
        let repo = EnvFileCredentialRepository::new(path);

        let error = repo.resolve().await.unwrap_err();

        assert!(matches!(error, CredentialError::EmptyToken));
    }

    #[test]
    fn test_default_path_under_home() {
        let path = EnvFileCredentialRepository::default_path();

        assert!(path.ends_with(TOKEN_FILE_NAME));
    }
}
