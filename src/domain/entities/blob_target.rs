//! # BlobTarget Value Object
//!
//! アップロード先のバリューオブジェクト

use anyhow::Result;

use super::upload_request::UploadRequest;
use crate::domain::repositories::credential_repository::ResolvedCredential;

/// アップロード先
///
/// リクエストと解決済み認証情報から導出される。単一のアップロード呼び出しの
/// 間だけ存在し、永続化されない。
#[derive(Debug, Clone)]
pub struct BlobTarget {
    account: String,
    container: String,
    blob_name: String,
    credential: ResolvedCredential,
}

impl BlobTarget {
    /// リクエストと認証情報からアップロード先を導出
    ///
    /// # Errors
    ///
    /// ファイルパスからBlob名が導出できない場合にエラーを返す
    pub fn from_request(request: &UploadRequest, credential: ResolvedCredential) -> Result<Self> {
        let blob_name = request.blob_name()?.to_string();

        Ok(Self {
            account: request.account().to_string(),
            container: request.container().to_string(),
            blob_name,
            credential,
        })
    }

    /// ストレージアカウント名を返す
    pub fn account(&self) -> &str {
        &self.account
    }

    /// コンテナ名を返す
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Blob名（オブジェクトキー）を返す
    pub fn blob_name(&self) -> &str {
        &self.blob_name
    }

    /// 解決済み認証情報を返す
    pub fn credential(&self) -> &ResolvedCredential {
        &self.credential
    }

    /// Blobサービスのエンドポイントを構築
    ///
    /// 固定テンプレート `https://{account}.blob.core.windows.net/?{token}`
    pub fn service_endpoint(&self) -> String {
        format!(
            "https://{}.blob.core.windows.net/?{}",
            self.account,
            self.credential.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(account: &str, token: &str) -> BlobTarget {
        BlobTarget {
            account: account.to_string(),
            container: "mycontainer".to_string(),
            blob_name: "report.csv".to_string(),
            credential: ResolvedCredential::new(token.to_string()).unwrap(),
        }
    }

    #[test]
    fn test_service_endpoint_format() {
        let target = target("foo", "bar");

        assert_eq!(
            target.service_endpoint(),
            "https://foo.blob.core.windows.net/?bar"
        );
    }

    #[test]
    fn test_service_endpoint_keeps_sas_query() {
        let target = target("myaccount", "sv=2021-06-08&ss=b&sig=abc%3D");

        assert_eq!(
            target.service_endpoint(),
            "https://myaccount.blob.core.windows.net/?sv=2021-06-08&ss=b&sig=abc%3D"
        );
    }
}
