//! Workflow Orchestration
//!
//! アップロードワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::auth::env_file::EnvFileCredentialRepository;
use crate::adapter::repositories::azure_blob_repository::AzureBlobRepository;
use crate::application::use_cases::upload_file::UploadFileUseCase;
use crate::domain::entities::upload_request::UploadRequest;

use super::cli::UploadArgs;

/// アップロードワークフロー
pub struct UploadWorkflow {
    use_case: UploadFileUseCase<EnvFileCredentialRepository, AzureBlobRepository>,
}

impl UploadWorkflow {
    /// 依存性を注入してワークフローを作成
    pub fn new() -> Self {
        // Repository implementations
        let credential_repo = Arc::new(EnvFileCredentialRepository::new(
            EnvFileCredentialRepository::default_path(),
        ));
        let blob_repo = Arc::new(AzureBlobRepository::new());

        Self {
            use_case: UploadFileUseCase::new(credential_repo, blob_repo),
        }
    }

    /// アップロードワークフローを実行
    pub async fn execute(&self, args: UploadArgs) -> Result<()> {
        info!("Starting blob upload...");
        info!("Dry run: {}", args.dry_run);

        let request = UploadRequest::new(&args.file, &args.container, &args.account)?;

        println!("✓ Upload target:");
        println!("  Account:   {}", request.account());
        println!("  Container: {}", request.container());
        println!("  File:      {}", request.file_path().display());

        if args.dry_run {
            let target = self.use_case.resolve_target(&request, args.token).await?;

            println!("✓ Dry-run mode (not actually uploading)");
            println!(
                "  Would upload '{}' to {}",
                target.blob_name(),
                target.service_endpoint()
            );
            return Ok(());
        }

        let receipt = self.use_case.execute(&request, args.token).await?;

        println!(
            "✓ Uploaded '{}' ({} bytes)",
            receipt.blob_name, receipt.bytes_uploaded
        );
        println!("✓ Upload complete!");

        Ok(())
    }
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
