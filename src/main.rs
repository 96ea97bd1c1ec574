//! Blob Uploader Azure
//!
//! ローカルファイルを Azure Blob Storage にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

// Clean Architecture layers
mod adapter;
mod application;
mod domain;
mod driver;

use driver::{Args, Command, UploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Upload(upload_args) => {
            // Create workflow with injected dependencies
            let workflow = UploadWorkflow::new();
            workflow.execute(upload_args).await
        }
    }
}
