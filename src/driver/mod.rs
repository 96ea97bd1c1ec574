//! # Driver Layer (Presentation)
//!
//! CLIと依存性注入
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: アップロードワークフローのオーケストレーション

pub mod cli;
pub mod workflow;

pub use cli::{Args, Command, UploadArgs};
pub use workflow::UploadWorkflow;
