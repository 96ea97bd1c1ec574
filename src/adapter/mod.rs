//! Adapter Layer
//!
//! 外部システム（Azure Blob Storage, トークンファイル）との統合

pub mod auth;
pub mod repositories;
