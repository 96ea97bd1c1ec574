//! Repository Implementations
//!
//! Azure Blob Storageとの統合

pub mod azure_blob_repository;
