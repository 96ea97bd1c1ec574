//! Domain Entities
//!
//! アップロードリクエストとアップロード先のエンティティ

pub mod blob_target;
pub mod upload_request;
