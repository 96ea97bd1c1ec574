//! # Domain Layer
//!
//! アップロードの核心的なルールとエンティティ（外部依存なし）

pub mod entities;
pub mod repositories;
