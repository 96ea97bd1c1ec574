//! Domain Repository Traits
//!
//! 外部システムとの境界を抽象化するトレイト

pub mod blob_repository;
pub mod credential_repository;
