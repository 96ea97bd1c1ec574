//! Authentication Adapters
//!
//! トークンファイルからの認証情報解決

pub mod env_file;
