//! Use Cases
//!
//! アップロードのユースケース

pub mod upload_file;
