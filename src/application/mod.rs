//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）

pub mod use_cases;
