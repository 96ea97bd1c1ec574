//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// ファイルをAzure Blob Storageにアップロードする CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "blob-uploader-azure")]
#[command(about = "Upload files to an Azure storage account", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// サブコマンド
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Uploads a file to the storage account
    Upload(UploadArgs),
}

/// uploadサブコマンドの引数
#[derive(clap::Args, Debug, Clone)]
pub struct UploadArgs {
    /// The file to upload
    #[arg(short, long)]
    pub file: String,

    /// The container to upload to
    #[arg(short, long)]
    pub container: String,

    /// The storage account to upload to
    #[arg(short, long)]
    pub account: String,

    /// The token to use for authentication
    /// (read from ~/.blob-uploader-azure.env when omitted)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Dry run mode - don't actually upload
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_upload(argv: &[&str]) -> UploadArgs {
        let args = Args::parse_from(argv);
        match args.command {
            Command::Upload(upload_args) => upload_args,
        }
    }

    #[test]
    fn test_upload_long_flags() {
        let args = parse_upload(&[
            "blob-uploader-azure",
            "upload",
            "--file",
            "report.csv",
            "--container",
            "backups",
            "--account",
            "myaccount",
            "--token",
            "sv=2021&sig=abc",
        ]);

        assert_eq!(args.file, "report.csv");
        assert_eq!(args.container, "backups");
        assert_eq!(args.account, "myaccount");
        assert_eq!(args.token.as_deref(), Some("sv=2021&sig=abc"));
        assert!(!args.dry_run);
    }

    #[test]
    fn test_upload_short_aliases() {
        let args = parse_upload(&[
            "blob-uploader-azure",
            "upload",
            "-f",
            "report.csv",
            "-c",
            "backups",
            "-a",
            "myaccount",
            "-t",
            "tok",
        ]);

        assert_eq!(args.file, "report.csv");
        assert_eq!(args.container, "backups");
        assert_eq!(args.account, "myaccount");
        assert_eq!(args.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_upload_token_optional() {
        let args = parse_upload(&[
            "blob-uploader-azure",
            "upload",
            "-f",
            "report.csv",
            "-c",
            "backups",
            "-a",
            "myaccount",
        ]);

        assert!(args.token.is_none());
    }

    #[test]
    fn test_upload_dry_run() {
        let args = parse_upload(&[
            "blob-uploader-azure",
            "upload",
            "-f",
            "report.csv",
            "-c",
            "backups",
            "-a",
            "myaccount",
            "--dry-run",
        ]);

        assert!(args.dry_run);
    }

    #[test]
    fn test_upload_missing_file_flag_rejected() {
        let result = Args::try_parse_from([
            "blob-uploader-azure",
            "upload",
            "-c",
            "backups",
            "-a",
            "myaccount",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        let result = Args::try_parse_from(["blob-uploader-azure"]);

        assert!(result.is_err());
    }
}
