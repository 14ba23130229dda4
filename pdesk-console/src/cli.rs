//! Command-line surface of the console

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for pdesk
#[derive(Parser, Debug)]
#[command(name = "pdesk")]
#[command(about = "Operator console for the property back office")]
#[command(version)]
pub struct Args {
    /// Backend API base URL (falls back to config file, then default)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session token file
    #[arg(long, global = true)]
    pub token_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage property listings
    Properties {
        #[command(subcommand)]
        command: PropertyCommand,
    },
    /// Browse and edit recorded calls
    Calls {
        #[command(subcommand)]
        command: CallCommand,
    },
    /// Call audio playback and upload
    Audio {
        #[command(subcommand)]
        command: AudioCommand,
    },
    /// Sign in and persist the session token
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the persisted session
    Logout,
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommand {
    /// List properties, one line per record
    List {
        /// Page number (1-indexed)
        #[arg(long, default_value_t = 1)]
        page: i64,
        /// Records per page
        #[arg(long, default_value_t = 10)]
        limit: i64,
        /// Filter by 단지명
        #[arg(long)]
        name: Option<String>,
        /// Comma-separated names excluded from the 기타 bucket
        #[arg(long)]
        exclude_names: Option<String>,
    },
    /// Show one property
    Get { property_id: String },
    /// Create a property from a flat-record JSON file
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Apply flat-record edits from a JSON file
    Update {
        property_id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a property
    Delete { property_id: String },
}

#[derive(Subcommand, Debug)]
pub enum CallCommand {
    /// List recorded calls, one line per record
    List {
        /// Page number (1-indexed)
        #[arg(long, default_value_t = 1)]
        page: i64,
        /// Records per page
        #[arg(long, default_value_t = 10)]
        limit: i64,
        /// Filter by customer name
        #[arg(long)]
        customer: Option<String>,
        /// Filter by recording date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show one call
    Get { job_id: String },
    /// Apply flat-record edits from a JSON file
    Update {
        job_id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a call
    Delete { job_id: String },
    /// Copy the call's extracted fields into its linked property
    Reflect { job_id: String },
}

#[derive(Subcommand, Debug)]
pub enum AudioCommand {
    /// Resolve the playback URL of a recording
    Url { file_name: String },
    /// Upload a recording file
    Upload { path: PathBuf },
}
