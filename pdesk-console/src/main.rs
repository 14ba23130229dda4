//! pdesk - operator console for the property back office
//!
//! Drives the back-office REST API from the terminal: property CRUD,
//! recorded-call browsing and editing, reflecting AI-extracted fields
//! into property records, audio playback URLs, recording upload, and
//! session management.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use pdesk_client::query::{CallFilters, ListQuery, PropertyFilters};
use pdesk_client::token::TokenStore;
use pdesk_client::{
    AudioClient, AuthClient, Backend, CallClient, ClientError, PropertyClient, SaveOutcome,
    UploadClient,
};
use pdesk_common::config::{resolve_api_url, resolve_token_file, TomlConfig};
use pdesk_common::events::AuthBus;
use pdesk_common::format::format_to_iso_datetime;
use pdesk_common::record::FlatRecord;
use serde_json::Value;
use tracing::info;

mod cli;
mod output;

use cli::{Args, AudioCommand, CallCommand, Command, PropertyCommand};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        match e.downcast_ref::<ClientError>() {
            Some(client_error) => {
                // Operator sees the localized message; the cause is
                // already in the log.
                eprintln!("{}", client_error.user_message());
            }
            None => eprintln!("{e}"),
        }
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    info!("Starting pdesk console v{}", env!("CARGO_PKG_VERSION"));

    let config = TomlConfig::load();
    let api_url = resolve_api_url(args.api_url.as_deref(), &config);
    let token_file = resolve_token_file(args.token_file.as_deref(), &config);
    info!("Backend: {api_url}");

    let backend = Backend::new(&api_url)?;
    let bus = Arc::new(AuthBus::default());
    let auth = AuthClient::new(backend.clone(), TokenStore::new(token_file), bus.clone());
    auth.restore();

    match args.command {
        Command::Properties { command } => {
            run_property(command, &PropertyClient::new(backend)).await
        }
        Command::Calls { command } => {
            let properties = PropertyClient::new(backend.clone());
            run_call(command, &CallClient::new(backend), &properties).await
        }
        Command::Audio { command } => run_audio(command, backend).await,
        Command::Login { username, password } => {
            auth.login(&username, &password).await?;
            println!("로그인되었습니다: {username}");
            Ok(())
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            auth.register(&username, &email, &password).await?;
            println!("계정이 생성되었습니다: {username}");
            Ok(())
        }
        Command::Logout => {
            auth.logout();
            println!("로그아웃되었습니다.");
            Ok(())
        }
    }
}

async fn run_property(command: PropertyCommand, properties: &PropertyClient) -> Result<()> {
    match command {
        PropertyCommand::List {
            page,
            limit,
            name,
            exclude_names,
        } => {
            let filters = PropertyFilters {
                property_name: name,
                exclude_property_names: exclude_names,
                ..PropertyFilters::default()
            };
            let listing = properties.list(ListQuery::page(page, limit), &filters).await?;
            for record in &listing.results {
                println!("{}", output::property_line(record));
            }
            println!("{}", output::page_footer(listing.results.len(), listing.total_count));
            Ok(())
        }
        PropertyCommand::Get { property_id } => {
            let record = properties.get(&property_id).await?;
            output::print_record(&record);
            Ok(())
        }
        PropertyCommand::Create { file } => {
            let flat = read_flat_file(&file)?;
            let record = properties.create(&Value::Object(flat)).await?;
            println!("등록되었습니다.");
            output::print_record(&record);
            Ok(())
        }
        PropertyCommand::Update { property_id, file } => {
            let edits = read_flat_file(&file)?;
            let original = fetch_flat(properties.get(&property_id).await?)?;
            match properties
                .save_if_changed(&property_id, &original, &edits)
                .await?
            {
                SaveOutcome::NoChanges => println!("변경된 값이 없습니다."),
                SaveOutcome::Saved(record) => {
                    println!("저장되었습니다.");
                    output::print_record(&record);
                }
            }
            Ok(())
        }
        PropertyCommand::Delete { property_id } => {
            properties.delete(&property_id).await?;
            println!("삭제되었습니다.");
            Ok(())
        }
    }
}

async fn run_call(
    command: CallCommand,
    calls: &CallClient,
    properties: &PropertyClient,
) -> Result<()> {
    match command {
        CallCommand::List {
            page,
            limit,
            customer,
            date,
        } => {
            let recording_date = match date {
                Some(raw) => Some(
                    format_to_iso_datetime(&raw)
                        .with_context(|| format!("날짜 형식이 올바르지 않습니다: {raw}"))?,
                ),
                None => None,
            };
            let filters = CallFilters {
                customer_name: customer,
                recording_date,
                ..CallFilters::default()
            };
            let listing = calls.list(ListQuery::page(page, limit), &filters).await?;
            for record in &listing.results {
                println!("{}", output::call_line(record));
            }
            println!("{}", output::page_footer(listing.results.len(), listing.total_count));
            Ok(())
        }
        CallCommand::Get { job_id } => {
            let record = calls.get(&job_id).await?;
            output::print_record(&record);
            Ok(())
        }
        CallCommand::Update { job_id, file } => {
            let edits = read_flat_file(&file)?;
            let original = fetch_flat(calls.get(&job_id).await?)?;
            match calls.save_if_changed(&job_id, &original, &edits).await? {
                SaveOutcome::NoChanges => println!("변경된 값이 없습니다."),
                SaveOutcome::Saved(record) => {
                    println!("저장되었습니다.");
                    output::print_record(&record);
                }
            }
            Ok(())
        }
        CallCommand::Delete { job_id } => {
            calls.delete(&job_id).await?;
            println!("삭제되었습니다.");
            Ok(())
        }
        CallCommand::Reflect { job_id } => {
            let call_flat = fetch_flat(calls.get(&job_id).await?)?;
            let record = calls.reflect_to_property(properties, &call_flat).await?;
            println!("매물에 반영되었습니다.");
            output::print_record(&record);
            Ok(())
        }
    }
}

async fn run_audio(command: AudioCommand, backend: Arc<Backend>) -> Result<()> {
    match command {
        AudioCommand::Url { file_name } => {
            let url = AudioClient::new(backend).stream_url(&file_name).await?;
            println!("{url}");
            Ok(())
        }
        AudioCommand::Upload { path } => {
            let filename = UploadClient::new(backend).upload_file(&path).await?;
            println!("업로드되었습니다: {filename}");
            Ok(())
        }
    }
}

/// Read a flat-record JSON file (one object of field → value)
fn read_flat_file(path: &Path) -> Result<FlatRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("파일을 읽을 수 없습니다: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("JSON 형식이 올바르지 않습니다: {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("평탄화된 레코드 객체가 필요합니다: {}", path.display()),
    }
}

/// A fetched record as a flat map
fn fetch_flat(record: Value) -> Result<FlatRecord> {
    match record {
        Value::Object(map) => Ok(map),
        other => bail!("예상하지 못한 응답 형식입니다: {other}"),
    }
}
