mod cli;
mod config;
mod db;
mod demo;
mod models;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::db::ClientRepository;
use crate::models::{ClientRecord, ClientUpdate, SearchCriteria};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // Load configuration
    let config = config::init(cli.database_url.clone())?;

    // Initialize database connection
    let repo = db::init(&config)
        .await
        .context("could not connect to the database")?;

    run(&repo, cli.command).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(repo: &ClientRepository, command: Command) -> Result<()> {
    match command {
        Command::Init => {
            repo.initialize_schema().await?;
            println!("Schema ready");
        }
        Command::Add {
            name,
            surname,
            email,
            phones,
        } => {
            let phones: Vec<&str> = phones.iter().map(String::as_str).collect();
            let client_id = repo
                .add_client(&name, &surname, email.as_deref(), &phones)
                .await
                .context("could not add client")?;
            println!("Added client #{client_id}");
        }
        Command::AddPhone { client_id, phone } => {
            repo.add_phone(client_id, &phone)
                .await
                .with_context(|| format!("could not add phone {phone} to client #{client_id}"))?;
            println!("Added phone {phone} to client #{client_id}");
        }
        Command::Update { client_id, fields } => {
            let update = ClientUpdate::from(fields);
            if update.is_empty() {
                println!("Nothing to update");
                return Ok(());
            }
            repo.update_client(client_id, &update)
                .await
                .with_context(|| format!("could not update client #{client_id}"))?;
            println!("Updated client #{client_id}");
        }
        Command::DeletePhone { client_id, phone } => {
            if repo.delete_phone(client_id, &phone).await? {
                println!("Deleted phone {phone} of client #{client_id}");
            } else {
                println!("Client #{client_id} has no phone {phone}");
            }
        }
        Command::Delete { client_id } => {
            if repo.delete_client(client_id).await? {
                println!("Deleted client #{client_id}");
            } else {
                println!("No client #{client_id}");
            }
        }
        Command::Find(args) => {
            let criteria = SearchCriteria::from(args);
            print_clients(&repo.find_clients(&criteria).await?);
        }
        Command::Show { client_id } => match repo.get_client(client_id).await? {
            Some(record) => print_clients(std::slice::from_ref(&record)),
            None => print_clients(&[]),
        },
        Command::Demo => demo::run(repo).await?,
    }

    Ok(())
}

/// Print search results, or a notice when nothing matched
fn print_clients(records: &[ClientRecord]) {
    if records.is_empty() {
        println!("No client found\n");
        return;
    }

    for record in records {
        println!("{record}\n");
    }
}
