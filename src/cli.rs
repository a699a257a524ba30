use clap::{Args, Parser, Subcommand};

use crate::models::{ClientUpdate, SearchCriteria};

/// Manage clients and their phone numbers in PostgreSQL
#[derive(Debug, Parser)]
#[command(name = "client-registry", version, about)]
pub struct Cli {
    /// Database URL, overrides DATABASE_URL
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the clients and phones tables if missing
    Init,
    /// Add a client, optionally with phone numbers
    Add {
        name: String,
        surname: String,
        #[arg(long)]
        email: Option<String>,
        /// Phone number, may be repeated
        #[arg(long = "phone")]
        phones: Vec<String>,
    },
    /// Attach a phone number to an existing client
    AddPhone { client_id: i32, phone: String },
    /// Change some fields of a client
    Update {
        client_id: i32,
        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Remove one phone number of a client
    DeletePhone { client_id: i32, phone: String },
    /// Remove a client together with its phone numbers
    Delete { client_id: i32 },
    /// Find clients matching every given field
    Find(FindArgs),
    /// Show one client
    Show { client_id: i32 },
    /// Fill the database with sample clients and run a few searches
    Demo,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub surname: Option<String>,
    #[arg(long, conflicts_with = "clear_email")]
    pub email: Option<String>,
    /// Remove the stored email address
    #[arg(long)]
    pub clear_email: bool,
    /// Phone number to replace, used with --new-phone
    #[arg(long, requires = "new_phone")]
    pub old_phone: Option<String>,
    #[arg(long, requires = "old_phone")]
    pub new_phone: Option<String>,
}

impl From<UpdateArgs> for ClientUpdate {
    fn from(args: UpdateArgs) -> Self {
        let mut update = ClientUpdate::new();
        if let Some(name) = args.name {
            update = update.name(name);
        }
        if let Some(surname) = args.surname {
            update = update.surname(surname);
        }
        if let Some(email) = args.email {
            update = update.email(email);
        } else if args.clear_email {
            update = update.clear_email();
        }
        if let (Some(old), Some(new)) = (args.old_phone, args.new_phone) {
            update = update.phone(old, new);
        }
        update
    }
}

#[derive(Debug, Args)]
pub struct FindArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub surname: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<FindArgs> for SearchCriteria {
    fn from(args: FindArgs) -> Self {
        SearchCriteria {
            name: args.name,
            surname: args.surname,
            email: args.email,
            phone: args.phone,
        }
    }
}
