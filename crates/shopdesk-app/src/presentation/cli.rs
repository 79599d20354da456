use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use shopdesk_domain::EntityId;

/// Back-office client for the shop: catalog, orders and the sales dashboard.
#[derive(Debug, Parser)]
#[command(name = "shopdesk", version)]
pub struct Cli {
    /// Backend base URL (overrides the config file and SHOPDESK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also print logs to stderr
    #[arg(short, long, global = true, action)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        full_name: String,
    },
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Aggregated sales dashboard
    Dashboard,
    Categories {
        #[command(subcommand)]
        action: CrudAction,
    },
    Subcategories {
        #[command(subcommand)]
        action: CrudAction,
    },
    Products {
        #[command(subcommand)]
        action: CrudAction,
    },
    Providers {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// All orders, newest first
    Orders,
    /// Resolve a Google Drive share link to a direct image URL
    DriveUrl(DriveUrlArgs),
}

#[derive(Debug, Subcommand)]
pub enum CrudAction {
    List,
    Get {
        id: EntityId,
    },
    /// Create from a JSON payload using the backend's field names
    Create {
        #[arg(long)]
        json: String,
    },
    /// Update from a JSON payload; `id` is required
    Update {
        #[arg(long)]
        json: String,
    },
    Delete {
        id: EntityId,
    },
}

#[derive(Debug, Args)]
pub struct DriveUrlArgs {
    pub url: String,

    /// Try each hotlink format and keep the first that serves an image
    #[arg(long, action)]
    pub probe: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_crud_create() {
        let cli = Cli::try_parse_from([
            "shopdesk",
            "--api-url",
            "http://api.local",
            "categories",
            "create",
            "--json",
            r#"{"nombreCategoria": "Bebidas"}"#,
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://api.local"));
        match cli.command {
            Command::Categories {
                action: CrudAction::Create { json },
            } => assert!(json.contains("Bebidas")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_drive_url() {
        let cli = Cli::try_parse_from(["shopdesk", "drive-url", "https://x", "--probe"]).unwrap();
        match cli.command {
            Command::DriveUrl(args) => {
                assert_eq!(args.url, "https://x");
                assert!(args.probe);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
