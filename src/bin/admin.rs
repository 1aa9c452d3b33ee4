//! CLI administration tool for user-directory.
//!
//! Roles have no HTTP write surface; they are managed here.
//!
//! # Usage
//!
//! ```bash
//! # List roles
//! cargo run --bin admin -- role list
//!
//! # Create a role
//! cargo run --bin admin -- role create --name auditor --description "Read-only access"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show database info and record counts
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use user_directory::application::services::RoleService;
use user_directory::config::Config;
use user_directory::infrastructure::persistence::PgRoleRepository;
use user_directory::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage roles
    Role {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Role management subcommands.
#[derive(Subcommand)]
enum RoleAction {
    /// List all roles
    List,

    /// Create a role
    Create {
        /// Role name (e.g., "auditor")
        #[arg(short, long)]
        name: Option<String>,

        /// Human-readable description
        #[arg(short, long)]
        description: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Role { action } => handle_role_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches role management commands.
async fn handle_role_action(action: RoleAction, pool: PgPool) -> Result<()> {
    let service = RoleService::new(Arc::new(PgRoleRepository::new(Arc::new(pool))));

    match action {
        RoleAction::List => list_roles(&service).await,
        RoleAction::Create {
            name,
            description,
            yes,
        } => create_role(&service, name, description, yes).await,
    }
}

async fn list_roles(service: &RoleService) -> Result<()> {
    println!("{}", "Roles".bright_blue().bold());
    println!();

    let roles = service
        .list_roles()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list roles: {}", e))?;

    if roles.is_empty() {
        println!("{}", "No roles found".yellow());
        return Ok(());
    }

    for role in roles {
        println!(
            "  {:>4}  {:<20} {}",
            role.id.to_string().bright_black(),
            role.name.cyan().bold(),
            role.description.unwrap_or_default()
        );
    }
    println!();

    Ok(())
}

/// Creates a role, prompting for anything not given on the command line.
async fn create_role(
    service: &RoleService,
    name: Option<String>,
    description: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create Role".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Role name").interact_text()?,
    };

    let description = match description {
        Some(d) => Some(d),
        None if skip_confirm => None,
        None => {
            let entered: String = Input::new()
                .with_prompt("Description (optional)")
                .allow_empty(true)
                .interact_text()?;
            Some(entered)
        }
    };

    println!("  Name:        {}", name.cyan());
    println!(
        "  Description: {}",
        description.as_deref().unwrap_or("-").bright_white()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this role?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let role = service
        .create_role(&name, description)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create role: {}", e))?;

    println!(
        "{} {}",
        "Role created with id".green().bold(),
        role.id.to_string().bright_green().bold()
    );

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            let roles_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Users:      {}",
                users_count.to_string().bright_green().bold()
            );
            println!(
                "  Roles:      {}",
                roles_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
