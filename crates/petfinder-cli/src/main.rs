//! Petfinder CLI - pet-adoption marketplace client
//!
//! Command-line stand-in for the mobile screens: log in, browse pets,
//! submit adoption requests, and run the admin actions.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use petfinder_core::api::ApiClient;
use petfinder_core::config::Config;
use petfinder_core::models::{
    AdoptionStatus, Credentials, NewAdoptionRequest, NewPet, RegisterUser, UpdateUser,
};
use petfinder_core::session::SessionManager;
use petfinder_core::storage::{Database, DatabaseConfig, SqliteTokenRepository};

#[derive(Parser)]
#[command(name = "petfinder")]
#[command(author, version, about = "Pet-adoption marketplace client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        email: String,
        password: String,
    },

    /// Log out and forget the stored credential
    Logout,

    /// Show the current session
    Whoami,

    /// Create a new account
    Register {
        name: String,
        email: String,
        password: String,
        /// Phone number (digits only)
        #[arg(long)]
        phone: String,
        /// Taxpayer id (digits only)
        #[arg(long)]
        cpf: String,
    },

    /// Browse and manage pets
    Pets {
        #[command(subcommand)]
        action: PetAction,
    },

    /// Manage users (admin)
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage adoption requests
    Adoptions {
        #[command(subcommand)]
        action: AdoptionAction,
    },
}

#[derive(Subcommand)]
enum PetAction {
    /// List all pets
    List,
    /// Show pet details
    Show { id: i64 },
    /// Add a pet listing (admin)
    Add {
        petname: String,
        specie: String,
        #[arg(long)]
        age: Option<i64>,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a pet listing (admin)
    Edit {
        id: i64,
        petname: String,
        specie: String,
        #[arg(long)]
        age: Option<i64>,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a pet listing (admin)
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,
    /// Show a user's details
    Show { id: i64 },
    /// Update a user's profile
    Edit {
        id: i64,
        name: String,
        email: String,
        #[arg(long)]
        cpf: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Remove a user account
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum AdoptionAction {
    /// List adoption requests (admin)
    List,
    /// Submit an adoption request for a pet
    Request {
        pet_id: i64,
        /// Questionnaire answers as a JSON object
        #[arg(long, default_value = "{}")]
        form: String,
    },
    /// Approve or reject a request (admin)
    SetStatus { id: i64, status: String },
}

/// Open the local database and restore the session from it
async fn open_session(config: &Config) -> Result<SessionManager> {
    let db = Database::new(DatabaseConfig::with_path(&config.storage.database_path)).await?;
    let manager = SessionManager::new(Box::new(SqliteTokenRepository::new(db.pool().clone())));
    manager.initialize().await;
    Ok(manager)
}

fn api_client(config: &Config) -> Result<ApiClient> {
    Ok(ApiClient::builder()
        .base_url(config.api.base_url.clone())
        .timeout_secs(config.api.timeout_secs)
        .build()?)
}

/// Bearer token of the logged-in user, or a friendly error
fn require_token(manager: &SessionManager) -> Result<String> {
    manager
        .raw_token()
        .context("Not logged in. Run `petfinder login <email> <password>` first.")
}

/// Admin gate, mirroring the app's role-based navigation. The decoded role
/// is unverified, so this is a courtesy check; the server enforces it.
fn require_admin(manager: &SessionManager) -> Result<()> {
    if !manager.is_admin() {
        bail!(
            "This command needs the ADMIN role (current role: {}).",
            manager.current_role().unwrap_or_else(|| "none".to_string())
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Login { email, password } => {
            let client = api_client(&config)?;
            let response = client.login(&Credentials { email, password }).await?;

            let manager = open_session(&config).await?;
            let identity = manager.login(&response.token).await?;

            println!(
                "Logged in as {} ({})",
                identity.email.as_deref().unwrap_or("unknown"),
                identity.role
            );
        }

        Commands::Logout => {
            let manager = open_session(&config).await?;
            manager.logout().await?;
            println!("Logged out.");
        }

        Commands::Whoami => {
            let manager = open_session(&config).await?;
            match manager.identity() {
                Some(identity) => {
                    println!("Email:  {}", identity.email.as_deref().unwrap_or("unknown"));
                    println!("Role:   {}", identity.role);
                    if let Some(id) = identity.subject_id {
                        println!("Id:     {}", id);
                    }
                }
                None => println!("Not logged in."),
            }
        }

        Commands::Register {
            name,
            email,
            password,
            phone,
            cpf,
        } => {
            let client = api_client(&config)?;
            client
                .register(&RegisterUser {
                    name,
                    email: email.clone(),
                    password,
                    phone,
                    cpf,
                })
                .await?;
            println!("Account created for {}. You can now log in.", email);
        }

        Commands::Pets { action } => {
            let client = api_client(&config)?;
            match action {
                PetAction::List => {
                    for pet in client.list_pets().await? {
                        println!(
                            "#{:<5} {:<20} {:<10} {}",
                            pet.id,
                            pet.petname,
                            pet.specie,
                            pet.description.as_deref().unwrap_or("")
                        );
                    }
                }
                PetAction::Show { id } => {
                    let pet = client.get_pet(id).await?;
                    println!("{}", serde_json::to_string_pretty(&pet)?);
                }
                PetAction::Add {
                    petname,
                    specie,
                    age,
                    breed,
                    description,
                } => {
                    let manager = open_session(&config).await?;
                    require_admin(&manager)?;
                    let token = require_token(&manager)?;

                    let pet = client
                        .create_pet(
                            &NewPet {
                                petname,
                                specie,
                                age,
                                breed,
                                description,
                                ..Default::default()
                            },
                            &token,
                        )
                        .await?;
                    println!("Created pet #{} ({}).", pet.id, pet.petname);
                }
                PetAction::Edit {
                    id,
                    petname,
                    specie,
                    age,
                    breed,
                    description,
                } => {
                    let manager = open_session(&config).await?;
                    require_admin(&manager)?;
                    let token = require_token(&manager)?;

                    client
                        .update_pet(
                            id,
                            &NewPet {
                                petname: petname.clone(),
                                specie,
                                age,
                                breed,
                                description,
                                ..Default::default()
                            },
                            &token,
                        )
                        .await?;
                    println!("Updated pet #{} ({}).", id, petname);
                }
                PetAction::Remove { id } => {
                    let manager = open_session(&config).await?;
                    require_admin(&manager)?;
                    let token = require_token(&manager)?;

                    client.delete_pet(id, &token).await?;
                    println!("Removed pet #{}.", id);
                }
            }
        }

        Commands::Users { action } => {
            let manager = open_session(&config).await?;
            require_admin(&manager)?;
            let token = require_token(&manager)?;
            let client = api_client(&config)?;

            match action {
                UserAction::List => {
                    for user in client.list_users(&token).await? {
                        println!("#{:<5} {:<25} {}", user.id, user.name, user.email);
                    }
                }
                UserAction::Show { id } => {
                    let user = client.get_user(id, &token).await?;
                    println!("{}", serde_json::to_string_pretty(&user)?);
                }
                UserAction::Edit {
                    id,
                    name,
                    email,
                    cpf,
                    phone,
                } => {
                    client
                        .update_user(
                            id,
                            &UpdateUser {
                                name,
                                email,
                                cpf,
                                phone,
                            },
                            &token,
                        )
                        .await?;
                    println!("Updated user #{}.", id);
                }
                UserAction::Remove { id } => {
                    client.delete_user(id, &token).await?;
                    println!("Removed user #{}.", id);
                }
            }
        }

        Commands::Adoptions { action } => {
            let manager = open_session(&config).await?;
            let token = require_token(&manager)?;
            let client = api_client(&config)?;

            match action {
                AdoptionAction::List => {
                    require_admin(&manager)?;
                    for request in client.list_adoptions(&token).await? {
                        let pet = request
                            .pet
                            .map(|p| p.petname)
                            .unwrap_or_else(|| "?".to_string());
                        let user = request
                            .user
                            .map(|u| u.name)
                            .unwrap_or_else(|| "?".to_string());
                        println!("#{:<5} {:<10} pet={} by={}", request.id, request.status, pet, user);
                    }
                }
                AdoptionAction::Request { pet_id, form } => {
                    // Validate the questionnaire JSON before it goes on the wire
                    let parsed: serde_json::Value =
                        serde_json::from_str(&form).context("--form must be valid JSON")?;

                    let user_id = manager
                        .identity()
                        .and_then(|identity| identity.subject_id)
                        .context("The stored credential carries no user id")?;

                    client
                        .request_adoption(
                            &NewAdoptionRequest {
                                pet_id,
                                user_id,
                                form_response: parsed.to_string(),
                            },
                            &token,
                        )
                        .await?;
                    println!("Adoption request submitted for pet #{}.", pet_id);
                }
                AdoptionAction::SetStatus { id, status } => {
                    require_admin(&manager)?;
                    let Some(status) = AdoptionStatus::parse(&status) else {
                        warn!(%status, "unknown adoption status");
                        bail!("Status must be one of PENDING, APPROVED, REJECTED.");
                    };

                    client.set_adoption_status(id, status, &token).await?;
                    println!("Request #{} is now {}.", id, status);
                }
            }
        }
    }

    Ok(())
}
