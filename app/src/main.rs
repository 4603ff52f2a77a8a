#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    AppContext, CartAction, CartInput, CartStrategy, CategoriesStrategy, ChatInput, ChatStrategy,
    CommandStrategy, InfoStrategy, InitStrategy, LoginInput, LoginStrategy, LogoutStrategy,
    MedicinesInput, MedicinesStrategy, ProfileStrategy, RecommendInput, RecommendStrategy,
    RegisterInput, RegisterStrategy, SymptomsStrategy, VersionStrategy,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "medicart")]
#[command(about = "medicart online pharmacy assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the medicine catalog
    Medicines {
        /// Only show this category (e.g. pain-relief)
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by name or description
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List medicine categories
    Categories,
    /// List the symptoms you can check
    Symptoms,
    /// Suggest medicines for one or more symptoms
    Recommend {
        /// Symptom ids, e.g. s1 s8
        #[arg(required = true)]
        symptoms: Vec<String>,

        /// Put every suggestion in the cart
        #[arg(long)]
        add_to_cart: bool,
    },
    /// Chat with Dr. Bot
    Chat {
        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Sign in with a demo account
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Create an account for this session
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Show your profile and order history
    Profile,
    /// Show resolved configuration
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => return InitStrategy.execute(()).await,
        Commands::Version => return VersionStrategy.execute(()).await,
        _ => {}
    }

    let ctx = AppContext::init()?;

    match cli.command {
        Commands::Medicines { category, search } => {
            MedicinesStrategy
                .execute(MedicinesInput {
                    ctx,
                    category,
                    search,
                })
                .await
        }
        Commands::Categories => CategoriesStrategy.execute(ctx).await,
        Commands::Symptoms => SymptomsStrategy.execute(ctx).await,
        Commands::Recommend {
            symptoms,
            add_to_cart,
        } => {
            RecommendStrategy
                .execute(RecommendInput {
                    ctx,
                    symptom_ids: symptoms,
                    add_to_cart,
                })
                .await
        }
        Commands::Chat { message } => ChatStrategy.execute(ChatInput { ctx, message }).await,
        Commands::Cart { action } => {
            CartStrategy
                .execute(CartInput {
                    ctx,
                    action: action.unwrap_or(CartAction::Show),
                })
                .await
        }
        Commands::Login { email, password } => {
            LoginStrategy
                .execute(LoginInput {
                    ctx,
                    email,
                    password,
                })
                .await
        }
        Commands::Logout => LogoutStrategy.execute(ctx).await,
        Commands::Register {
            name,
            email,
            password,
        } => {
            RegisterStrategy
                .execute(RegisterInput {
                    ctx,
                    name,
                    email,
                    password,
                })
                .await
        }
        Commands::Profile => ProfileStrategy.execute(ctx).await,
        Commands::Info => InfoStrategy.execute(ctx).await,
        Commands::Init | Commands::Version => Ok(()),
    }
}
