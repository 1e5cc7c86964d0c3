//! `ledgerctl` — admin client for the accounting server.
//!
//! Manages contexts, authentication, and permission-gated navigation
//! into the server's accounting surfaces.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};

use ledgerctl_core::Period;

/// Accounting server admin client.
#[derive(Parser, Debug)]
#[command(name = "ledgerctl", about = "Accounting admin CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.ledgerctl/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage contexts (server connections).
    #[command(name = "context")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Switch the current context.
    #[command(name = "use")]
    Use {
        #[command(subcommand)]
        what: UseWhat,
    },

    /// Login to the current context's server.
    Login {
        /// User id.
        #[arg(long)]
        user: Option<String>,
        /// Password (not recommended — use interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Logout — clear token from current context.
    Logout,

    /// Show the current principal and its permissions.
    Whoami,

    /// Navigate to a screen, permission-guard included.
    Open {
        /// Route name (e.g. vouchers) or full path (e.g. /balances/trial).
        route: String,
        /// Accounting period, where the screen needs one.
        #[arg(long)]
        period: Option<Period>,
    },

    /// Get resource(s).
    Get {
        /// Resource type (e.g. accounts, vouchers, reports).
        resource: String,
        /// Optional resource ID for single get.
        id: Option<String>,
        /// Accounting period filter.
        #[arg(long)]
        period: Option<Period>,
        /// Limit results.
        #[arg(long)]
        limit: Option<usize>,
        /// Offset for pagination.
        #[arg(long)]
        offset: Option<usize>,
    },

    /// Create a resource (currently: voucher).
    Create {
        /// Resource type.
        resource: String,
        /// JSON body.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },

    /// Delete a resource (currently: unposted voucher).
    Delete {
        /// Resource type.
        resource: String,
        /// Resource ID.
        id: String,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Set a currency's exchange rate for a period.
    SetRate {
        currency: String,
        #[arg(long)]
        period: Period,
        #[arg(long)]
        rate: f64,
    },

    /// Print the trial balance for a period.
    TrialBalance {
        #[arg(long)]
        period: Period,
    },

    /// Ask the server to (re)generate balances for a period.
    GenerateBalance {
        #[arg(long)]
        period: Period,
    },

    /// Check server status.
    Status,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// Create a new context.
    Create {
        /// Context name.
        name: String,
        /// Server URL.
        #[arg(long)]
        server: Option<String>,
    },
    /// List all contexts.
    List,
    /// Set properties on a context.
    Set {
        name: String,
        #[arg(long)]
        server: Option<String>,
    },
    /// Delete a context.
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum UseWhat {
    /// Switch to a context.
    Context { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);
    let json_output = cli.output == "json";

    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::Create { name, server } => {
                commands::context::create(&name, server.as_deref(), &config_path)?;
            }
            ContextAction::List => {
                commands::context::list(&config_path)?;
            }
            ContextAction::Set { name, server } => {
                commands::context::set(&name, server.as_deref(), &config_path)?;
            }
            ContextAction::Delete { name } => {
                commands::context::delete(&name, &config_path)?;
            }
        },

        Commands::Use { what } => match what {
            UseWhat::Context { name } => {
                commands::context::use_context(&name, &config_path)?;
            }
        },

        Commands::Login { user, password } => {
            let user = user.unwrap_or_else(|| {
                eprint!("User id: ");
                let mut s = String::new();
                std::io::stdin().read_line(&mut s).unwrap_or_default();
                s.trim().to_string()
            });
            let password = password.unwrap_or_else(|| {
                rpassword::prompt_password("Password: ").unwrap_or_default()
            });
            commands::login::login(&user, &password, &config_path).await?;
        }

        Commands::Logout => {
            commands::login::logout(&config_path)?;
        }

        Commands::Whoami => {
            commands::login::whoami(json_output, &config_path).await?;
        }

        Commands::Open { route, period } => {
            commands::navigate::open(&route, period, json_output, &config_path).await?;
        }

        Commands::Get {
            resource,
            id,
            period,
            limit,
            offset,
        } => {
            commands::resource::get(
                &resource,
                id.as_deref(),
                period,
                limit,
                offset,
                json_output,
                &config_path,
            )
            .await?;
        }

        Commands::Create {
            resource,
            json_body,
            file,
        } => {
            let body = if let Some(path) = file {
                std::fs::read_to_string(&path)?
            } else if let Some(json) = json_body {
                json
            } else {
                anyhow::bail!("Provide --json or -f <file>.");
            };
            commands::resource::create(&resource, &body, json_output, &config_path).await?;
        }

        Commands::Delete { resource, id, yes } => {
            if !yes {
                eprint!("Are you sure? [y/N]: ");
                let mut s = String::new();
                std::io::stdin().read_line(&mut s).unwrap_or_default();
                if !s.trim().eq_ignore_ascii_case("y") {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            commands::resource::delete(&resource, &id, &config_path).await?;
        }

        Commands::SetRate {
            currency,
            period,
            rate,
        } => {
            commands::resource::set_rate(&currency, period, rate, json_output, &config_path)
                .await?;
        }

        Commands::TrialBalance { period } => {
            commands::resource::trial_balance(period, json_output, &config_path).await?;
        }

        Commands::GenerateBalance { period } => {
            commands::resource::generate_balance(period, json_output, &config_path).await?;
        }

        Commands::Status => {
            commands::resource::status(&config_path).await?;
        }

        Commands::Version => {
            println!("ledgerctl v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
