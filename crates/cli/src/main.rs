//! Vedic Hearth CLI - browse the catalog, build a cart, check forms.
//!
//! # Usage
//!
//! ```bash
//! # Browse ghee under 1000, cheapest first
//! vh-cli products --category cow-ghee --price 600-999 --sort price-low
//!
//! # Build a cart and apply a coupon
//! vh-cli cart --add 1 --add 2 --set 1=2 --coupon welcome10
//!
//! # Check a card number
//! vh-cli validate card "4539 1488 0343 6467"
//!
//! # Mock sign-in
//! vh-cli login --email priya@example.com --password secret
//! ```
//!
//! # Commands
//!
//! - `products` - List the catalog with filters and sorting
//! - `cart` - Apply cart commands and print the order summary
//! - `validate` - Run a single field validator
//! - `login` / `signup` - Mock authentication
//!
//! Logs go to stderr; set `RUST_LOG` to override the default filter.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{CliError, Context};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "vedic_hearth_storefront=info,vh_cli=info";

#[derive(Parser)]
#[command(name = "vh-cli")]
#[command(author, version, about = "Vedic Hearth storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Category slug (`cow-ghee`, `cow-dung-crafts`, `organic-farming`, `soaps`) or `all`
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Case-insensitive search over name and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Price bucket (`all`, `0-299`, `300-599`, `600-999`, `1000-1999`, `2000`)
        #[arg(short, long, default_value = "all")]
        price: String,

        /// Sort key (`featured`, `price-low`, `price-high`, `name`)
        #[arg(short, long, default_value = "featured")]
        sort: String,

        /// Display currency (`INR`, `USD`, `EUR`)
        #[arg(long)]
        currency: Option<String>,
    },
    /// Build a cart and print the order summary
    Cart {
        /// Add one unit of a product (repeatable)
        #[arg(short, long = "add", value_name = "ID")]
        add: Vec<String>,

        /// Set a line quantity, e.g. `1=3` (repeatable; 0 removes)
        #[arg(long = "set", value_name = "ID=QTY")]
        set: Vec<String>,

        /// Remove a line (repeatable)
        #[arg(short, long = "remove", value_name = "ID")]
        remove: Vec<String>,

        /// Coupon code
        #[arg(long)]
        coupon: Option<String>,

        /// Display currency (`INR`, `USD`, `EUR`)
        #[arg(long)]
        currency: Option<String>,
    },
    /// Validate a form field
    Validate {
        #[command(subcommand)]
        field: ValidateField,
    },
    /// Sign in (mock; no credentials are checked)
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account (mock; nothing is stored)
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(short, long)]
        confirm: String,
    },
}

#[derive(Subcommand)]
enum ValidateField {
    /// Card number (Luhn checksum)
    Card { value: String },
    /// Email address
    Email { value: String },
    /// Phone number
    Phone { value: String },
    /// Person name
    Name { value: String },
    /// Password strength
    Password { value: String },
    /// Postal code
    Postal {
        value: String,

        /// Country (`IN`, `US`, `UK`, `CA`); other countries always pass
        #[arg(long, default_value = "IN")]
        country: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut out = std::io::stdout().lock();
    let result = run(cli, &mut out).and_then(|()| out.flush().map_err(CliError::from));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Products {
            category,
            query,
            price,
            sort,
            currency,
        } => {
            let ctx = Context::load()?;
            let args = commands::products::ProductsArgs {
                category,
                query,
                price,
                sort,
                currency,
            };
            commands::products::list(&ctx, &args, out)?;
        }
        Commands::Cart {
            add,
            set,
            remove,
            coupon,
            currency,
        } => {
            let ctx = Context::load()?;
            let args = commands::cart::CartArgs {
                add,
                set,
                remove,
                coupon,
                currency,
            };
            commands::cart::summarize(&ctx, &args, out)?;
        }
        Commands::Validate { field } => {
            let field = match field {
                ValidateField::Card { value } => commands::validate::Field::Card(value),
                ValidateField::Email { value } => commands::validate::Field::Email(value),
                ValidateField::Phone { value } => commands::validate::Field::Phone(value),
                ValidateField::Name { value } => commands::validate::Field::Name(value),
                ValidateField::Password { value } => {
                    commands::validate::Field::Password(SecretString::from(value))
                }
                ValidateField::Postal { value, country } => {
                    commands::validate::Field::Postal { value, country }
                }
            };
            commands::validate::check(&field, out)?;
        }
        Commands::Login { email, password } => {
            let ctx = Context::load()?;
            commands::account::login(&ctx, email, SecretString::from(password), out)?;
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm,
        } => {
            let ctx = Context::load()?;
            let form = vedic_hearth_storefront::services::SignupForm {
                name,
                email,
                password: SecretString::from(password),
                confirm_password: SecretString::from(confirm),
            };
            commands::account::signup(&ctx, &form, out)?;
        }
    }
    Ok(())
}
