use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expensify::cli::{
    handle_add, handle_export, handle_import, handle_list, handle_login, handle_logout,
    handle_register, handle_report, CredentialArgs,
};
use expensify::config::{paths::ExpensifyPaths, settings::Settings};
use expensify::storage::{init, Storage};

#[derive(Parser)]
#[command(
    name = "expensify",
    version,
    about = "Personal expense tracker",
    long_about = "Expensify Lite keeps a per-user ledger of expenses with notes, \
                  amounts and categories, and summarises spending by category, \
                  day and month."
)]
struct Cli {
    #[command(flatten)]
    credentials: CredentialArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init {
        /// Also create the demo accounts (zaina@gmail.com, test@example.com)
        #[arg(long)]
        demo: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Create a new account
    Register,

    /// Sign in and record the login
    Login,

    /// Add an expense
    Add {
        /// What the money was spent on
        note: String,
        /// Amount (e.g., "4.50" or "120")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Travel, Shopping, Bills, Health, Other)
        #[arg(short, long, default_value = "Food")]
        category: String,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only show expenses whose note contains this keyword
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show spend by category, day and month
    Report {
        /// Only summarise expenses whose note contains this keyword
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Export expenses to CSV
    Export {
        /// Output file path (default: <email>_expenses.csv)
        output: Option<PathBuf>,
        /// Only export expenses whose note contains this keyword
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Import expenses from a CSV export
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// End the session
    Logout,
}

fn main() -> Result<()> {
    expensify::logging::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensifyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let credentials = &cli.credentials;

    match cli.command {
        Some(Commands::Init { demo }) => {
            println!("Initializing Expensify Lite at: {}", paths.base_dir().display());
            init::initialize_storage(&paths)?;
            settings.save(&paths)?;

            if demo {
                let created =
                    init::seed_demo_accounts(&storage.credentials, settings.credential_scheme)?;
                if created.is_empty() {
                    println!("Demo accounts already exist.");
                }
                for identity in created {
                    println!("Demo account created: {}", identity);
                }
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Expensify Lite Configuration");
            println!("============================");
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Login log:       {}", paths.login_log_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Minimum amount:    {}",
                settings
                    .minimum_amount
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  Category mode:     {:?}", settings.category_mode);
            println!("  UTC offset (min):  {}", settings.utc_offset_minutes);
            println!("  Credential scheme: {:?}", settings.credential_scheme);
        }
        Some(Commands::Register) => handle_register(&storage, &settings, credentials)?,
        Some(Commands::Login) => handle_login(&storage, &settings, credentials)?,
        Some(Commands::Add {
            note,
            amount,
            category,
        }) => handle_add(&storage, &settings, credentials, &note, &amount, &category)?,
        Some(Commands::List { search }) => {
            handle_list(&storage, &settings, credentials, search.as_deref())?
        }
        Some(Commands::Report { search }) => {
            handle_report(&storage, &settings, credentials, search.as_deref())?
        }
        Some(Commands::Export { output, search }) => {
            handle_export(&storage, &settings, credentials, output, search.as_deref())?
        }
        Some(Commands::Import { file }) => handle_import(&storage, &settings, credentials, &file)?,
        Some(Commands::Logout) => handle_logout(&storage, &settings, credentials)?,
        None => {
            println!("Expensify Lite - personal expense tracker");
            println!();
            println!("Run 'expensify --help' for usage information.");
        }
    }

    Ok(())
}
