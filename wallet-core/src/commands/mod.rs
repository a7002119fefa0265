//! CLI command definitions and handlers.

mod output;

use clap::{Parser, Subcommand};
use colored::Colorize;
use hdwallet_core::{ChainType, FileStore, WalletConfig, WalletMnemonic, WalletSetManager};
use std::path::PathBuf;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// hdwallet - deterministic Solana / Ethereum wallets from a BIP-39 phrase.
#[derive(Parser)]
#[command(name = "hdwallet")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the persisted wallet set.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new wallet set, replacing the stored one.
    New {
        /// Chain: sol | eth (or coin type 501 | 60).
        #[arg(short, long)]
        chain: ChainType,

        /// Import this 12-word phrase instead of generating one.
        #[arg(short, long)]
        phrase: Option<String>,

        /// Number of wallets to derive right away.
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
    },

    /// Derive more wallets into the stored set.
    Add {
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
    },

    /// Show the stored wallets.
    List {
        /// Also print private keys.
        #[arg(long)]
        show_secrets: bool,
    },

    /// Remove the wallet at a display position (0-based).
    Remove { position: usize },

    /// Delete the stored phrase and every wallet.
    Clear,

    /// Print the stored recovery phrase.
    Mnemonic {
        /// Print a fresh phrase instead; nothing is stored.
        #[arg(long)]
        generate: bool,
    },

    /// Check a recovery phrase without storing anything.
    Validate { phrase: String },
}

impl Cli {
    pub fn execute(self) -> CliResult {
        let Cli {
            store,
            config,
            command,
            ..
        } = self;

        match command {
            Commands::Validate { phrase } => validate(&phrase),
            command => {
                let mut manager = open_manager(store, config)?;
                run(command, &mut manager)
            }
        }
    }
}

fn run(command: Commands, manager: &mut WalletSetManager) -> CliResult {
    match command {
        Commands::New {
            chain,
            phrase,
            count,
        } => {
            let mnemonic = manager.start_new(chain, phrase.as_deref().unwrap_or_default())?;
            for _ in 0..count {
                manager.derive_next()?;
            }
            output::print_mnemonic(&mnemonic, chain);
            output::print_wallets(manager.wallets(), 0, true);
        }
        Commands::Add { count } => {
            manager.restore()?;
            let first = manager.len();
            for _ in 0..count {
                manager.derive_next()?;
            }
            output::print_wallets(&manager.wallets()[first..], first, true);
        }
        Commands::List { show_secrets } => {
            if !manager.restore()? {
                println!("{}", "No wallet set stored.".dimmed());
                return Ok(());
            }
            if let Some(chain) = manager.chain() {
                output::print_chain(chain);
            }
            output::print_wallets(manager.wallets(), 0, show_secrets);
        }
        Commands::Remove { position } => {
            manager.restore()?;
            let removed = manager.remove(position)?;
            println!("Removed {} ({})", removed.public_key().green(), removed.path());
        }
        Commands::Clear => manager.clear()?,
        Commands::Mnemonic { generate } => {
            if generate {
                println!("{}", WalletMnemonic::generate().phrase());
                return Ok(());
            }
            manager.restore()?;
            match (manager.mnemonic(), manager.chain()) {
                (Some(mnemonic), Some(chain)) => output::print_mnemonic(mnemonic, chain),
                _ => println!("{}", "No wallet set stored.".dimmed()),
            }
        }
        Commands::Validate { phrase } => validate(&phrase)?,
    }
    Ok(())
}

fn open_manager(
    store: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<WalletSetManager, Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => WalletConfig::from_file(path)?,
        None => WalletConfig::default(),
    }
    .apply_env_overrides()?;

    let dir = store.unwrap_or_else(FileStore::default_dir);
    tracing::debug!(store = %dir.display(), ?config, "opening wallet store");

    Ok(WalletSetManager::new(config)
        .with_store(FileStore::new(dir))
        .with_notifier(output::notify))
}

fn validate(phrase: &str) -> CliResult {
    WalletMnemonic::from_phrase(phrase.trim())?;
    println!("{}", "Valid recovery phrase".green());
    Ok(())
}
