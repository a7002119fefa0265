//! Terminal rendering for wallet sets.

use colored::Colorize;
use hdwallet_core::{ChainType, NotifyLevel, Wallet, WalletMnemonic};

/// Notification sink for the CLI: one colored line on stderr.
pub fn notify(level: NotifyLevel, message: &str) {
    match level {
        NotifyLevel::Success => eprintln!("{}", message.green()),
        NotifyLevel::Info => eprintln!("{}", message.cyan()),
        NotifyLevel::Error => eprintln!("{}", message.red().bold()),
    }
}

#[rustfmt::skip]
pub fn print_chain(chain: ChainType) {
    println!();
    println!("      {}        {} {}", "Chain".cyan().bold(), chain, format!("(coin type {})", chain.coin_type()).dimmed());
}

#[rustfmt::skip]
pub fn print_mnemonic(mnemonic: &WalletMnemonic, chain: ChainType) {
    print_chain(chain);
    println!("      {}     {}", "Mnemonic".cyan().bold(), mnemonic.phrase());
}

#[rustfmt::skip]
pub fn print_wallets(wallets: &[Wallet], first_position: usize, show_secrets: bool) {
    if wallets.is_empty() {
        println!();
        println!("      {}", "(no wallets)".dimmed());
        println!();
        return;
    }

    println!();
    for (offset, wallet) in wallets.iter().enumerate() {
        let position = first_position + offset;
        println!("      {}     {}", "Position".cyan().bold(), format!("[{position}]").dimmed());
        println!("      {}         {}", "Path".cyan().bold(), wallet.path());
        println!("      {}      {}", "Address".cyan().bold(), wallet.public_key().green());
        if show_secrets {
            println!("      {}  {}", "Private Key".cyan().bold(), wallet.private_key());
        }
        println!();
    }
}
