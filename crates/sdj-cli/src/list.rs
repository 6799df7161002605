//! # List Subcommand
//!
//! Prints the registered type and constraint vocabularies, one name per
//! line, for discovery and shell completion.

use anyhow::Result;
use clap::Args;

use sdj_engine::Registry;

/// Arguments for the `sdj list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// List registered type names only.
    #[arg(long)]
    pub types: bool,

    /// List registered constraint names only.
    #[arg(long)]
    pub constraints: bool,
}

/// Execute the list subcommand. With no flags, both vocabularies are
/// printed under headers.
pub fn run_list(args: &ListArgs) -> Result<u8> {
    let registry = Registry::default();
    let both = !args.types && !args.constraints;

    if args.types || both {
        if both {
            println!("Types:");
        }
        for name in registry.type_names() {
            println!("{name}");
        }
    }

    if args.constraints || both {
        if both {
            println!("\nConstraints:");
        }
        for name in registry.constraint_names() {
            println!("{name}");
        }
    }

    Ok(0)
}
