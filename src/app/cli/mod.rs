//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::api::{self, CollectionOptions, CollectionTarget, FragmentOptions};
use crate::app::logging::init_logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "fragment-gen")]
#[command(version)]
#[command(about = "Scaffold fragments and fragment collections", long_about = None)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    dir: Option<PathBuf>,
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new fragment under src/<collection>/
    #[clap(visible_alias = "f")]
    Fragment {
        /// Fragment name
        #[arg(short, long)]
        name: Option<String>,
        /// Fragment description
        #[arg(short, long)]
        description: Option<String>,
        /// Fragment type (component, section)
        #[arg(short = 't', long = "type")]
        fragment_type: Option<String>,
        /// Slug of an existing collection
        #[arg(short, long, conflicts_with = "new_collection")]
        collection: Option<String>,
        /// Create a new collection instead of picking one
        #[arg(long)]
        new_collection: bool,
    },
    /// Create a new collection under src/
    #[clap(visible_alias = "c")]
    Collection {
        /// Collection name
        #[arg(short, long)]
        name: Option<String>,
        /// Collection description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List collections a fragment can be added to
    #[clap(visible_alias = "ls")]
    List,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().map_err(AppError::from),
    }
    .and_then(|root| run_command(&root, cli.command));

    match result {
        Ok(()) => {}
        Err(AppError::Cancelled) => {
            eprintln!("Cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_command(root: &Path, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Fragment { name, description, fragment_type, collection, new_collection } => {
            let collection = if new_collection {
                Some(CollectionTarget::New)
            } else {
                collection.map(CollectionTarget::Existing)
            };
            let options = FragmentOptions { name, description, fragment_type, collection };
            run_fragment(root, &options)
        }
        Commands::Collection { name, description } => {
            let outcome = api::create_collection(root, &CollectionOptions { name, description })?;
            println!("✅ Created new collection at {}/", outcome.display_path());
            Ok(())
        }
        Commands::List => {
            for choice in api::list_collections(root) {
                println!("{} {}", choice.name, choice.short);
            }
            Ok(())
        }
    }
}

fn run_fragment(root: &Path, options: &FragmentOptions) -> Result<(), AppError> {
    let outcome = api::create_fragment(root, options)?;
    match outcome.display_path() {
        Some(path) => println!("✅ Created new fragment at {}/", path),
        None => println!("✅ Created new collection; run the fragment generator again to add the fragment"),
    }
    Ok(())
}
