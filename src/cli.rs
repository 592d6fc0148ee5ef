use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "medloc",
    version,
    about = "Locate the MediatR handler for a request type",
    after_help = r#"Examples:
  medloc locate --workspace . --file src/Orders/CreateOrder.cs
  medloc request-type --file src/Orders/CreateOrder.cs
  medloc files --workspace .
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the handler for the request type declared in a file.
    Locate {
        /// Workspace root scanned for handler candidates.
        #[arg(long, default_value = ".")]
        workspace: PathBuf,
        /// Active source file declaring the request type.
        #[arg(long)]
        file: PathBuf,
    },
    /// Print the request type declared in a file.
    RequestType {
        #[arg(long)]
        file: PathBuf,
    },
    /// List candidate files in scan order.
    Files {
        #[arg(long, default_value = ".")]
        workspace: PathBuf,
    },
}
