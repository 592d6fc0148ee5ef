use anyhow::Result;
use clap::Parser;
use medloc::config::Config;
use medloc::workspace::Workspace;
use medloc::{cli, locator, util};
use serde_json::json;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    match args.command {
        cli::Command::Locate {
            workspace: root,
            file,
        } => {
            let active_text = util::read_to_string(&file)?;
            let active_path = util::normalize_path(&file);
            let workspace = Workspace::from_dir(&root)?;
            let files = workspace.source_files(&Config::get().source_extension);
            let result = locator::locate_handler(&active_path, &active_text, &files);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        cli::Command::RequestType { file } => {
            let text = util::read_to_string(&file)?;
            let path = util::normalize_path(&file);
            let request_type = locator::request_type(&path, &text)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "request_type": request_type }))?
            );
            Ok(())
        }
        cli::Command::Files { workspace: root } => {
            let workspace = Workspace::from_dir(&root)?;
            let files = workspace.candidate_paths(&Config::get().source_extension);
            println!("{}", serde_json::to_string_pretty(&files)?);
            Ok(())
        }
    }
}
