use crate::config::Config;
use crate::model::{QueryResult, SourceFile};
use anyhow::{Context, Result};

pub mod extract;
pub mod resolve;
pub mod syntax;

use extract::RequestTypeExtractor;
use resolve::HandlerResolver;

/// Locate the handler for the request type declared in the active file.
///
/// Runs the extractor on the active text, then scans `workspace_files` in
/// order for the first matching handler class. Recoverable outcomes are data,
/// not errors; any unexpected fault is caught here and reported as the
/// `Failure` variant rather than propagating to the host.
pub fn locate_handler(
    active_file_path: &str,
    active_file_text: &str,
    workspace_files: &[SourceFile],
) -> QueryResult {
    match locate_inner(active_file_path, active_file_text, workspace_files) {
        Ok(result) => result,
        Err(err) => QueryResult::Failure {
            message: format!("{err:#}"),
        },
    }
}

fn locate_inner(
    active_file_path: &str,
    active_file_text: &str,
    workspace_files: &[SourceFile],
) -> Result<QueryResult> {
    let config = Config::get();
    let mut extractor = RequestTypeExtractor::new()?;
    let request_type = extractor
        .request_type(active_file_text, &config.request_interface)
        .with_context(|| format!("extract request type from {active_file_path}"))?;
    let Some(request_type) = request_type else {
        return Ok(QueryResult::RequestTypeNotDetermined);
    };
    let mut resolver = HandlerResolver::new()?;
    match resolver.resolve(&request_type, &config.handler_interface, workspace_files) {
        Some(location) => Ok(QueryResult::Found(location)),
        None => Ok(QueryResult::HandlerNotFound),
    }
}

/// Extractor half of the query, for hosts that only need the identifier.
pub fn request_type(active_file_path: &str, active_file_text: &str) -> Result<Option<String>> {
    let config = Config::get();
    let mut extractor = RequestTypeExtractor::new()?;
    extractor
        .request_type(active_file_text, &config.request_interface)
        .with_context(|| format!("extract request type from {active_file_path}"))
}
