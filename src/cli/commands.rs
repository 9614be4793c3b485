//! Command dispatch: verb lookup, argv composition, subprocess execution

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::dispatch::{self, HELP_NAME, ORCHESTRATOR, ORCHESTRATOR_SUBCOMMAND};
use crate::exitcode;
use crate::infrastructure::{propagate_status, ProcessRunner};

/// Execute the parsed invocation and return the process exit code.
///
/// Local failures (unknown verb, spawn failure) come back as [`CliError`];
/// anything the child reports is not an error here, its exit code is the
/// return value.
#[instrument(skip(runner))]
pub fn execute_command(cli: &Cli, runner: &dyn ProcessRunner) -> CliResult<i32> {
    let Some((verb, passthrough)) = cli.command.split_first() else {
        // bare `forgectl` behaves like `forgectl help`
        output::listing(&dispatch::help_listing());
        return Ok(exitcode::OK);
    };

    if verb == HELP_NAME {
        output::listing(&dispatch::help_listing());
        return Ok(exitcode::OK);
    }

    let Some(entry) = dispatch::find(verb) else {
        output::listing_stderr(&dispatch::help_listing());
        return Err(CliError::UnknownCommand(verb.clone()));
    };

    let mut args = vec![ORCHESTRATOR_SUBCOMMAND.to_string()];
    args.extend(dispatch::compose(entry, passthrough));
    debug!("spawning: {} {}", ORCHESTRATOR, args.join(" "));

    let status = runner
        .run(ORCHESTRATOR, &args)
        .map_err(|source| CliError::Spawn {
            program: ORCHESTRATOR.to_string(),
            source,
        })?;
    Ok(propagate_status(status))
}
