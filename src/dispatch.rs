//! Static command table: the single source of truth for dispatch and help.
//!
//! Every verb maps to a pre-composed `docker compose` invocation against the
//! fixed compose file. Composition is a pure function so it can be tested
//! without containers; execution lives in the infrastructure layer.

/// Program the composed argv is handed to.
pub const ORCHESTRATOR: &str = "docker";

/// Subcommand token prepended at spawn time (`docker compose ...`).
pub const ORCHESTRATOR_SUBCOMMAND: &str = "compose";

/// Fixed path to the orchestration config. Not overridable by env or flags.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// One verb bound to a pre-composed invocation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    /// Unique key the user types, e.g. "up", "logs-api".
    pub name: &'static str,
    /// Tokens appended after the `-f <compose-file>` prefix.
    pub template: &'static [&'static str],
    /// One-liner shown by `help`.
    pub about: &'static str,
}

/// The command table, in curated display order.
///
/// `help` is not listed here: it is handled locally and never spawns a
/// subprocess, but it still appears in the help listing (see [`help_listing`]).
pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "up",
        template: &["up", "-d", "--build"],
        about: "Build images and start all services, detached",
    },
    CommandEntry {
        name: "down",
        template: &["down"],
        about: "Stop all services",
    },
    CommandEntry {
        name: "reset",
        template: &["down", "-v"],
        about: "Stop all services and DELETE persisted volumes",
    },
    CommandEntry {
        name: "ps",
        template: &["ps"],
        about: "List service status",
    },
    CommandEntry {
        name: "logs",
        template: &["logs", "-f"],
        about: "Follow logs for all services",
    },
    CommandEntry {
        name: "logs-api",
        template: &["logs", "-f", "api"],
        about: "Follow logs for the API only",
    },
    CommandEntry {
        name: "logs-db",
        template: &["logs", "-f", "postgres"],
        about: "Follow logs for PostgreSQL only",
    },
    CommandEntry {
        name: "logs-worker",
        template: &["logs", "-f", "worker"],
        about: "Follow logs for the Celery worker only",
    },
    CommandEntry {
        name: "restart-api",
        template: &["restart", "api"],
        about: "Restart the API service",
    },
    CommandEntry {
        name: "db-shell",
        template: &["exec", "postgres", "psql", "-U", "leadforge", "-d", "leadforge"],
        about: "Open a psql session in the database container",
    },
    CommandEntry {
        name: "redis-shell",
        template: &["exec", "redis", "redis-cli"],
        about: "Open a redis-cli session in the cache container",
    },
    CommandEntry {
        name: "migrate",
        template: &["exec", "api", "alembic", "upgrade", "head"],
        about: "Apply pending database migrations",
    },
    CommandEntry {
        name: "test",
        template: &["exec", "api", "pytest"],
        about: "Run the test suite inside the API container",
    },
    CommandEntry {
        name: "lint",
        template: &["exec", "api", "ruff", "check", "."],
        about: "Run lint checks inside the API container",
    },
    CommandEntry {
        name: "format",
        template: &["exec", "api", "ruff", "format", "."],
        about: "Format code inside the API container",
    },
];

/// Verb handled locally, listed last in help.
pub const HELP_NAME: &str = "help";
const HELP_ABOUT: &str = "Print this command listing";

/// Look up a verb in the table. `help` is not a table entry.
pub fn find(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.name == name)
}

/// Compose the full argument sequence for an entry: the fixed `-f` prefix,
/// the entry's template, then any passthrough arguments verbatim.
///
/// Passthrough tokens are forwarded without validation or quoting; stricter
/// handling would change behavior the underlying tools already define.
pub fn compose<S: AsRef<str>>(entry: &CommandEntry, passthrough: &[S]) -> Vec<String> {
    let mut argv = Vec::with_capacity(2 + entry.template.len() + passthrough.len());
    argv.push("-f".to_string());
    argv.push(COMPOSE_FILE.to_string());
    argv.extend(entry.template.iter().map(|t| t.to_string()));
    argv.extend(passthrough.iter().map(|s| s.as_ref().to_string()));
    argv
}

/// Render the curated help listing. Deterministic: table order, `help` last.
pub fn help_listing() -> String {
    use std::fmt::Write;

    let width = COMMANDS
        .iter()
        .map(|e| e.name.len())
        .chain(std::iter::once(HELP_NAME.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "Commands:");
    for entry in COMMANDS {
        let _ = writeln!(out, "  {:width$}  {}", entry.name, entry.about);
    }
    let _ = writeln!(out, "  {:width$}  {}", HELP_NAME, HELP_ABOUT);
    out
}
