//! Interactive REPL for poking at the docs service without an MCP client.
//!
//! Launch with `component-docs-mcp repl`. Type `/help` for commands, Tab to
//! complete.

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};

use component_docs::DocsService;

use crate::config::ServerConfig;
use crate::tools::ToolRegistry;

const COMMANDS: &[(&str, &str)] = &[
    ("/field", "Show the reference for a form field"),
    ("/ls", "List a local docs directory"),
    ("/read", "Print a local docs file"),
    ("/search", "Search local docs for a phrase"),
    ("/stats", "Show cache statistics"),
    ("/tools", "List available MCP tools"),
    ("/info", "Show server capabilities"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

#[derive(Default)]
struct DocsHelper;

impl Completer for DocsHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];
        if input.contains(' ') {
            return Ok((pos, Vec::new()));
        }

        let matches = COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| Pair {
                display: format!("{cmd:<16} {desc}"),
                replacement: format!("{cmd} "),
            })
            .collect();
        Ok((0, matches))
    }
}

impl Hinter for DocsHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|(cmd, _)| cmd.starts_with(line) && *cmd != line)
            .map(|(cmd, _)| cmd[line.len()..].to_string())
    }
}

impl Highlighter for DocsHelper {}
impl Validator for DocsHelper {}
impl Helper for DocsHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Run the REPL against a service built from `config`.
pub async fn run(config: &ServerConfig) -> anyhow::Result<()> {
    let service = crate::build_service(config)?;

    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mcomponent-docs-mcp v{}\x1b[0m \x1b[90m{}\x1b[0m",
        env!("CARGO_PKG_VERSION"),
        service.base_url()
    );
    eprintln!();
    eprintln!(
        "    Press \x1b[36m/\x1b[0m to browse commands, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();

    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<DocsHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rl_config)?;
    rl.set_helper(Some(DocsHelper));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = std::path::PathBuf::from(&home).join(".component_docs_mcp_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let prompt = " \x1b[36mdocs>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let input = line.strip_prefix('/').unwrap_or(line);
                let mut parts = input.splitn(2, ' ');
                let cmd = parts.next().unwrap_or("");
                let args = parts.next().unwrap_or("").trim();

                match cmd {
                    "exit" | "quit" => break,
                    "" | "help" | "h" | "?" => cmd_help(),
                    "clear" | "cls" => eprint!("\x1b[2J\x1b[H"),
                    "info" => cmd_info(),
                    "tools" => cmd_tools(),
                    "field" => cmd_field(args, &service).await,
                    "ls" => cmd_ls(args, &service),
                    "read" => cmd_read(args, &service),
                    "search" => cmd_search(args, &service),
                    "stats" => cmd_stats(&service),
                    _ => eprintln!("  Unknown command '/{cmd}'. Type /help for commands."),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(&hist_path);
    Ok(())
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<18} {desc}");
    }
    eprintln!();
}

fn cmd_info() {
    let capabilities = crate::types::InitializeResult::default_result();
    eprintln!();
    eprintln!(
        "  Server:   {} v{}",
        capabilities.server_info.name, capabilities.server_info.version
    );
    eprintln!("  Protocol: {}", capabilities.protocol_version);
    eprintln!("  Tools:    {}", ToolRegistry::list_tools().len());
    eprintln!();
}

fn cmd_tools() {
    let tools = ToolRegistry::list_tools();
    eprintln!();
    for tool in &tools {
        eprintln!(
            "    {:<22} {}",
            tool.name,
            tool.description.as_deref().unwrap_or("")
        );
    }
    eprintln!();
}

async fn cmd_field(args: &str, service: &DocsService) {
    if args.is_empty() {
        eprintln!("  Usage: /field <subject>");
        return;
    }
    match service.field_reference(args).await {
        Ok(record) => {
            eprintln!();
            eprintln!("  {}  \x1b[90m{}\x1b[0m", record.name, record.url);
            if !record.description.is_empty() {
                eprintln!("  {}", record.description);
            }
            if let Some(usage) = &record.usage {
                eprintln!();
                for line in usage.lines() {
                    eprintln!("    {line}");
                }
            }
            let properties = record.properties.as_deref().unwrap_or_default();
            let examples = record.examples.as_deref().unwrap_or_default();
            eprintln!();
            eprintln!(
                "  {} properties, {} examples",
                properties.len(),
                examples.len()
            );
            for prop in properties {
                let marker = if prop.required { " (required)" } else { "" };
                eprintln!("    {:<24} {}{marker}", prop.name, prop.description);
            }
            eprintln!();
        }
        Err(e) => eprintln!("  {e}"),
    }
}

fn cmd_ls(args: &str, service: &DocsService) {
    let Some(store) = service.store() else {
        eprintln!("  No docs directory configured.");
        return;
    };
    match store.list_entries(args) {
        Ok(entries) => {
            for entry in entries {
                let suffix = match entry.kind {
                    component_docs::EntryKind::Directory => "/",
                    component_docs::EntryKind::File => "",
                };
                eprintln!("    {}{suffix}", entry.name);
            }
        }
        Err(e) => eprintln!("  {e}"),
    }
}

fn cmd_read(args: &str, service: &DocsService) {
    let Some(store) = service.store() else {
        eprintln!("  No docs directory configured.");
        return;
    };
    if args.is_empty() {
        eprintln!("  Usage: /read <path>");
        return;
    }
    match store.read_file(args) {
        Ok(text) => eprintln!("{text}"),
        Err(e) => eprintln!("  {e}"),
    }
}

fn cmd_search(args: &str, service: &DocsService) {
    let Some(store) = service.store() else {
        eprintln!("  No docs directory configured.");
        return;
    };
    match store.search_content(args) {
        Ok(hits) if hits.is_empty() => eprintln!("  No matches."),
        Ok(hits) => {
            for hit in hits {
                eprintln!("    {hit}");
            }
        }
        Err(e) => eprintln!("  {e}"),
    }
}

fn cmd_stats(service: &DocsService) {
    eprintln!();
    eprintln!("  Base URL:       {}", service.base_url());
    eprintln!("  Cached fields:  {}", service.cache().len());
    for subject in service.cache().subjects() {
        eprintln!("    {subject}");
    }
    if let Some(store) = service.store() {
        eprintln!("  Docs dir:       {}", store.base_dir().display());
        eprintln!("  Cached files:   {}", store.cached_files());
    }
    eprintln!();
}
