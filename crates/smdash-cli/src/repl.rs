//! Line-oriented interactive session.
//!
//! Every filter command re-runs the whole filter and aggregate pipeline
//! against the cached table and prints the current view again. `reload`
//! drops the cache and reads the source from disk.

use std::io::{BufRead, Write};

use smdash_analytics::DashboardSession;
use smdash_data::DatasetLoader;

use crate::filters::{clean_values, parse_years};
use crate::render::{Renderer, View};

const HELP: &str = "\
commands:
  platform [A,B,..]       select platforms (no values selects none)
  content-type [A,B,..]   select content types
  year [2023,2024,..]     select years
  all                     select every value again
  view <name>             all | summary | engagement | content | campaigns | timing
  show                    render the current view
  options                 list available filter values
  reload                  re-read the dataset from disk
  help                    this text
  quit                    leave
";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Platforms(Vec<String>),
    ContentTypes(Vec<String>),
    Years(Vec<String>),
    All,
    View(View),
    Show,
    Options,
    Reload,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let values = || -> Vec<String> { rest.split(',').map(str::to_string).collect() };

    let command = match head {
        "platform" | "platforms" => Command::Platforms(values()),
        "content-type" | "content" => Command::ContentTypes(values()),
        "year" | "years" => Command::Years(values()),
        "all" | "reset" => Command::All,
        "view" => {
            let name = rest.trim();
            Command::View(View::parse(name).ok_or_else(|| format!("unknown view '{name}'"))?)
        }
        "show" => Command::Show,
        "options" => Command::Options,
        "reload" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}'; try `help`")),
    };
    Ok(Some(command))
}

/// Run until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Bad commands
/// and failed reloads are reported inline and the session continues.
pub(crate) fn run<R: BufRead, W: Write>(
    loader: &DatasetLoader,
    session: &mut DashboardSession,
    renderer: &Renderer,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut view = View::All;
    write!(out, "{}", renderer.render(&session.render(), view)?)?;
    writeln!(out, "type `help` for commands")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "error: {message}")?;
                continue;
            }
        };
        tracing::debug!(?command, "repl command");

        match command {
            Command::Quit => break,
            Command::Help => {
                write!(out, "{HELP}")?;
                continue;
            }
            Command::Options => {
                write!(out, "{}", renderer.options(session.options())?)?;
                continue;
            }
            Command::Platforms(values) => session.set_platforms(clean_values(&values)),
            Command::ContentTypes(values) => session.set_content_types(clean_values(&values)),
            Command::Years(values) => match parse_years(&values) {
                Ok(years) => session.set_years(years),
                Err(err) => {
                    writeln!(out, "error: {err}")?;
                    continue;
                }
            },
            Command::All => session.reset(),
            Command::View(next) => view = next,
            Command::Show => {}
            Command::Reload => {
                loader.invalidate();
                match loader.load() {
                    Ok(table) => {
                        session.replace_table(table);
                        writeln!(out, "reloaded {} rows", session.table().len())?;
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "reload failed");
                        writeln!(out, "error: reload failed: {err}")?;
                        continue;
                    }
                }
            }
        }

        write!(out, "{}", renderer.render(&session.render(), view)?)?;
    }

    Ok(())
}
