//! `gourmet shell` - interactive ordering session.
//!
//! Reads one command per line, applies it to the session and renders the
//! affected panel. Toasts raised by the session are printed after each
//! command. Bad input prints an error and a usage hint; it never ends the
//! session.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use gourmet_core::{CategoryFilter, FulfillmentMethod, Language, ProductId, View};
use gourmet_storefront::config::parse_bool;
use gourmet_storefront::{Catalog, Notifier, RecordingNotifier, Session, Settings};

use crate::render;

const HELP: &str = "\
Commands:
  view <products|history|calendar|messages|settings>
  products | category <name|all> | search [text]
  open <id> | confirm | close          product dialog
  add <id> | inc <id> | dec <id> | cart
  delivery <takeaway|home|toggle>
  checkout | history
  message [text] | messages
  date <YYYY-MM-DD> | events
  notifications <on|off> | language <name> | dark <on|off> | settings
  help | quit";

/// A shell input line could not be turned into a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{command}`: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    View(View),
    Products,
    Category(CategoryFilter),
    Search(String),
    Open(ProductId),
    Confirm,
    Close,
    Add(ProductId),
    Adjust(ProductId, i32),
    Cart,
    /// `None` flips the current method.
    Delivery(Option<FulfillmentMethod>),
    Checkout,
    History,
    Message(String),
    Messages,
    Date(NaiveDate),
    Events,
    Notifications(bool),
    Language(Language),
    DarkTheme(bool),
    Settings,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ShellError` for unknown commands and missing or malformed
    /// arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word.to_lowercase().as_str() {
            "view" | "go" => Self::View(parse_arg("view", rest, "a view name")?),
            "products" => Self::Products,
            "category" => Self::Category(parse_arg("category", rest, "a category or `all`")?),
            "search" => Self::Search(rest.to_string()),
            "open" => Self::Open(parse_arg("open", rest, "a product id")?),
            "confirm" => Self::Confirm,
            "close" => Self::Close,
            "add" => Self::Add(parse_arg("add", rest, "a product id")?),
            "inc" | "+" => Self::Adjust(parse_arg("inc", rest, "a product id")?, 1),
            "dec" | "-" => Self::Adjust(parse_arg("dec", rest, "a product id")?, -1),
            "cart" => Self::Cart,
            "delivery" => match rest.to_lowercase().as_str() {
                "" | "toggle" => Self::Delivery(None),
                _ => Self::Delivery(Some(parse_arg("delivery", rest, "a fulfillment method")?)),
            },
            "checkout" | "finalize" => Self::Checkout,
            "history" => Self::History,
            "message" => Self::Message(rest.to_string()),
            "messages" => Self::Messages,
            "date" => Self::Date(parse_arg("date", rest, "a date as YYYY-MM-DD")?),
            "events" => Self::Events,
            "notifications" => Self::Notifications(parse_flag("notifications", rest)?),
            "language" => Self::Language(parse_arg("language", rest, "a language")?),
            "dark" => Self::DarkTheme(parse_flag("dark", rest)?),
            "settings" => Self::Settings,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(ShellError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_arg<T>(command: &'static str, rest: &str, expected: &'static str) -> Result<T, ShellError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if rest.is_empty() {
        return Err(ShellError::MissingArgument { command, expected });
    }
    rest.parse::<T>()
        .map_err(|e| ShellError::InvalidArgument {
            command,
            reason: e.to_string(),
        })
}

fn parse_flag(command: &'static str, rest: &str) -> Result<bool, ShellError> {
    if rest.is_empty() {
        return Err(ShellError::MissingArgument {
            command,
            expected: "`on` or `off`",
        });
    }
    parse_bool(command, rest).map_err(|e| ShellError::InvalidArgument {
        command,
        reason: e.to_string(),
    })
}

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply `command` to the session and render the result.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn execute<N: Notifier>(
    session: &mut Session<N>,
    command: ShellCommand,
    out: &mut impl Write,
) -> io::Result<Flow> {
    debug!(?command, "Executing shell command");
    match command {
        ShellCommand::View(view) => {
            session.navigate(view);
            render::view(out, session)?;
        }
        ShellCommand::Products => {
            session.navigate(View::Products);
            render::products(out, session)?;
        }
        ShellCommand::Category(category) => {
            session.navigate(View::Products);
            session.select_category(category);
            render::products(out, session)?;
        }
        ShellCommand::Search(query) => {
            session.set_query(query);
            session.navigate(View::Products);
            render::products(out, session)?;
        }
        ShellCommand::Open(id) => {
            if session.open_product(id) {
                if let Some(product) = session.dialog().selected() {
                    render::product_dialog(out, product)?;
                }
            } else {
                writeln!(out, "No product #{id}")?;
            }
        }
        ShellCommand::Confirm => {
            if session.confirm_product() {
                render::cart(out, session)?;
            } else {
                writeln!(out, "No product dialog is open (use `open <id>`)")?;
            }
        }
        ShellCommand::Close => session.close_product(),
        ShellCommand::Add(id) => {
            if session.add_product(id) {
                render::cart(out, session)?;
            } else {
                writeln!(out, "No product #{id}")?;
            }
        }
        ShellCommand::Adjust(id, delta) => {
            session.adjust_quantity(id, delta);
            render::cart(out, session)?;
        }
        ShellCommand::Cart => render::cart(out, session)?,
        ShellCommand::Delivery(method) => {
            match method {
                Some(method) => session.set_fulfillment(method),
                None => {
                    session.toggle_fulfillment();
                }
            }
            writeln!(out, "Fulfillment: {}", session.fulfillment())?;
        }
        ShellCommand::Checkout => {
            session.finalize_order();
        }
        ShellCommand::History => {
            session.navigate(View::History);
            render::history(out, session.orders())?;
        }
        ShellCommand::Message(text) => {
            let message = session.add_message(text);
            writeln!(out, "Message #{} posted", message.id)?;
        }
        ShellCommand::Messages => {
            session.navigate(View::Messages);
            render::messages(out, session.inbox())?;
        }
        ShellCommand::Date(date) => {
            let event = session.select_date(date);
            writeln!(out, "Event #{} added on {}", event.id, event.date)?;
        }
        ShellCommand::Events => {
            session.navigate(View::Calendar);
            render::calendar(out, session.calendar())?;
        }
        ShellCommand::Notifications(enabled) => {
            session.set_notifications(enabled);
            render::settings(out, session.settings())?;
        }
        ShellCommand::Language(language) => {
            session.set_language(language);
            render::settings(out, session.settings())?;
        }
        ShellCommand::DarkTheme(enabled) => {
            session.set_dark_theme(enabled);
            render::settings(out, session.settings())?;
        }
        ShellCommand::Settings => {
            session.navigate(View::Settings);
            render::settings(out, session.settings())?;
        }
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Drive a session from `input` until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_with(
    session: &mut Session<RecordingNotifier>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    render::header(out, session)?;
    render::products(out, session)?;
    writeln!(out, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let flow = match ShellCommand::parse(&line) {
            Ok(Some(command)) => execute(session, command, out)?,
            Ok(None) => Flow::Continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Flow::Continue
            }
        };

        for toast in session.notifier_mut().drain() {
            render::toast(out, &toast)?;
        }

        if flow == Flow::Quit {
            break;
        }
    }

    info!(
        orders = session.orders().len(),
        messages = session.inbox().len(),
        events = session.calendar().len(),
        "Session ended"
    );
    Ok(())
}

/// Run an interactive session on stdin/stdout.
///
/// # Errors
///
/// Returns an error if terminal I/O fails.
pub fn run(catalog: Catalog, settings: Settings) -> io::Result<()> {
    let mut session = Session::new(catalog, settings, RecordingNotifier::new());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&mut session, stdin.lock(), &mut out)
}
