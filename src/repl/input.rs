//! Terminal input handling for the Verdant REPL.
//!
//! Wraps rustyline configuration, history, and command completion, falling
//! back to plain stdin when the session is not interactive.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::style::GardenStyle;

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

const COMMAND_WORDS: &[&str] = &[
    "plant", "sow", "tend", "water", "harvest", "pick", "gather", "forage", "scrounge", "inventory", "inv",
    "pouch", "garden", "look", "plots", "beds", "help", "quit", "exit",
];

lazy_static! {
    static ref COMMAND_TERMS: Vec<String> = build_command_terms();
}

fn build_command_terms() -> Vec<String> {
    let mut terms: Vec<String> = COMMAND_WORDS.iter().map(|word| (*word).to_string()).collect();
    terms.sort_unstable();
    terms.dedup();
    terms
}

type ReplEditor = rustyline::Editor<VerdantHelper, DefaultHistory>;

#[derive(Default)]
struct VerdantHelper;

impl Helper for VerdantHelper {}

impl Completer for VerdantHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        let mut pairs = Vec::new();
        for term in COMMAND_TERMS.iter() {
            if term.starts_with(&lower) {
                pairs.push(Pair {
                    display: term.clone(),
                    replacement: term.clone(),
                });
            }
        }
        Ok((start, pairs))
    }
}

impl Hinter for VerdantHelper {
    type Hint = String;
}

impl Highlighter for VerdantHelper {}

impl Validator for VerdantHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling
/// back to a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

/// Present `candidates` enumerated from 1 and return the chosen entry.
///
/// Non-numeric or out-of-range replies re-prompt; the invalid input never
/// reaches the caller. `None` means the player backed out (EOF or Ctrl-C).
///
/// # Errors
/// Propagates input backend failures.
pub fn select(input: &mut InputManager, heading: &str, candidates: &[String]) -> io::Result<Option<String>> {
    println!("{}", heading.subheading_style());
    for (idx, name) in candidates.iter().enumerate() {
        println!("  {}. {}", idx + 1, name.species_style());
    }
    let prompt = format!("Choose 1-{}: ", candidates.len());
    loop {
        match input.read_line(&prompt)? {
            InputEvent::Line(line) => match line.trim().parse::<usize>() {
                Ok(n) if (1..=candidates.len()).contains(&n) => return Ok(Some(candidates[n - 1].clone())),
                _ => println!("{}", "Pick one of the listed numbers.".error_style()),
            },
            InputEvent::Eof | InputEvent::Interrupted => return Ok(None),
        }
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = rustyline::Editor::<VerdantHelper, _>::new().map_err(map_io_err)?;
        editor.set_helper(Some(VerdantHelper));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent() {
                if let Err(err) = fs::create_dir_all(dir) {
                    warn!("failed to create history directory {}: {err}", dir.display());
                }
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref() {
                        if let Err(err) = self.editor.save_history(path) {
                            warn!("failed to persist history to {}: {err}", path.display());
                        }
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir().or_else(dirs::data_local_dir).map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("verdant");
    path.push("history.txt");
    path
}
