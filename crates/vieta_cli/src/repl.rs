//! Interactive solve loop.

use rustyline::error::ReadlineError;

use crate::commands::solve::{render_solution, SolveOptions};
use crate::config::{OutputFormat, VietaConfig};
use crate::input::Coefficients;
use crate::render::equation_preview;

const HELP: &str = "\
Enter three coefficients a b c (spaces or commas), e.g. `1 -3 2`.
Commands:
  steps on|off    show or hide the derivation
  verify on|off   check roots by substitution
  preview a b c   show the equation without solving
  help            this message
  quit | exit     leave";

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    Print(String),
    Quit,
}

pub struct Repl {
    options: SolveOptions,
}

impl Repl {
    pub fn new(config: &VietaConfig) -> Self {
        Self {
            options: SolveOptions {
                format: OutputFormat::Text,
                show_steps: config.show_steps,
                verify: config.verify,
            },
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("Vieta quadratic solver");
        println!("Type `help` for commands.");

        let config = rustyline::Config::builder()
            .max_history_size(100)?
            .auto_add_history(false)
            .build();
        let mut rl = rustyline::DefaultEditor::with_config(config)?;

        // History file path: ~/.vieta_history
        let history_path = dirs::home_dir()
            .map(|p| p.join(".vieta_history"))
            .unwrap_or_else(|| std::path::PathBuf::from(".vieta_history"));

        let _ = rl.load_history(&history_path);

        loop {
            match rl.readline("> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;

                    match self.handle_line(line) {
                        ReplAction::Print(text) => println!("{}", text.trim_end()),
                        ReplAction::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("readline failed: {:?}", err);
                    break;
                }
            }
        }

        if let Err(e) = rl.save_history(&history_path) {
            tracing::debug!("could not save history: {}", e);
        }
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> ReplAction {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => ReplAction::Quit,
            "help" => ReplAction::Print(HELP.to_string()),
            "steps" | "verify" => self.toggle(command, rest),
            "preview" => {
                let mut fields = rest
                    .split(|ch: char| ch.is_whitespace() || ch == ',')
                    .filter(|f| !f.is_empty());
                ReplAction::Print(equation_preview(fields.next(), fields.next(), fields.next()))
            }
            _ => ReplAction::Print(self.solve_line(line)),
        }
    }

    fn toggle(&mut self, command: &str, arg: &str) -> ReplAction {
        let value = match arg {
            "on" => true,
            "off" => false,
            _ => return ReplAction::Print(format!("Usage: {} on|off", command)),
        };
        let name = if command == "steps" {
            self.options.show_steps = value;
            "Steps"
        } else {
            self.options.verify = value;
            "Verification"
        };
        ReplAction::Print(format!("{} {}.", name, if value { "enabled" } else { "disabled" }))
    }

    fn solve_line(&self, line: &str) -> String {
        let coeffs = match Coefficients::parse_line(line) {
            Ok(coeffs) => coeffs,
            Err(e) => return format!("Error: {}", e),
        };
        match render_solution(coeffs, self.options) {
            Ok(text) => text,
            Err(e) => format!("Error: {:#}", e),
        }
    }
}
