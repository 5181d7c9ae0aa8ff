//! Terminal output for the `init` and `config` commands
//!
//! Every line is rendered to a `String` first so the wording can be tested
//! without a terminal; the `colored` flag only changes decoration.

use crate::utils::toml_config::{ConfigWarning, ConfigWarningKind, ProviderKind};
use owo_colors::OwoColorize;
use std::path::Path;

/// What happened to a file `init` wanted to write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    Overwritten,
    /// Left untouched, with the reason
    Kept(&'static str),
}

/// CLI output style
pub struct Output {
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self { colored: true }
    }

    pub fn no_color() -> Self {
        Self { colored: false }
    }

    pub fn banner(&self) {
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        if self.colored {
            println!(
                "\n   {}{}  {} {}\n",
                "Soft".bright_blue().bold(),
                "Sell".bright_white().bold(),
                "Software License Resale Platform".dimmed(),
                version.dimmed()
            );
        } else {
            println!("\n   SoftSell  Software License Resale Platform {}\n", version);
        }
    }

    pub fn section(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    pub fn field(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {:<9} {}", format!("{}:", key).dimmed(), value.bright_white());
        } else {
            println!("    {:<9} {}", format!("{}:", key), value);
        }
    }

    /// Provider, model and whether its API key variable is set
    pub fn provider_status(&self, kind: ProviderKind, model: &str, key_env: &str, key_set: bool) {
        println!("{}", self.provider_line(kind, model, key_env, key_set));
    }

    fn provider_line(&self, kind: ProviderKind, model: &str, key_env: &str, key_set: bool) -> String {
        let key_state = if key_set { "set" } else { "not set" };
        if !self.colored {
            return format!(
                "    Provider: {} / {} (key {} {})",
                kind.name(),
                model,
                key_env,
                key_state
            );
        }

        let key_state = if key_set {
            key_state.green().to_string()
        } else {
            key_state.red().bold().to_string()
        };
        format!(
            "    {} {} / {} {}",
            "Provider:".dimmed(),
            kind.name().bright_white().bold(),
            model.bright_white(),
            format!("(key {} {})", key_env, key_state).dimmed()
        )
    }

    pub fn config_warning(&self, warning: &ConfigWarning) {
        println!("{}", self.warning_line(warning));
    }

    fn warning_line(&self, warning: &ConfigWarning) -> String {
        let tag = match warning.kind {
            ConfigWarningKind::MissingApiKey => "api key",
            ConfigWarningKind::ProviderUnavailable => "provider",
            ConfigWarningKind::PermissiveCors => "cors",
        };
        if self.colored {
            format!(
                "  {} {} {}",
                "⚠".yellow().bold(),
                format!("[{}]", tag).yellow(),
                warning.message
            )
        } else {
            format!("  [WARN:{}] {}", tag, warning.message)
        }
    }

    pub fn file(&self, path: &Path, outcome: FileOutcome) {
        println!("{}", self.file_line(path, outcome));
    }

    fn file_line(&self, path: &Path, outcome: FileOutcome) -> String {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match (outcome, self.colored) {
            (FileOutcome::Created, false) => format!("  [CREATED] {}", name),
            (FileOutcome::Overwritten, false) => format!("  [REPLACED] {}", name),
            (FileOutcome::Kept(reason), false) => format!("  [SKIPPED] {} ({})", name, reason),
            (FileOutcome::Created, true) => {
                format!("  {} {}", "✓".green().bold(), name.bright_white())
            }
            (FileOutcome::Overwritten, true) => {
                format!("  {} {} {}", "↻".green().bold(), name.bright_white(), "(replaced)".dimmed())
            }
            (FileOutcome::Kept(reason), true) => format!(
                "  {} {} {}",
                "○".yellow(),
                name.dimmed(),
                format!("({})", reason).yellow()
            ),
        }
    }

    pub fn ok(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Non-fatal notice on stdout
    pub fn notice(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Fatal problem, on stderr
    pub fn fail(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Numbered instruction followed by the shell commands that carry it out
    pub fn next_step(&self, number: usize, title: &str, commands: &[&str]) {
        println!("{}", self.step_block(number, title, commands));
    }

    fn step_block(&self, number: usize, title: &str, commands: &[&str]) -> String {
        let mut block = if self.colored {
            format!("\n  {} {}", format!("{}.", number).bright_blue().bold(), title)
        } else {
            format!("\n  {}. {}", number, title)
        };
        for cmd in commands {
            block.push('\n');
            if self.colored {
                block.push_str(&format!("     {}", format!("$ {}", cmd).bright_cyan()));
            } else {
                block.push_str(&format!("     $ {}", cmd));
            }
        }
        block
    }

    pub fn tip(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }
}
