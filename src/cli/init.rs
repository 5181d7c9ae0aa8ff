//! Init command implementation
//!
//! Scaffolds a new SoftSell project with the files the server expects.

use super::output::{FileOutcome, Output};
use crate::utils::toml_config::ProviderKind;
use std::fs;
use std::path::Path;

/// Result of the init operation
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// Project already exists (softsell.toml found)
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: std::path::PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// LLM provider to configure
    pub provider: ProviderKind,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.section("Initializing SoftSell Project");

    let base_path = &config.path;
    if !base_path.exists() {
        if let Err(e) = fs::create_dir_all(base_path) {
            output.fail(&format!("Failed to create {}: {}", base_path.display(), e));
            return InitResult::Error(e.to_string());
        }
    }

    let config_path = base_path.join("softsell.toml");
    if config_path.exists() && !config.force {
        output.notice("softsell.toml already exists!");
        output.tip("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    let required = [
        (config_path, generate_softsell_toml(&config)),
        (base_path.join(".env.example"), generate_env_example(&config)),
    ];
    for (path, content) in &required {
        match write_file(path, content, config.force) {
            Ok(outcome) => output.file(path, outcome),
            Err(e) => {
                output.fail(&format!("Failed to write {}: {}", path.display(), e));
                return InitResult::Error(e.to_string());
            }
        }
    }

    // A project's own .gitignore is never replaced
    let gitignore_path = base_path.join(".gitignore");
    match write_file(&gitignore_path, generate_gitignore(), false) {
        Ok(outcome) => output.file(&gitignore_path, outcome),
        Err(e) => output.notice(&format!("Failed to create .gitignore: {}", e)),
    }

    output.ok("SoftSell project initialized successfully!");

    output.section("Next Steps");
    let edit_key = format!("# Edit .env and set {}", config.provider.default_api_key_env());
    output.next_step(1, "Add your API key:", &["cp .env.example .env", &edit_key]);
    output.next_step(
        2,
        "Build the frontend (optional, for --features ui):",
        &["cd ui && trunk build --release"],
    );
    output.next_step(3, "Start the server:", &["softsell-server"]);

    output.tip(&format!(
        "Site will be available at http://{}:{}",
        config.host, config.port
    ));
    if config.provider == ProviderKind::OpenAI {
        output.tip("The OpenAI provider requires: cargo build --features openai");
    }

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<FileOutcome> {
    let outcome = match (path.exists(), force) {
        (true, false) => return Ok(FileOutcome::Kept("already exists")),
        (true, true) => FileOutcome::Overwritten,
        (false, _) => FileOutcome::Created,
    };
    fs::write(path, content)?;
    Ok(outcome)
}

fn generate_softsell_toml(config: &InitConfig) -> String {
    let provider_note = match config.provider {
        ProviderKind::Gemini => "# Google Gemini generateContent API",
        ProviderKind::OpenAI => "# OpenAI chat completions (requires the `openai` feature)",
    };
    let assistant_section = format!(
        "[assistant]\n{}\nprovider = \"{}\"\nmodel = \"{}\"\napi_key_env = \"{}\"\n",
        provider_note,
        config.provider.name(),
        config.provider.default_model(),
        config.provider.default_api_key_env()
    );

    format!(
        r#"# SoftSell Configuration
# ======================
# Changes to this file are picked up while the server is running.

[server]
host = "{host}"
port = {port}
log_level = "info"
# Browser origins allowed to call /api. Leave empty to allow any origin.
cors_origins = []

{assistant_section}temperature = 0.7
timeout_secs = 30
# max_tokens = 512
# api_base = "http://localhost:8080"

# Reply shown whenever the model cannot answer
fallback_reply = "Sorry, something went wrong. Please try again or contact support."

# Override the built-in support instruction:
# system_prompt = """
# You are a helpful customer support assistant for a platform where users can buy and sell licenses.
# """
"#,
        host = config.host,
        port = config.port,
        assistant_section = assistant_section,
    )
}

fn generate_env_example(config: &InitConfig) -> String {
    format!(
        r#"# SoftSell Environment Variables
# ==============================
# Copy this file to .env and fill in the values.

# REQUIRED: API key for the support assistant
{key}=your-api-key-here

# Optional: Logging level (trace, debug, info, warn, error)
RUST_LOG=info,softsell=debug
"#,
        key = config.provider.default_api_key_env()
    )
}

fn generate_gitignore() -> &'static str {
    r#"# Environment
.env
.env.local
.env.*.local

# Rust
/target/
/ui/target/
/ui/dist/

# IDE
.idea/
.vscode/
*.swp
*~

# OS
.DS_Store
Thumbs.db
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::toml_config::SoftSellConfig;
    use tempfile::TempDir;

    fn init_config(path: &Path, provider: ProviderKind) -> InitConfig {
        InitConfig {
            path: path.to_path_buf(),
            force: false,
            provider,
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }

    #[test]
    fn test_generated_gemini_config_is_valid() {
        let config = InitConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..init_config(Path::new("/tmp"), ProviderKind::Gemini)
        };

        let parsed: SoftSellConfig = toml::from_str(&generate_softsell_toml(&config)).unwrap();
        parsed.validate().unwrap();

        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 8080);
        assert_eq!(parsed.assistant.provider, ProviderKind::Gemini);
        assert_eq!(parsed.assistant.model(), "gemini-1.5-flash");
        assert_eq!(
            parsed.assistant.fallback_reply,
            "Sorry, something went wrong. Please try again or contact support."
        );
    }

    #[test]
    fn test_generated_openai_config_is_valid() {
        let config = init_config(Path::new("/tmp"), ProviderKind::OpenAI);

        let parsed: SoftSellConfig = toml::from_str(&generate_softsell_toml(&config)).unwrap();
        parsed.validate().unwrap();

        assert_eq!(parsed.assistant.provider, ProviderKind::OpenAI);
        assert_eq!(parsed.assistant.api_key_env(), "OPENAI_API_KEY");
    }

    #[test]
    fn test_env_example_names_provider_key() {
        let dir = Path::new("/tmp");
        assert!(generate_env_example(&init_config(dir, ProviderKind::Gemini)).contains("GEMINI_API_KEY="));
        assert!(generate_env_example(&init_config(dir, ProviderKind::OpenAI)).contains("OPENAI_API_KEY="));
    }

    #[test]
    fn test_run_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = init_config(temp_dir.path(), ProviderKind::Gemini);

        let result = run(config, &Output::no_color());

        assert!(matches!(result, InitResult::Success));
        assert!(temp_dir.path().join("softsell.toml").exists());
        assert!(temp_dir.path().join(".env.example").exists());
        assert!(temp_dir.path().join(".gitignore").exists());
        SoftSellConfig::load(temp_dir.path().join("softsell.toml")).unwrap();
    }

    #[test]
    fn test_run_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("softsell.toml");
        fs::write(&config_path, "# mine").unwrap();

        let result = run(init_config(temp_dir.path(), ProviderKind::Gemini), &Output::no_color());

        assert!(matches!(result, InitResult::AlreadyExists));
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine");
    }

    #[test]
    fn test_run_with_force_overwrites_but_keeps_gitignore() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("softsell.toml"), "# mine").unwrap();
        fs::write(temp_dir.path().join(".gitignore"), "custom\n").unwrap();

        let config = InitConfig {
            force: true,
            ..init_config(temp_dir.path(), ProviderKind::Gemini)
        };
        let result = run(config, &Output::no_color());

        assert!(matches!(result, InitResult::Success));
        let toml = fs::read_to_string(temp_dir.path().join("softsell.toml")).unwrap();
        assert!(toml.contains("[assistant]"));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap(),
            "custom\n"
        );
    }

    #[test]
    fn test_write_file_reports_kept_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env.example");

        assert_eq!(write_file(&path, "A=1\n", false).unwrap(), FileOutcome::Created);
        assert_eq!(
            write_file(&path, "A=2\n", false).unwrap(),
            FileOutcome::Kept("already exists")
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\n");
        assert_eq!(write_file(&path, "A=3\n", true).unwrap(), FileOutcome::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "A=3\n");
    }

    #[test]
    fn test_run_keeps_existing_env_example() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join(".env.example");
        fs::write(&env_path, "GEMINI_API_KEY=mine\n").unwrap();

        let result = run(init_config(temp_dir.path(), ProviderKind::Gemini), &Output::no_color());

        assert!(matches!(result, InitResult::Success));
        assert!(temp_dir.path().join("softsell.toml").exists());
        assert_eq!(fs::read_to_string(&env_path).unwrap(), "GEMINI_API_KEY=mine\n");
    }

    #[test]
    fn test_run_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("site");

        let result = run(init_config(&nested, ProviderKind::OpenAI), &Output::no_color());

        assert!(matches!(result, InitResult::Success));
        assert!(nested.join("softsell.toml").exists());
    }
}
