use crate::cli::main_types::{Commands, ConfigCommands};
use crate::core::services::ConfigService;
use crate::error::{AppError, CliError};
use crate::mcp::output::result_text;
use crate::mcp::{LyMcpServer, call_tool_once, serve_stdio};
use crate::storage::config::Config;
use crate::utils::validation::validate_url;
use serde_json::Value;
use std::path::PathBuf;

/// Settings given on the command line or through the environment.
/// They apply to the running process and are never written back.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    overrides: Overrides,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, overrides: Overrides) -> Self {
        Self {
            config,
            config_path,
            overrides,
        }
    }

    pub async fn dispatch(&self, command: Option<Commands>) -> Result<(), AppError> {
        match command.unwrap_or(Commands::Serve { no_cache: false }) {
            Commands::Serve { no_cache } => self.handle_serve(no_cache).await,
            Commands::Tools => self.handle_tools(),
            Commands::Call { tool, args } => self.handle_call(&tool, &args).await,
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    /// Stored configuration with the command-line overrides applied
    pub fn effective_config(&self) -> Result<Config, AppError> {
        let mut config = self.config.clone();
        if let Some(base_url) = &self.overrides.base_url {
            validate_url(base_url)?;
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = self.overrides.timeout_secs {
            if timeout == 0 {
                return Err(AppError::Cli(CliError::InvalidArguments(
                    "--timeout must be a positive number of seconds".to_string(),
                )));
            }
            config.api.timeout_seconds = timeout;
        }
        Ok(config)
    }

    async fn handle_serve(&self, no_cache: bool) -> Result<(), AppError> {
        let mut config = self.effective_config()?;
        if no_cache {
            config.cache.enabled = false;
        }
        tracing::info!(
            base_url = %config.api.base_url,
            cache = config.cache.enabled,
            "starting server"
        );
        let server = LyMcpServer::from_config(&config)?;
        serve_stdio(server).await
    }

    fn handle_tools(&self) -> Result<(), AppError> {
        let server = LyMcpServer::from_config(&self.effective_config()?)?;
        for tool in server.tools() {
            let description = tool.description.as_deref().unwrap_or_default();
            println!("{:<32} {}", tool.name, description);
        }
        Ok(())
    }

    async fn handle_call(&self, tool: &str, args: &str) -> Result<(), AppError> {
        let arguments = parse_tool_args(args)?;
        let server = LyMcpServer::from_config(&self.effective_config()?)?;
        if !server.has_tool(tool) {
            return Err(AppError::Cli(CliError::UnknownTool {
                name: tool.to_string(),
            }));
        }

        tracing::debug!(tool, "calling tool in-process");
        let result = call_tool_once(server, tool, Some(arguments)).await?;
        println!("{}", result_text(&result));

        if result.is_error == Some(true) {
            return Err(AppError::Cli(CliError::ToolFailed {
                name: tool.to_string(),
            }));
        }
        Ok(())
    }

    fn handle_config_command(&self, commands: ConfigCommands) -> Result<(), AppError> {
        match commands {
            ConfigCommands::Show => {
                tracing::debug!("config show");
                let service = ConfigService::new(self.config.clone());

                println!("Current Configuration:");
                println!("=====================");
                for (key, value) in service.entries() {
                    println!("{} = {}", key, value);
                }
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                tracing::debug!(key = %key, value = %value, "config set");
                let mut service = ConfigService::new(self.config.clone());
                service.set_field(&key, &value)?;
                service.save_config(self.config_path.clone())?;
                println!("✅ {} = {}", key, value);
                Ok(())
            }
            ConfigCommands::Path => {
                let path = match &self.config_path {
                    Some(path) => path.clone(),
                    None => Config::config_file_path()?,
                };
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

/// Tool arguments must be a JSON object
pub fn parse_tool_args(args: &str) -> Result<serde_json::Map<String, Value>, AppError> {
    let value: Value = serde_json::from_str(args).map_err(|e| {
        AppError::Cli(CliError::InvalidArguments(format!(
            "--args is not valid JSON: {}",
            e
        )))
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::Cli(CliError::InvalidArguments(format!(
            "--args must be a JSON object, got {}",
            other
        )))),
    }
}
