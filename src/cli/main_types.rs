use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ly-mcp")]
#[command(about = "MCP server for the Taiwan Legislative Yuan open-data API")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Override the upstream API base URL
    #[arg(long, global = true, env = "LY_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, global = true, env = "LY_API_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server over stdio
    Serve {
        /// Disable the response cache for this session
        #[arg(long)]
        no_cache: bool,
    },
    /// List the available tools
    Tools,
    /// Call one tool and print its result
    Call {
        /// Tool name, e.g. get_bill
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key, e.g. api.timeout_seconds
        key: String,
        /// Configuration value
        value: String,
    },
    /// Print the configuration file path
    Path,
}
