use clap::{ArgAction, Parser, builder::BoolishValueParser};
use notes_mcp::server::{DEFAULT_MCP_HTTP_ADDR, McpHttpServerConfig};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "notes-mcpd", version, about = "Notes MCP daemon.")]
#[allow(clippy::struct_excessive_bools)]
struct CliArgs {
    #[arg(
        long = "stdio",
        env = "NOTES_ENABLE_STDIO",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long = "http",
        env = "NOTES_MCP_HTTP_SERVE",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    http_serve: bool,

    #[arg(long, env = "NOTES_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "NOTES_MCP_HTTP_STATEFUL",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    http_stateful: bool,

    #[arg(
        long,
        env = "NOTES_SEED",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    seed_notes: bool,

    #[arg(
        long,
        env = "NOTES_LOG_JSON",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    log_json: bool,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotesConfig {
    pub enable_stdio: bool,
    pub http_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub http_stateful: bool,
    pub seed_notes: bool,
    pub log_json: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    NoTransport,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransport => write!(
                f,
                "no transport enabled: set NOTES_ENABLE_STDIO or NOTES_MCP_HTTP_SERVE"
            ),
        }
    }
}

impl Error for ConfigError {}

impl NotesConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    pub const fn http_config(&self) -> McpHttpServerConfig {
        McpHttpServerConfig::new(self.mcp_http_addr).with_stateful_mode(self.http_stateful)
    }
}

impl TryFrom<CliArgs> for NotesConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.enable_stdio && !args.http_serve {
            return Err(ConfigError::NoTransport);
        }

        Ok(Self {
            enable_stdio: args.enable_stdio,
            http_serve: args.http_serve,
            mcp_http_addr: args.mcp_http_addr,
            http_stateful: args.http_stateful,
            seed_notes: args.seed_notes,
            log_json: args.log_json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            enable_stdio: true,
            http_serve: false,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            http_stateful: true,
            seed_notes: true,
            log_json: false,
        }
    }

    #[test]
    fn defaults_to_stdio_only() {
        let args = CliArgs::try_parse_from(["notes-mcpd"]).expect("defaults should parse");

        let config = NotesConfig::try_from(args).expect("config should parse");

        assert!(config.enable_stdio);
        assert!(!config.http_serve);
        assert!(config.seed_notes);
        assert_eq!(config.mcp_http_addr.to_string(), DEFAULT_MCP_HTTP_ADDR);
    }

    #[test]
    fn rejects_config_without_transport() {
        let mut args = base_args();
        args.enable_stdio = false;

        let err = NotesConfig::try_from(args).expect_err("no transport should fail");

        assert!(matches!(err, ConfigError::NoTransport));
    }

    #[test]
    fn http_only_is_allowed() {
        let mut args = base_args();
        args.enable_stdio = false;
        args.http_serve = true;
        args.http_stateful = false;

        let config = NotesConfig::try_from(args).expect("http only should parse");

        assert!(!config.http_config().stateful_mode);
    }
}
