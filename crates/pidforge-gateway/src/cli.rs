use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "PIDFORGE_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "PIDFORGE_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "PIDFORGE_MYSQL_DSN";
pub const DOI_PREFIX_ENV: &str = "PIDFORGE_DOI_PREFIX";
pub const DOI_NAMESPACE_ENV: &str = "PIDFORGE_DOI_NAMESPACE";
pub const URN_NAMESPACE_ENV: &str = "PIDFORGE_URN_NAMESPACE";
pub const TIMEZONE_ENV: &str = "PIDFORGE_TIMEZONE";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pidforge-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    #[arg(long, env = DOI_PREFIX_ENV, default_value = "10.5072")]
    pub doi_prefix: String,

    #[arg(long, env = DOI_NAMESPACE_ENV, default_value = "dans")]
    pub doi_namespace: String,

    #[arg(long, env = URN_NAMESPACE_ENV, default_value = "13")]
    pub urn_namespace: String,

    /// IANA zone used when rendering mint timestamps in responses.
    #[arg(long, env = TIMEZONE_ENV, default_value = "UTC")]
    pub timezone: String,
}
