//! Host-list-aware parsing for clustered multi-host connection strings.
//!
//! Generic URL grammar cannot represent the comma-separated `host:port`
//! list a clustered document store accepts in its authority section, so
//! the cluster branch of [`parse`](crate::parse) re-parses the original
//! input with this module. Only the database name, host list, and
//! credentials are exposed; any parser producing the same shape is
//! substitutable for this one.

use crate::error::{ParseError, Result};

/// One `host[:port]` entry from a clustered connection string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterHost {
    /// Network host
    pub host: String,
    /// Port, when the entry carries one
    pub port: Option<u16>,
}

impl ClusterHost {
    /// Render the entry back to `host` or `host:port` form
    #[must_use]
    pub fn to_host_string(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }
}

/// A parsed clustered multi-host connection string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterUrl {
    /// Logical database name; empty when the URL names none
    pub database: String,
    /// Hosts in the order they appear in the authority
    pub hosts: Vec<ClusterHost>,
    /// Username, when present and non-empty
    pub username: Option<String>,
    /// Password, when present and non-empty
    pub password: Option<String>,
}

impl ClusterUrl {
    const SCHEME_PREFIX: &'static str = "mongodb://";

    /// Parse a clustered connection string of the form
    /// `mongodb://[user[:password]@]host[:port][,host[:port]]*[/database][?options]`.
    ///
    /// Connection options after `?` belong to the cluster grammar, not to
    /// the configuration mapping, and are ignored here.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidClusterUrl`] when the scheme is
    /// missing, the host list is empty, a host entry is blank, or a port
    /// is not a valid number.
    pub fn parse(input: &str) -> Result<Self> {
        let rest = input
            .strip_prefix(Self::SCHEME_PREFIX)
            .ok_or_else(|| invalid("missing mongodb:// scheme"))?;
        let rest = rest.split_once('?').map_or(rest, |(before, _)| before);

        let (credentials, host_section) = match rest.rsplit_once('@') {
            Some((userinfo, hosts)) => (Some(userinfo), hosts),
            None => (None, rest),
        };

        let (host_list, database) = match host_section.split_once('/') {
            Some((hosts, database)) => (hosts, database),
            None => (host_section, ""),
        };
        if host_list.is_empty() {
            return Err(invalid("no hosts"));
        }

        let hosts = host_list
            .split(',')
            .map(parse_host)
            .collect::<Result<Vec<_>>>()?;

        let (username, password) = match credentials {
            Some(userinfo) => match userinfo.split_once(':') {
                Some((user, pass)) => (non_empty(user), non_empty(pass)),
                None => (non_empty(userinfo), None),
            },
            None => (None, None),
        };

        Ok(Self {
            database: database.to_string(),
            hosts,
            username,
            password,
        })
    }
}

fn parse_host(entry: &str) -> Result<ClusterHost> {
    let (host, port) = match entry.rsplit_once(':') {
        Some((host, port)) => {
            let port = port
                .parse::<u16>()
                .map_err(|_| invalid(format!("invalid port in host entry {entry:?}")))?;
            (host, Some(port))
        }
        None => (entry, None),
    };
    if host.is_empty() {
        return Err(invalid("empty host entry"));
    }
    Ok(ClusterHost {
        host: host.to_string(),
        port,
    })
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn invalid(reason: impl Into<String>) -> ParseError {
    ParseError::InvalidClusterUrl {
        reason: reason.into(),
    }
}
