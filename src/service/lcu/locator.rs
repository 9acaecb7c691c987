use std::fmt;

use sysinfo::System;

const CLIENT_PROCESS: &str = "LeagueClientUx";
const PORT_PATTERN: &str = "--app-port=";
const TOKEN_PATTERN: &str = "--remoting-auth-token=";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub port: u16,
    pub token: String,
}

/// Where the local client's loopback port and auth token come from. The
/// production locator scans process command lines; tests substitute a fake.
pub trait SessionLocator {
    fn locate(&self) -> Result<ClientCredentials, LocateError>;
}

/// Finds the running client process and pulls port and token out of its
/// command-line arguments. The scan runs on every call; the client hands out
/// fresh credentials whenever it restarts.
pub struct ProcessScanLocator;

impl SessionLocator for ProcessScanLocator {
    fn locate(&self) -> Result<ClientCredentials, LocateError> {
        let system = System::new_all();
        for process in system.processes().values() {
            if !process.name().contains(CLIENT_PROCESS) {
                continue;
            }
            if let Some(credentials) = extract_credentials(process.cmd()) {
                return Ok(credentials);
            }
        }
        Err(LocateError::ClientNotFound)
    }
}

fn extract_credentials(args: &[String]) -> Option<ClientCredentials> {
    let mut port = None;
    let mut token = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix(PORT_PATTERN) {
            port = value.parse::<u16>().ok();
        } else if let Some(value) = arg.strip_prefix(TOKEN_PATTERN) {
            token = Some(value.to_string());
        }
    }

    Some(ClientCredentials {
        port: port?,
        token: token?,
    })
}

#[derive(Debug)]
pub enum LocateError {
    ClientNotFound,
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LocateError::ClientNotFound => write!(f, "Unable to get League client port/token"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn extracts_port_and_token_from_arguments() {
        let credentials = extract_credentials(&args(&[
            "LeagueClientUx.exe",
            "--riotclient-auth-token=other",
            "--app-port=51234",
            "--remoting-auth-token=abc-DEF_123",
        ]))
        .unwrap();

        assert_eq!(
            credentials,
            ClientCredentials {
                port: 51234,
                token: "abc-DEF_123".to_string(),
            }
        );
    }

    #[test]
    fn missing_token_means_no_credentials() {
        assert_eq!(extract_credentials(&args(&["--app-port=51234"])), None);
    }

    #[test]
    fn missing_port_means_no_credentials() {
        assert_eq!(extract_credentials(&args(&["--remoting-auth-token=abc"])), None);
    }

    #[test]
    fn unparsable_port_means_no_credentials() {
        let result = extract_credentials(&args(&["--app-port=notaport", "--remoting-auth-token=abc"]));
        assert_eq!(result, None);
    }
}
