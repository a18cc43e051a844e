//! Service configuration.
//!
//! Read from the environment after loading a `.env` file if one exists.
//! CLI flags override what is read here.
//!
//! | Variable         | Default                 | Meaning                          |
//! |------------------|-------------------------|----------------------------------|
//! | `ARS_PORT`       | `3000`                  | Port the intake service binds    |
//! | `ARS_RESUME_DIR` | unset                   | Where accepted résumés are saved |
//! | `ARS_COMPANY_ID` | `default`               | Company recorded on applications |
//! | `ARS_INTAKE_URL` | `http://localhost:3000` | Service the CLI submits to       |

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_INTAKE_URL: &str = "http://localhost:3000";

pub const DEFAULT_COMPANY_ID: &str = "default";

/// Intake service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    pub port: u16,
    /// Résumés are kept only when this is set.
    pub resume_dir: Option<PathBuf>,
    pub company_id: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            resume_dir: None,
            company_id: DEFAULT_COMPANY_ID.to_string(),
        }
    }
}

impl IntakeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let port = match env::var("ARS_PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let resume_dir = env::var("ARS_RESUME_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let company_id = env::var("ARS_COMPANY_ID").unwrap_or_else(|_| DEFAULT_COMPANY_ID.to_string());

        Ok(Self {
            port,
            resume_dir,
            company_id,
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_resume_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resume_dir = Some(dir.into());
        self
    }
}

/// Intake service base URL for the CLI.
pub fn intake_url_from_env() -> String {
    let _ = dotenvy::dotenv();
    env::var("ARS_INTAKE_URL").unwrap_or_else(|_| DEFAULT_INTAKE_URL.to_string())
}
