//! Navigation Routes
//!
//! The results view is reached through `/results?fileUrl=<artifact url>`.
//! The query parameter is the only channel through which the upload flow
//! hands the artifact reference to the results view.

use std::fmt;
use url::Url;
use url::form_urlencoded;

use crate::constants::results::{FILE_URL_PARAM, ROUTE_PATH};
use crate::types::{Result, ScanError};

// Base used only to parse relative route paths
const ROUTE_BASE: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Upload / text entry view
    Home,
    /// Results view, optionally carrying an artifact reference
    Results { file_url: Option<String> },
}

impl Route {
    pub fn results(file_url: impl Into<String>) -> Self {
        Self::Results {
            file_url: Some(file_url.into()),
        }
    }

    /// Artifact reference carried by this route, if any
    pub fn file_url(&self) -> Option<&str> {
        match self {
            Self::Results { file_url } => file_url.as_deref(),
            Self::Home => None,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Results { file_url: None } => ROUTE_PATH.to_string(),
            Self::Results {
                file_url: Some(url),
            } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(FILE_URL_PARAM, url)
                    .finish();
                format!("{}?{}", ROUTE_PATH, query)
            }
        }
    }

    /// Parse a route path such as `/results?fileUrl=...`
    pub fn parse(path: &str) -> Result<Self> {
        let url = Url::parse(ROUTE_BASE)
            .and_then(|base| base.join(path))
            .map_err(|e| ScanError::Route(format!("{}: {}", path, e)))?;

        match url.path() {
            "/" | "" => Ok(Self::Home),
            p if p == ROUTE_PATH => {
                let file_url = url
                    .query_pairs()
                    .find(|(key, _)| key == FILE_URL_PARAM)
                    .map(|(_, value)| value.into_owned())
                    .filter(|value| !value.is_empty());
                Ok(Self::Results { file_url })
            }
            other => Err(ScanError::Route(format!("unknown route: {}", other))),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
