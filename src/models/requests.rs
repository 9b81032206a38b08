//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming query strings and their validation.

use serde::Deserialize;

use crate::error::GatewayError;

/// Default page size for list requests
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size accepted from clients
pub const MAX_LIMIT: u32 = 100;

/// Raw query string for GET /api/pokemon
///
/// Kept as strings so that malformed numbers surface as validation
/// errors instead of extractor rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// Validated pagination for list retrieval. Built only through `new` or
/// `TryFrom<ListParams>`, so the limit is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListQuery {
    limit: u32,
    offset: u32,
}

impl ListQuery {
    /// Builds a query, rejecting values outside the accepted range.
    pub fn new(limit: u32, offset: u32) -> Result<Self, GatewayError> {
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(GatewayError::InvalidInput(format!(
                "The limit field must be between 1 and {}.",
                MAX_LIMIT
            )));
        }
        Ok(Self { limit, offset })
    }

    /// Page size, 1..=100
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Index of the first entry
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl TryFrom<ListParams> for ListQuery {
    type Error = GatewayError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let limit = parse_field("limit", params.limit.as_deref())?.unwrap_or(DEFAULT_LIMIT as i64);
        let offset = parse_field("offset", params.offset.as_deref())?.unwrap_or(0);

        if offset < 0 {
            return Err(GatewayError::InvalidInput(
                "The offset field must be at least 0.".to_string(),
            ));
        }
        let offset = u32::try_from(offset).map_err(|_| {
            GatewayError::InvalidInput("The offset field is too large.".to_string())
        })?;
        let limit = u32::try_from(limit).unwrap_or(0);

        Self::new(limit, offset)
    }
}

fn parse_field(field: &str, raw: Option<&str>) -> Result<Option<i64>, GatewayError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            GatewayError::InvalidInput(format!("The {} field must be an integer.", field))
        }),
    }
}

/// Raw query string for GET /api/pokemon/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: Option<String>,
}

impl SearchParams {
    /// Returns the trimmed name, or None when absent or blank.
    pub fn name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
