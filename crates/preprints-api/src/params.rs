//! Query parameter validation for the listing endpoint.
//!
//! Every parameter is checked independently, in a fixed order. When several
//! are invalid, the last one in that order is reported.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Maximum page size accepted.
pub const MAX_PER_PAGE: u32 = 100;

/// Strict `YYYY-MM-DD` shape.
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex should compile"));

/// Raw query string parameters, exactly as received.
#[derive(Debug, Clone, Default)]
pub struct RawListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub order: Option<String>,
    pub use_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Which date the listing is filtered and sorted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UseDate {
    /// The upstream default (latest version publication).
    #[default]
    Default,
    /// First publication of the manuscript.
    Published,
}

/// Validated listing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub per_page: u32,
    pub order: Order,
    pub use_date: UseDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            order: Order::default(),
            use_date: UseDate::default(),
            start_date: None,
            end_date: None,
        }
    }
}

/// A single rejected parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("expecting positive integer for 'page' parameter")]
    Page,
    #[error("expecting positive integer between 1 and 100 for 'per-page' parameter")]
    PerPage,
    #[error("expecting either 'asc' or 'desc' for 'order' parameter")]
    Order,
    #[error("expecting either 'default' or 'published' for 'use-date' parameter")]
    UseDate,
    #[error("expecting YYYY-MM-DD format for 'start-date' parameter")]
    StartDate,
    #[error("expecting YYYY-MM-DD format for 'end-date' parameter")]
    EndDate,
}

impl RawListParams {
    /// Build from decoded query pairs. A repeated key keeps its last value;
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut params.page,
                "per-page" => &mut params.per_page,
                "order" => &mut params.order,
                "use-date" => &mut params.use_date,
                "start-date" => &mut params.start_date,
                "end-date" => &mut params.end_date,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }

    /// Validate every parameter.
    ///
    /// All checks run even after a failure; the last failing one is returned.
    pub fn validate(&self) -> Result<ListParams, ParamError> {
        let page = parse_page(self.page.as_deref());
        let per_page = parse_per_page(self.per_page.as_deref());
        let order = parse_order(self.order.as_deref());
        let use_date = parse_use_date(self.use_date.as_deref());
        let start_date = parse_date(self.start_date.as_deref(), ParamError::StartDate);
        let end_date = parse_date(self.end_date.as_deref(), ParamError::EndDate);

        // Unwrapped last-to-first so the last failing check wins.
        Ok(ListParams {
            end_date: end_date?,
            start_date: start_date?,
            use_date: use_date?,
            order: order?,
            per_page: per_page?,
            page: page?,
        })
    }
}

fn parse_page(raw: Option<&str>) -> Result<u32, ParamError> {
    match raw {
        None => Ok(DEFAULT_PAGE),
        Some(s) => match s.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(ParamError::Page),
        },
    }
}

fn parse_per_page(raw: Option<&str>) -> Result<u32, ParamError> {
    match raw {
        None => Ok(DEFAULT_PER_PAGE),
        Some(s) => match s.parse::<u32>() {
            Ok(n) if (1..=MAX_PER_PAGE).contains(&n) => Ok(n),
            _ => Err(ParamError::PerPage),
        },
    }
}

fn parse_order(raw: Option<&str>) -> Result<Order, ParamError> {
    match raw {
        None => Ok(Order::default()),
        Some("asc") => Ok(Order::Asc),
        Some("desc") => Ok(Order::Desc),
        Some(_) => Err(ParamError::Order),
    }
}

fn parse_use_date(raw: Option<&str>) -> Result<UseDate, ParamError> {
    match raw {
        None => Ok(UseDate::default()),
        Some("default") => Ok(UseDate::Default),
        Some("published") => Ok(UseDate::Published),
        Some(_) => Err(ParamError::UseDate),
    }
}

/// Parse an optional `YYYY-MM-DD` date. An empty value counts as absent.
fn parse_date(raw: Option<&str>, error: ParamError) -> Result<Option<NaiveDate>, ParamError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) if DATE_REGEX.is_match(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| error),
        Some(_) => Err(error),
    }
}
