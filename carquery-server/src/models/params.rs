//! Listing parameters - raw query string and its validated form
//!
//! Parsing is lenient where a sane default exists (limit, page) and
//! strict where input would otherwise reach SQL text (fields, sort).

use std::collections::HashMap;

use super::{CarColumn, ValidationError};

/// Maximum rows per page
pub const MAX_LIMIT: u64 = 100;

/// Rows per page when `limit` is missing or unparsable
pub const DEFAULT_LIMIT: u64 = 10;

/// Token in `fields` that expands to every column
const ALL_FIELDS_TOKEN: &str = "*";

/// Query string accepted by the listing endpoints.
///
/// Everything is kept as text so that malformed numbers fall back to
/// defaults instead of rejecting the request. Built with
/// [`ListParams::from_pairs`] by both the HTTP extractor and the CLI.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub fields: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
    pub sort: Option<String>,
    /// Remaining parameters; the ones named after filterable columns
    /// become equality filters.
    pub filters: HashMap<String, String>,
}

impl ListParams {
    /// Build from `key=value` pairs; the first occurrence of a key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let key = key.into();
            let slot = match key.as_str() {
                "fields" => &mut params.fields,
                "limit" => &mut params.limit,
                "page" => &mut params.page,
                "sort" => &mut params.sort,
                _ => {
                    params.filters.entry(key).or_insert_with(|| value.into());
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// ORDER BY clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: CarColumn,
    pub direction: Direction,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            column: CarColumn::Id,
            direction: Direction::Asc,
        }
    }
}

/// Equality filter on a single column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: CarColumn,
    pub value: String,
}

/// LIMIT / OFFSET pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn new(raw_limit: Option<&str>, raw_page: Option<&str>) -> Self {
        let limit = validate_limit(raw_limit);
        Self {
            limit,
            offset: validate_offset(raw_page, limit),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Validated listing request, ready to be turned into SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarQuery {
    /// Selected columns, never empty
    pub columns: Vec<CarColumn>,
    pub filters: Vec<Filter>,
    pub sort: SortOrder,
    pub page: Pagination,
}

impl Default for CarQuery {
    fn default() -> Self {
        Self {
            columns: CarColumn::ALL.to_vec(),
            filters: Vec::new(),
            sort: SortOrder::default(),
            page: Pagination::default(),
        }
    }
}

impl CarQuery {
    /// Validate raw parameters.
    pub fn from_params(params: &ListParams) -> Result<Self, ValidationError> {
        Ok(Self {
            columns: validate_fields(params.fields.as_deref())?,
            filters: filters(&params.filters),
            sort: validate_sort(params.sort.as_deref())?,
            page: Pagination::new(params.limit.as_deref(), params.page.as_deref()),
        })
    }

    /// Validate raw parameters for the typed listing.
    ///
    /// `fields` is not consulted: typed records always carry every column.
    pub fn typed_from_params(params: &ListParams) -> Result<Self, ValidationError> {
        Ok(Self {
            columns: CarColumn::ALL.to_vec(),
            filters: filters(&params.filters),
            sort: validate_sort(params.sort.as_deref())?,
            page: Pagination::new(params.limit.as_deref(), params.page.as_deref()),
        })
    }

    /// Same query with every column selected, for the typed listing.
    pub fn with_all_columns(mut self) -> Self {
        self.columns = CarColumn::ALL.to_vec();
        self
    }
}

/// Resolve the `fields` parameter against the column allow-list.
///
/// - Missing or empty selects every column
/// - `*` expands to every column
/// - Unknown names are dropped
/// - Fails if nothing valid remains
pub fn validate_fields(raw: Option<&str>) -> Result<Vec<CarColumn>, ValidationError> {
    let raw = match raw {
        None | Some("") => return Ok(CarColumn::ALL.to_vec()),
        Some(raw) => raw,
    };

    let mut columns: Vec<CarColumn> = Vec::new();
    let mut push = |col: CarColumn| {
        if !columns.contains(&col) {
            columns.push(col);
        }
    };

    for token in raw.split(',') {
        if token == ALL_FIELDS_TOKEN {
            CarColumn::ALL.into_iter().for_each(&mut push);
        } else if let Some(col) = CarColumn::parse(token) {
            push(col);
        }
    }

    if columns.is_empty() {
        return Err(ValidationError::NoFields {
            requested: raw.to_owned(),
        });
    }

    Ok(columns)
}

/// Parse `limit`: default 10, clamped to 1..=100.
pub fn validate_limit(raw: Option<&str>) -> u64 {
    match raw.and_then(|s| s.parse::<u64>().ok()) {
        Some(limit) => limit.clamp(1, MAX_LIMIT),
        None => DEFAULT_LIMIT,
    }
}

/// Turn a 1-indexed `page` into a row offset.
///
/// Missing or unparsable pages start at row 0; page 0 is treated as page 1.
pub fn validate_offset(raw_page: Option<&str>, limit: u64) -> u64 {
    match raw_page.and_then(|s| s.parse::<u64>().ok()) {
        Some(page) => page.saturating_sub(1).saturating_mul(limit),
        None => 0,
    }
}

/// Parse `sort`: a column name, optionally prefixed by `-` for descending.
pub fn validate_sort(raw: Option<&str>) -> Result<SortOrder, ValidationError> {
    let raw = match raw {
        None | Some("") => return Ok(SortOrder::default()),
        Some(raw) => raw,
    };

    let (name, direction) = match raw.strip_prefix('-') {
        Some(name) => (name, Direction::Desc),
        None => (raw, Direction::Asc),
    };

    let column = CarColumn::parse(name).ok_or_else(|| ValidationError::UnknownColumn {
        field: "sort",
        value: raw.to_owned(),
    })?;

    Ok(SortOrder { column, direction })
}

/// Collect equality filters in column order, skipping empty values.
pub fn filters(params: &HashMap<String, String>) -> Vec<Filter> {
    CarColumn::FILTERABLE
        .into_iter()
        .filter_map(|column| {
            params
                .get(column.as_str())
                .filter(|value| !value.is_empty())
                .map(|value| Filter {
                    column,
                    value: value.clone(),
                })
        })
        .collect()
}
