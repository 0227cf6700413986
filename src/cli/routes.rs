use std::{fmt, str::FromStr};

use strsim::levenshtein;

use crate::domain::RecordId;

/// Navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Expenses,
    ExpenseDetail(RecordId),
}

/// Static paths offered for completion and suggestions.
pub const KNOWN_PATHS: [&str; 4] = ["/", "/about", "/contact", "/expenses"];

const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown page `{path}`")]
    Unknown {
        path: String,
        suggestion: Option<&'static str>,
    },
    #[error("Invalid record id `{0}`")]
    InvalidId(String),
}

impl RouteError {
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            RouteError::Unknown { suggestion, .. } => *suggestion,
            RouteError::InvalidId(_) => None,
        }
    }
}

impl Route {
    /// Top-level pages in navigation order.
    pub fn navigation() -> [Route; 4] {
        [Route::Home, Route::About, Route::Contact, Route::Expenses]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::Expenses => "Household ledger",
            Route::ExpenseDetail(_) => "Record detail",
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().trim_end_matches('/');
        let path = trimmed.trim_start_matches('/');
        let mut segments = path.split('/');
        let head = segments.next().unwrap_or_default().to_ascii_lowercase();
        let tail = segments.next();

        let route = match (head.as_str(), tail, segments.next()) {
            ("" | "home", None, None) => Route::Home,
            ("about", None, None) => Route::About,
            ("contact", None, None) => Route::Contact,
            ("expenses", None, None) => Route::Expenses,
            ("expenses", Some(id), None) => Route::ExpenseDetail(
                id.parse()
                    .map_err(|_| RouteError::InvalidId(id.to_string()))?,
            ),
            _ => {
                return Err(RouteError::Unknown {
                    path: input.trim().to_string(),
                    suggestion: suggest(trimmed),
                })
            }
        };
        Ok(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::About => f.write_str("/about"),
            Route::Contact => f.write_str("/contact"),
            Route::Expenses => f.write_str("/expenses"),
            Route::ExpenseDetail(id) => write!(f, "/expenses/{}", id),
        }
    }
}

fn suggest(input: &str) -> Option<&'static str> {
    let needle = format!("/{}", input.trim_start_matches('/').to_ascii_lowercase());
    KNOWN_PATHS
        .iter()
        .map(|path| (levenshtein(path, &needle), *path))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(_, path)| path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths_with_or_without_slash() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("home".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("about".parse::<Route>().unwrap(), Route::About);
        assert_eq!("/contact/".parse::<Route>().unwrap(), Route::Contact);
        assert_eq!("/Expenses".parse::<Route>().unwrap(), Route::Expenses);
        assert_eq!(
            "/expenses/4".parse::<Route>().unwrap(),
            Route::ExpenseDetail(RecordId(4))
        );
    }

    #[test]
    fn display_round_trips() {
        for route in [
            Route::Home,
            Route::About,
            Route::Contact,
            Route::Expenses,
            Route::ExpenseDetail(RecordId(12)),
        ] {
            assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn bad_id_is_reported() {
        assert_eq!(
            "/expenses/abc".parse::<Route>().unwrap_err(),
            RouteError::InvalidId("abc".into())
        );
    }

    #[test]
    fn typo_gets_a_suggestion() {
        let err = "/expnses".parse::<Route>().unwrap_err();
        assert_eq!(err.suggestion(), Some("/expenses"));
        let err = "/completely-unrelated".parse::<Route>().unwrap_err();
        assert_eq!(err.suggestion(), None);
    }
}
