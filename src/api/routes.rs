//! Route table module
//!
//! Declarative (method, pattern) rules matched in order; the first match
//! wins. The `{id}` capture takes the path segment after the literal
//! prefix, so extra trailing segments are ignored and an empty segment is
//! passed through as-is.

use hyper::Method;

/// A matched route, carrying the captured id where the pattern has one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Health,
    List,
    Create,
    Update(String),
    Delete(String),
}

/// Path pattern for a routing rule
enum Pattern {
    /// Matches the path exactly
    Exact(&'static str),
    /// Matches paths with the given prefix, capturing the next segment
    IdAfter(&'static str),
}

impl Pattern {
    /// `Some(capture)` on a match, `None` otherwise
    fn matches<'a>(&self, path: &'a str) -> Option<Option<&'a str>> {
        match self {
            Self::Exact(exact) => (path == *exact).then_some(None),
            Self::IdAfter(prefix) => {
                let rest = path.strip_prefix(prefix)?;
                let id = rest.split('/').next().unwrap_or("");
                Some(Some(id))
            }
        }
    }
}

/// Operation named by a routing rule
enum Op {
    Health,
    List,
    Create,
    Update,
    Delete,
}

impl Op {
    fn to_route(&self, capture: Option<&str>) -> Route {
        match self {
            Self::Health => Route::Health,
            Self::List => Route::List,
            Self::Create => Route::Create,
            Self::Update => Route::Update(capture.unwrap_or_default().to_string()),
            Self::Delete => Route::Delete(capture.unwrap_or_default().to_string()),
        }
    }
}

static RULES: [(Method, Pattern, Op); 6] = [
    (Method::GET, Pattern::Exact("/"), Op::Health),
    (Method::GET, Pattern::Exact("/api"), Op::Health),
    (Method::GET, Pattern::Exact("/api/lembretes"), Op::List),
    (Method::POST, Pattern::Exact("/api/lembretes"), Op::Create),
    (Method::PUT, Pattern::IdAfter("/api/lembretes/"), Op::Update),
    (
        Method::DELETE,
        Pattern::IdAfter("/api/lembretes/"),
        Op::Delete,
    ),
];

/// Find the first rule matching the request method and path
pub fn match_route(method: &Method, path: &str) -> Option<Route> {
    RULES.iter().find_map(|(m, pattern, op)| {
        if method == m {
            pattern.matches(path).map(|capture| op.to_route(capture))
        } else {
            None
        }
    })
}
