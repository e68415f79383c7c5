//! Router access for the shell.
//!
//! The shell never talks to the Dioxus router directly; it goes through the
//! [`Navigator`] trait so the redirect rules can be exercised without a
//! renderer. Platform crates implement [`NamedRoute`] on their `Route` enum and
//! hand a [`RouterNavigator`] to the shell.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use dioxus::prelude::*;
use thiserror::Error;
use url::form_urlencoded;

/// Point-in-time view of the active route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteSnapshot {
    /// Route name (e.g. `"digest"`).
    pub name: String,
    /// Path without query string.
    pub path: String,
    /// Path including query string, exactly as the router renders it.
    pub full_path: String,
}

impl RouteSnapshot {
    pub fn new(name: impl Into<String>, full_path: impl Into<String>) -> Self {
        let full_path = full_path.into();
        let path = strip_query(&full_path).to_string();
        Self {
            name: name.into(),
            path,
            full_path,
        }
    }
}

/// Where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Named(String),
    Path {
        path: String,
        query: Vec<(String, String)>,
    },
}

impl NavTarget {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn path(path: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            Self::Path { path, mut query } => {
                query.push((key.into(), value.into()));
                Self::Path { path, query }
            }
            named => named,
        }
    }

    /// Render a path target as an href (`/login?redirect=%2Fprofile`).
    /// Named targets have no href of their own.
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Named(_) => None,
            Self::Path { path, query } if query.is_empty() => Some(path.clone()),
            Self::Path { path, query } => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(query.iter())
                    .finish();
                Some(format!("{path}?{encoded}"))
            }
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "route `{name}`"),
            Self::Path { .. } => f.write_str(self.href().as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no route is named `{0}`")]
    UnknownRoute(String),
    #[error("`{target}` does not resolve to a route: {reason}")]
    Unresolved { target: String, reason: String },
    #[error("router refused external navigation: {0}")]
    External(String),
}

/// Read/navigate access to the active router.
pub trait Navigator {
    fn current(&self) -> RouteSnapshot;
    fn navigate(&self, target: NavTarget) -> Result<(), NavigationError>;
}

/// Name lookup for a platform route enum.
pub trait NamedRoute: Routable {
    fn route_name(&self) -> &'static str;
    fn from_route_name(name: &str) -> Option<Self>;
}

/// [`Navigator`] over the Dioxus router for route enum `R`.
///
/// Must be used from inside the runtime (event handlers, component tasks)
/// below a `Router::<R>`.
pub struct RouterNavigator<R> {
    _route: PhantomData<fn() -> R>,
}

impl<R> RouterNavigator<R> {
    pub fn new() -> Self {
        Self {
            _route: PhantomData,
        }
    }
}

impl<R> Default for RouterNavigator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Navigator for RouterNavigator<R>
where
    R: NamedRoute,
    <R as FromStr>::Err: fmt::Display,
{
    fn current(&self) -> RouteSnapshot {
        let route = router().current::<R>();
        RouteSnapshot::new(route.route_name(), route.to_string())
    }

    fn navigate(&self, target: NavTarget) -> Result<(), NavigationError> {
        let route = match &target {
            NavTarget::Named(name) => {
                R::from_route_name(name).ok_or_else(|| NavigationError::UnknownRoute(name.clone()))?
            }
            NavTarget::Path { .. } => {
                let href = target.href().unwrap_or_default();
                R::from_str(&href).map_err(|err| NavigationError::Unresolved {
                    target: href.clone(),
                    reason: err.to_string(),
                })?
            }
        };

        match navigator().push(route) {
            Some(failure) => Err(NavigationError::External(format!("{failure:?}"))),
            None => Ok(()),
        }
    }
}

pub fn strip_query(full_path: &str) -> &str {
    full_path
        .split_once('?')
        .map(|(path, _)| path)
        .unwrap_or(full_path)
}

/// Keep a `redirect` query value only if it points back into the app.
/// The router has already decoded the value; protocol-relative (`//host`),
/// backslash and absolute URLs fall back to `/`.
pub fn sanitize_redirect(redirect: &str) -> String {
    if redirect.starts_with('/') && !redirect.starts_with("//") && !redirect.contains('\\') {
        redirect.to_string()
    } else {
        "/".to_string()
    }
}
