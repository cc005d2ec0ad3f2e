//! Six-component URL model.
//!
//! A URL is held as a fixed-shape record of six string fields following the
//! generic grammar `scheme://netloc/path;params?query#fragment`. Absent parts
//! are empty strings, never missing fields. `decompose` and `recompose` are
//! the two directions of the grammar; `Component` names the fields in their
//! fixed display order and powers by-name access for editing surfaces.

mod join;
mod scheme;
mod split;

pub use join::recompose;
pub use split::{decompose, DecomposeError};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The six URL components. All fields are always present; an absent part is
/// the empty string. Serializes with the capitalized component names as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UrlComponents {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl UrlComponents {
    /// Reads one component by name.
    pub fn get(&self, component: Component) -> &str {
        match component {
            Component::Scheme => &self.scheme,
            Component::Netloc => &self.netloc,
            Component::Path => &self.path,
            Component::Params => &self.params,
            Component::Query => &self.query,
            Component::Fragment => &self.fragment,
        }
    }

    /// Overwrites one component by name.
    pub fn set(&mut self, component: Component, value: impl Into<String>) {
        let slot = match component {
            Component::Scheme => &mut self.scheme,
            Component::Netloc => &mut self.netloc,
            Component::Path => &mut self.path,
            Component::Params => &mut self.params,
            Component::Query => &mut self.query,
            Component::Fragment => &mut self.fragment,
        };
        *slot = value.into();
    }

    /// The six `(name, value)` pairs in fixed display order.
    pub fn pairs(&self) -> [(Component, &str); 6] {
        Component::ALL.map(|component| (component, self.get(component)))
    }
}

/// Names of the six URL components, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Scheme,
    Netloc,
    Path,
    Params,
    Query,
    Fragment,
}

impl Component {
    /// All components, in display order.
    pub const ALL: [Component; 6] = [
        Component::Scheme,
        Component::Netloc,
        Component::Path,
        Component::Params,
        Component::Query,
        Component::Fragment,
    ];

    /// Display name, matching the serialized key spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Component::Scheme => "Scheme",
            Component::Netloc => "Netloc",
            Component::Path => "Path",
            Component::Params => "Params",
            Component::Query => "Query",
            Component::Fragment => "Fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A component name that is not one of the six.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown URL component {0:?} (expected scheme, netloc, path, params, query or fragment)")]
pub struct UnknownComponent(pub String);

impl FromStr for Component {
    type Err = UnknownComponent;

    /// Case-insensitive lookup by component name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scheme" => Ok(Component::Scheme),
            "netloc" => Ok(Component::Netloc),
            "path" => Ok(Component::Path),
            "params" => Ok(Component::Params),
            "query" => Ok(Component::Query),
            "fragment" => Ok(Component::Fragment),
            _ => Err(UnknownComponent(s.to_string())),
        }
    }
}
