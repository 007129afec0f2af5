//! Hierarchical names.
//!
//! Every address in the NameSync protocol is a hierarchical name: an ordered
//! list of UTF-8 components, written in URI form as `/a/b/c`.

use super::error::NameError;

/// A single component of a hierarchical name.
///
/// Components are non-empty UTF-8 strings that never contain `/`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameComponent(String);

impl NameComponent {
    /// Create a component, rejecting empty strings and embedded separators.
    pub fn new(value: impl Into<String>) -> Result<Self, NameError> {
        let value = value.into();
        if value.is_empty() {
            return Err(NameError::EmptyComponent);
        }
        if value.contains('/') {
            return Err(NameError::InvalidComponent(value));
        }
        Ok(Self(value))
    }

    /// Get the component as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the component as a decimal integer, if it is one.
    ///
    /// Session and sequence components of fetch addresses are encoded this way.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for NameComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A hierarchical name: an ordered sequence of [`NameComponent`]s.
///
/// Names identify participants, announced content, and fetch addresses.
/// The empty name (`/`) is valid as a value but rejected where the protocol
/// requires a non-empty name (e.g. `announce`).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name {
    components: Vec<NameComponent>,
}

impl Name {
    /// Create an empty name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a name from URI form, e.g. `/alice/doc/1`.
    ///
    /// A leading `/` is optional; consecutive separators are rejected because
    /// they would produce empty components.
    pub fn parse(uri: &str) -> Result<Self, NameError> {
        let trimmed = uri.strip_prefix('/').unwrap_or(uri);
        if trimmed.is_empty() {
            return Ok(Self::new());
        }
        let components = trimmed
            .split('/')
            .map(NameComponent::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check whether this is the empty name.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the components.
    pub fn components(&self) -> &[NameComponent] {
        &self.components
    }

    /// Get a component by index.
    pub fn get(&self, index: usize) -> Option<&NameComponent> {
        self.components.get(index)
    }

    /// Get the last component.
    pub fn last(&self) -> Option<&NameComponent> {
        self.components.last()
    }

    /// Append a component in place.
    pub fn push(&mut self, component: NameComponent) {
        self.components.push(component);
    }

    /// Return a new name with the component appended.
    pub fn appended(&self, component: NameComponent) -> Self {
        let mut name = self.clone();
        name.push(component);
        name
    }

    /// Return a new name with a decimal integer component appended.
    pub fn appended_u64(&self, value: u64) -> Self {
        // A decimal rendering can never be empty or contain '/'.
        self.appended(NameComponent(value.to_string()))
    }

    /// Return a new name with all of `other`'s components appended.
    pub fn join(&self, other: &Name) -> Self {
        let mut name = self.clone();
        name.components.extend(other.components.iter().cloned());
        name
    }

    /// Check whether `prefix` is a prefix of this name.
    pub fn starts_with(&self, prefix: &Name) -> bool {
        self.components.len() >= prefix.components.len()
            && self.components[..prefix.components.len()] == prefix.components[..]
    }

    /// The components of this name after `prefix`, or `None` if `prefix`
    /// is not a prefix of this name.
    pub fn suffix_after(&self, prefix: &Name) -> Option<&[NameComponent]> {
        if self.starts_with(prefix) {
            Some(&self.components[prefix.components.len()..])
        } else {
            None
        }
    }

    /// Render the name in URI form.
    pub fn to_uri(&self) -> String {
        if self.components.is_empty() {
            return "/".to_string();
        }
        let mut uri = String::new();
        for component in &self.components {
            uri.push('/');
            uri.push_str(component.as_str());
        }
        uri
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl std::str::FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
