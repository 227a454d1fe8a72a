//! Space registry: named activation flags.
//!
//! The same structure backs both scopes. The global registry is shared by
//! every node and activated exclusively; each element record owns another one
//! that is activated additively.

use std::collections::BTreeMap;

/// A named partition of handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Space {
    active: bool,
}

impl Space {
    /// Whether handlers in this space are currently switched on.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Mapping from space name to its state. At most one space per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceRegistry {
    spaces: BTreeMap<String, Space>,
}

impl SpaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates each missing space inactive.
    ///
    /// With `overwrite`, existing spaces are recreated as well, which resets
    /// them to inactive. Without it, existing spaces keep their state.
    pub fn declare<'a>(&mut self, names: impl IntoIterator<Item = &'a str>, overwrite: bool) {
        for name in names {
            if overwrite {
                self.spaces.insert(name.to_owned(), Space::default());
            } else {
                self.spaces.entry(name.to_owned()).or_default();
            }
        }
    }

    /// Deletes the named spaces. Absent names are ignored.
    pub fn remove<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.spaces.remove(name);
        }
    }

    /// Makes exactly the named, already declared spaces active.
    ///
    /// Every other space is deactivated. Undeclared names are not created.
    pub fn activate_exclusive(&mut self, names: &[String]) {
        for (name, space) in &mut self.spaces {
            if names.contains(name) {
                space.activate();
            } else {
                space.deactivate();
            }
        }
    }

    /// Activates the named spaces, creating missing ones. Others are untouched.
    pub fn activate_additive<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.spaces.entry(name.to_owned()).or_default().activate();
        }
    }

    /// Deactivates the named spaces if present.
    pub fn deactivate<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            if let Some(space) = self.spaces.get_mut(name) {
                space.deactivate();
            }
        }
    }

    /// Deactivates every space.
    pub fn deactivate_all(&mut self) {
        self.spaces.values_mut().for_each(Space::deactivate);
    }

    /// Whether `name` is declared and active. Unknown names are inactive.
    pub fn is_active(&self, name: &str) -> bool {
        self.spaces.get(name).is_some_and(Space::is_active)
    }

    /// Whether `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.spaces.contains_key(name)
    }

    /// Declared space names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.spaces.keys().map(String::as_str)
    }

    /// Names of the active spaces in sorted order.
    pub fn active_names(&self) -> impl Iterator<Item = &str> {
        self.spaces
            .iter()
            .filter(|(_, space)| space.is_active())
            .map(|(name, _)| name.as_str())
    }

    /// Number of declared spaces.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether no spaces are declared.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}
