use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{Coordinate, DEFAULT_COORDINATE};

/// Named Boston-area neighborhoods known without any caller-supplied table
const BUILTIN_LOCATIONS: &[(&str, f64, f64)] = &[
    ("Cambridge", 42.3736, -71.1097),
    ("Boston", 42.3601, -71.0589),
    ("Somerville", 42.3876, -71.0995),
    ("Back Bay", 42.3505, -71.0763),
    ("South End", 42.3414, -71.0742),
    ("Fenway", 42.3467, -71.0972),
    ("Allston", 42.3543, -71.1312),
];

/// Mapping from location name to coordinate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateTable {
    entries: HashMap<String, Coordinate>,
}

impl CoordinateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared instance of the built-in neighborhood table
    pub fn builtin() -> &'static CoordinateTable {
        static BUILTIN: OnceLock<CoordinateTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            BUILTIN_LOCATIONS
                .iter()
                .map(|(name, lat, lon)| (name.to_string(), Coordinate::new(*lat, *lon)))
                .collect()
        })
    }

    pub fn insert(&mut self, name: impl Into<String>, coordinate: Coordinate) -> Option<Coordinate> {
        self.entries.insert(name.into(), coordinate)
    }

    /// Copy every entry of `other` into this table, replacing same-named ones
    pub fn merge(&mut self, other: &CoordinateTable) {
        for (name, coordinate) in &other.entries {
            self.entries.insert(name.clone(), *coordinate);
        }
    }

    /// Exact lookup without fallback
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Coordinate> {
        self.entries.get(name).copied()
    }

    /// Resolve a location name, falling back to Boston downtown for unknown names
    #[inline]
    pub fn resolve(&self, name: &str) -> Coordinate {
        self.lookup(name).unwrap_or(DEFAULT_COORDINATE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Coordinate)> for CoordinateTable {
    fn from_iter<I: IntoIterator<Item = (String, Coordinate)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Free-function form of [`CoordinateTable::resolve`]
pub fn resolve(location_name: &str, table: &CoordinateTable) -> Coordinate {
    table.resolve(location_name)
}
