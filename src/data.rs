// src/data.rs
//
// Canonical table data and the two views derived from it.
//
// - RawTable: the grid of cell strings as found in the markup. Transient.
// - PlanetSet / PropertyRow: property-major view, built once by `specs::planets`.
// - PlanetRecords: planet-major view, the transposition of the above.
// - PlanetTable: the immutable bundle handed to the GUI / CLI.
// - Planet: one record with its labels, for display.
//
// Nothing here mutates after construction; all constructors that could break
// the shape invariants are crate-private.

use std::{cmp::Ordering, collections::HashMap, fmt, hash::{Hash, Hasher}};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self { Self { rows } }

    pub fn row(&self, i: usize) -> Option<&[String]> {
        self.rows.get(i).map(|r| r.as_slice())
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Planet names in header order. This order is canonical everywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanetSet {
    names: Vec<String>,
}

impl PlanetSet {
    pub(crate) fn new(names: Vec<String>) -> Self { Self { names } }

    pub fn names(&self) -> &[String] { &self.names }
    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// One physical property: label plus one value per planet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyRow {
    label: String,
    values: Vec<String>,
}

impl PropertyRow {
    pub(crate) fn new(label: String, values: Vec<String>) -> Self { Self { label, values } }

    pub fn label(&self) -> &str { &self.label }
    pub fn values(&self) -> &[String] { &self.values }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanetRecord {
    name: String,
    values: Vec<String>,
}

impl PlanetRecord {
    pub fn name(&self) -> &str { &self.name }
    pub fn values(&self) -> &[String] { &self.values }
}

/// Planet-major view: name → values, one per property, in canonical planet order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanetRecords {
    records: Vec<PlanetRecord>,
    index: HashMap<String, usize>,
}

impl PlanetRecords {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self { records: Vec::with_capacity(n), index: HashMap::with_capacity(n) }
    }

    pub(crate) fn push(&mut self, name: String, values: Vec<String>) {
        self.index.insert(name.clone(), self.records.len());
        self.records.push(PlanetRecord { name, values });
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index.get(name).map(|&i| self.records[i].values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanetRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

/// The parsed fact sheet: both views over the same cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanetTable {
    planets: PlanetSet,
    properties: Vec<PropertyRow>,
    records: PlanetRecords,
}

impl PlanetTable {
    pub(crate) fn new(planets: PlanetSet, properties: Vec<PropertyRow>, records: PlanetRecords) -> Self {
        Self { planets, properties, records }
    }

    pub fn planet_names(&self) -> &[String] { self.planets.names() }

    /// Property labels, parallel to every record's values.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(PropertyRow::label)
    }

    pub fn property_rows(&self) -> &[PropertyRow] { &self.properties }

    pub fn records(&self) -> &PlanetRecords { &self.records }

    pub fn record(&self, planet: &str) -> Option<&[String]> {
        self.records.get(planet)
    }

    pub fn planet_count(&self) -> usize { self.planets.len() }
    pub fn property_count(&self) -> usize { self.properties.len() }

    pub fn planet(&self, name: &str) -> Option<Planet> {
        let values = self.records.get(name)?;
        Some(Planet::from_parts(name, self.labels(), values))
    }

    /// Case-insensitive lookup; the source page shouts its planet names.
    pub fn find_planet(&self, name: &str) -> Option<Planet> {
        let wanted = name.trim();
        let canonical = self.planets.iter().find(|n| n.eq_ignore_ascii_case(wanted))?;
        self.planet(canonical)
    }

    pub fn planets(&self) -> Vec<Planet> {
        self.records
            .iter()
            .map(|r| Planet::from_parts(&r.name, self.labels(), &r.values))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// One planet with its labelled facts.
/// Identity is the name: equality, ordering and hashing ignore the facts.
#[derive(Clone, Debug)]
pub struct Planet {
    name: String,
    facts: Vec<Fact>,
}

impl Planet {
    fn from_parts<'a>(name: &str, labels: impl Iterator<Item = &'a str>, values: &[String]) -> Self {
        let facts = labels
            .zip(values)
            .map(|(label, value)| Fact { label: s!(label), value: value.clone() })
            .collect();
        Self { name: s!(name), facts }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn facts(&self) -> &[Fact] { &self.facts }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.facts.iter().find(|f| f.label == label).map(|f| f.value.as_str())
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for Planet {
    fn eq(&self, other: &Self) -> bool { self.name == other.name }
}

impl Eq for Planet {}

impl PartialOrd for Planet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Planet {
    fn cmp(&self, other: &Self) -> Ordering { self.name.cmp(&other.name) }
}

impl Hash for Planet {
    fn hash<H: Hasher>(&self, state: &mut H) { self.name.hash(state); }
}
