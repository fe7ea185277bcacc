// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property sets attached to model elements

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Flattened name → value view of one property set
pub type FlatProperties = BTreeMap<String, PropertyValue>;

/// A property's nominal value
///
/// The source data carries strings, numbers or nothing at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Null,
}

impl PropertyValue {
    /// Whether the value is absent
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// The text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Format the value as the string a key or panel entry would show
    ///
    /// Numbers are trimmed of trailing zeros so `3.0` and `3` group
    /// under the same taxonomy key.
    pub fn display_string(&self) -> String {
        match self {
            PropertyValue::Text(s) => s.clone(),
            PropertyValue::Number(n) => format!("{:.6}", n)
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string(),
            PropertyValue::Null => String::new(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

/// A single named property
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Nominal value
    pub nominal_value: PropertyValue,
}

impl Property {
    /// Create a new property
    pub fn new(name: impl Into<String>, nominal_value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            nominal_value: nominal_value.into(),
        }
    }
}

/// A named group of properties attached to one element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    /// Property set name (e.g. "Pset_WallCommon")
    pub name: String,
    /// Properties in this set, in source order
    pub properties: Vec<Property>,
}

impl PropertySet {
    /// Create a new, empty property set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property to this set
    pub fn add(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Add a property, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }

    /// Get a property by name
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Flatten this set into a name → value map
    ///
    /// Null-valued properties are omitted, so a key's presence in the
    /// returned map means the element actually carries a value for it.
    /// Later duplicates of a name win, matching a plain map rebuild of
    /// the ordered pair sequence.
    pub fn flatten(&self) -> FlatProperties {
        self.properties
            .iter()
            .filter(|p| !p.nominal_value.is_null())
            .map(|p| (p.name.clone(), p.nominal_value.clone()))
            .collect()
    }
}

/// Everything the property provider knows about one element
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementProperties {
    /// Element category label
    pub element_type: String,
    /// Direct attributes of the element (name, tag, ...), in source order
    pub attributes: Vec<(String, PropertyValue)>,
    /// Property sets attached to the element
    pub psets: Vec<PropertySet>,
    /// Material names associated with the element
    pub materials: Vec<String>,
}

impl ElementProperties {
    /// Create element properties with just a type label
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            ..Default::default()
        }
    }

    /// Add a property set, builder style
    pub fn with_pset(mut self, pset: PropertySet) -> Self {
        self.psets.push(pset);
        self
    }

    /// Add a direct attribute, builder style
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}
