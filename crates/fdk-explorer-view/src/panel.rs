//! Property panel view model

use fdk_explorer_model::ElementProperties;
use serde::{Deserialize, Serialize};

/// Flat key/value panel describing the active pick
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyPanel {
    /// Panel heading, the element's category label
    pub title: String,
    /// Display entries in source order
    pub entries: Vec<(String, String)>,
}

impl PropertyPanel {
    /// Build the panel for one element
    ///
    /// Direct attributes come first, then every property of every
    /// property set. Absent values render as `"undefined"`.
    pub fn from_properties(props: &ElementProperties) -> Self {
        let mut entries = Vec::new();
        for (name, value) in &props.attributes {
            entries.push((name.clone(), display_value(value)));
        }
        for pset in &props.psets {
            for prop in &pset.properties {
                entries.push((prop.name.clone(), display_value(&prop.nominal_value)));
            }
        }
        Self {
            title: props.element_type.clone(),
            entries,
        }
    }
}

fn display_value(value: &fdk_explorer_model::PropertyValue) -> String {
    if value.is_null() {
        "undefined".to_string()
    } else {
        value.display_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdk_explorer_model::{PropertySet, PropertyValue};

    #[test]
    fn panel_lists_attributes_then_pset_properties() {
        let props = ElementProperties::new("IfcWall")
            .with_attribute("Name", "Aussenwand")
            .with_attribute("Tag", PropertyValue::Null)
            .with_pset(
                PropertySet::new("Pset_WallCommon")
                    .with("LoadBearing", "true")
                    .with("FireRating", PropertyValue::Number(30.0)),
            );

        let panel = PropertyPanel::from_properties(&props);
        assert_eq!(panel.title, "IfcWall");
        assert_eq!(
            panel.entries,
            vec![
                ("Name".to_string(), "Aussenwand".to_string()),
                ("Tag".to_string(), "undefined".to_string()),
                ("LoadBearing".to_string(), "true".to_string()),
                ("FireRating".to_string(), "30".to_string()),
            ]
        );
    }

    #[test]
    fn panel_round_trips_through_json() {
        let props = ElementProperties::new("IfcSlab").with_attribute("Name", "Decke");
        let panel = PropertyPanel::from_properties(&props);
        let json = serde_json::to_string(&panel).unwrap();
        let back: PropertyPanel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, panel);
    }
}
