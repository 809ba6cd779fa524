//! Response-schema descriptor in the provider's OpenAPI subset.
//!
//! Sent with a request as a hint about the reply's shape. The provider may
//! still return something else, so callers validate replies themselves.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    /// Declaration order of `properties`; the map itself is sorted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: BTreeMap::new(),
            property_ordering: Vec::new(),
            required: Vec::new(),
        }
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Adds a property that the reply must contain.
    pub fn required_property(mut self, name: &str, schema: Schema) -> Self {
        self.properties.insert(name.to_string(), schema);
        self.property_ordering.push(name.to_string());
        self.required.push(name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_nested_required_object() {
        let schema = Schema::object().required_property(
            "outer",
            Schema::object()
                .with_description("nested")
                .required_property("inner", Schema::string()),
        );

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "OBJECT",
                "properties": {
                    "outer": {
                        "type": "OBJECT",
                        "description": "nested",
                        "properties": { "inner": { "type": "STRING" } },
                        "propertyOrdering": ["inner"],
                        "required": ["inner"]
                    }
                },
                "propertyOrdering": ["outer"],
                "required": ["outer"]
            })
        );
    }

    #[test]
    fn test_leaf_omits_empty_collections() {
        let value = serde_json::to_value(Schema::string()).unwrap();
        assert_eq!(value, json!({ "type": "STRING" }));
    }

    #[test]
    fn test_property_ordering_keeps_declaration_order() {
        let schema = Schema::object()
            .required_property("zeta", Schema::string())
            .required_property("alpha", Schema::string());
        assert_eq!(schema.property_ordering, vec!["zeta", "alpha"]);
        assert_eq!(schema.required, vec!["zeta", "alpha"]);
    }
}
