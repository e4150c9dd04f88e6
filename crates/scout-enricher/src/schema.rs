//! Output schema sent with every search request

use serde_json::{json, Value};

/// Name of the output schema
pub const SCHEMA_NAME: &str = "lead_enrichment";

/// Strict JSON schema for the enrichment payload
///
/// Every object level forbids additional properties and lists all of its
/// properties as required; nullable fields use `["string", "null"]`.
pub fn enrichment_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "official_website": { "type": ["string", "null"] },
            "website_source_url": { "type": ["string", "null"] },
            "instagram_url": { "type": ["string", "null"] },
            "instagram_source": {
                "type": ["string", "null"],
                "enum": ["website_html", "search", null]
            },
            "decision_makers": {
                "type": "array",
                "maxItems": 2,
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "name": { "type": "string" },
                        "title": { "type": "string" },
                        "source_url": { "type": "string" }
                    },
                    "required": ["name", "title", "source_url"]
                }
            }
        },
        "required": [
            "official_website",
            "website_source_url",
            "instagram_url",
            "instagram_source",
            "decision_makers"
        ]
    })
}
