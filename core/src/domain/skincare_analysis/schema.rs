use serde_json::json;

/// Returns the JSON schema hint sent with skincare analysis requests
pub fn get_skincare_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "products": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "usageTime": {
                            "type": "array",
                            "items": { "type": "string", "enum": ["AM", "PM"] }
                        },
                        "frequency": { "type": "string" },
                        "conflictsWith": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["name", "description", "usageTime", "frequency", "conflictsWith"]
                }
            },
            "recommendedRoutine": {
                "type": "object",
                "properties": {
                    "AM": { "type": "array", "items": { "type": "string" } },
                    "PM": { "type": "array", "items": { "type": "string" } }
                },
                "required": ["AM", "PM"]
            },
            "conflicts": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "products": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "reason": { "type": "string" }
                    },
                    "required": ["products", "reason"]
                }
            }
        },
        "required": ["products", "recommendedRoutine", "conflicts"]
    })
}
