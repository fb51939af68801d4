//! JSON export of type signatures.
//!
//! A signature is exported together with every record it can reach:
//!
//! ```json
//! {
//!   "type": { "kind": "record", "value": "user.Pet" },
//!   "records": [
//!     {
//!       "kind": "struct",
//!       "id": "user.Pet",
//!       "fields": [
//!         { "name": "name", "number": 0, "type": { "kind": "primitive", "value": "string" } }
//!       ]
//!     }
//!   ]
//! }
//! ```
use super::{RecordInfo, TypeSignature, reachable_records};
use serde_json::{Map, Value, json};

impl TypeSignature {
    /// Exports this signature and the definitions of every record reachable from it.
    pub fn to_json(&self) -> Value {
        let records: Vec<Value> = reachable_records(self).iter().map(record_json).collect();

        json!({
            "type": type_json(self),
            "records": records,
        })
    }
}

impl RecordInfo {
    /// Exports the definition of this record alone.
    pub fn to_json(&self) -> Value {
        record_json(self)
    }
}

fn type_json(signature: &TypeSignature) -> Value {
    match signature {
        TypeSignature::Primitive(primitive) => {
            json!({ "kind": "primitive", "value": primitive.as_str() })
        }
        TypeSignature::Optional(other) => json!({ "kind": "optional", "value": type_json(other) }),
        TypeSignature::Array(item) => {
            json!({ "kind": "array", "value": { "item": type_json(item) } })
        }
        TypeSignature::Struct(info) => json!({ "kind": "record", "value": info.qualified_name() }),
        TypeSignature::Enum(info) => json!({ "kind": "record", "value": info.qualified_name() }),
    }
}

fn record_json(record: &RecordInfo) -> Value {
    match record {
        RecordInfo::Struct(info) => {
            let fields: Vec<Value> = info
                .fields()
                .iter()
                .map(|field| {
                    json!({
                        "name": field.name(),
                        "number": field.number(),
                        "type": type_json(&field.signature()),
                    })
                })
                .collect();

            json!({ "kind": "struct", "id": info.qualified_name(), "fields": fields })
        }
        RecordInfo::Enum(info) => {
            let variants: Vec<Value> = info
                .variants()
                .iter()
                .map(|variant| {
                    let mut object = Map::new();
                    object.insert("name".into(), variant.name().into());
                    object.insert("number".into(), variant.number().into());
                    if let Some(payload) = variant.payload() {
                        object.insert("type".into(), type_json(&payload));
                    }
                    Value::Object(object)
                })
                .collect();

            json!({ "kind": "enum", "id": info.qualified_name(), "variants": variants })
        }
    }
}
