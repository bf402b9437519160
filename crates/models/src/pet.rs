//! Pet records.
//!
//! The three known fields are typed and optional; a known field with the
//! wrong JSON type fails deserialization instead of being coerced. Any other
//! field is kept verbatim in `extra` and stored alongside the known ones.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Name of the identifier field, on the wire and in the database.
pub const ID_FIELD: &str = "_id";

/// Pet fields as supplied by a client or the seed set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewPet {
    pub fn new(name: &str, kind: &str, age: u64) -> Self {
        Self {
            name: Some(name.to_string()),
            kind: Some(kind.to_string()),
            age: Some(Number::from(age)),
            extra: Map::new(),
        }
    }

    /// Attach a fresh store-assigned identifier. A client-supplied `_id` is dropped.
    pub fn into_document(mut self) -> PetDocument {
        self.extra.remove(ID_FIELD);
        PetDocument {
            id: ObjectId::new(),
            fields: self,
        }
    }
}

/// A stored pet as it lives in the `pets` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub fields: NewPet,
}

/// A stored pet as returned by the API; the identifier is the ObjectId hex string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: NewPet,
}

impl From<PetDocument> for Pet {
    fn from(doc: PetDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            fields: doc.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_input_is_accepted() {
        let pet: NewPet = serde_json::from_value(json!({"name": "Mystery"})).unwrap();
        assert_eq!(pet.name.as_deref(), Some("Mystery"));
        assert!(pet.kind.is_none());
        assert!(pet.age.is_none());

        let pet: NewPet = serde_json::from_value(json!({"name": null, "age": null})).unwrap();
        assert_eq!(pet, NewPet::default());
    }

    #[test]
    fn wrongly_typed_known_fields_are_rejected() {
        assert!(serde_json::from_value::<NewPet>(json!({"age": "old"})).is_err());
        assert!(serde_json::from_value::<NewPet>(json!({"name": 5})).is_err());
        assert!(serde_json::from_value::<NewPet>(json!({"type": ["Dog"]})).is_err());
    }

    #[test]
    fn extra_fields_round_trip_through_json() {
        let input = json!({"name": "Rex", "type": "Dog", "age": 4, "color": "brown", "tags": [1, 2]});
        let pet: NewPet = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(pet.extra.get("color"), Some(&json!("brown")));
        assert_eq!(serde_json::to_value(&pet).unwrap(), input);
    }

    #[test]
    fn store_assigns_identifier_and_drops_client_id() {
        let pet: NewPet = serde_json::from_value(json!({"_id": "forged", "name": "Rex"})).unwrap();
        let doc = pet.into_document();
        assert!(!doc.fields.extra.contains_key(ID_FIELD));

        let api = Pet::from(doc.clone());
        assert_eq!(api.id, doc.id.to_hex());
        assert_eq!(api.id.len(), 24);
    }

    #[test]
    fn api_shape_uses_underscore_id_and_type() {
        let doc = NewPet::new("Max", "Dog", 3).into_document();
        let id = doc.id.to_hex();
        let json = serde_json::to_value(Pet::from(doc)).unwrap();
        assert_eq!(json, json!({"_id": id, "name": "Max", "type": "Dog", "age": 3}));
        // integer ages stay integers on the wire
        assert!(serde_json::to_string(&json).unwrap().contains(r#""age":3"#));
    }

    #[test]
    fn document_round_trips_through_bson() {
        let mut pet = NewPet::new("Luna", "Cat", 1);
        pet.extra.insert("indoor".into(), json!(true));
        let doc = pet.into_document();
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert_eq!(bson.get_object_id("_id").unwrap(), doc.id);
        assert_eq!(bson.get_str("type").unwrap(), "Cat");
        let back: PetDocument = mongodb::bson::from_document(bson).unwrap();
        assert_eq!(back, doc);
    }
}
