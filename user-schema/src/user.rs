//! Generated from the `user` schema module.
use once_cell::sync::Lazy;
use prost_types::Timestamp;
use refract_core::{
    EnumDescriptor, FieldDescriptor, Reflective, ReflectiveEnum, ReflectiveStruct,
    ReflectiveTransformer, StructDescriptor, VariantDescriptor, signature_of,
};
use serde::{Deserialize, Serialize};

/// A user of the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_id: i32,
    pub name: String,
    /// Something the user likes to say.
    pub quote: String,
    pub pets: Vec<Pet>,
    pub subscription_status: SubscriptionStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pet {
    pub name: String,
    pub height_in_meters: f32,
    pub picture: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trial {
    #[serde(with = "crate::timestamp")]
    pub start_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum SubscriptionStatus {
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
    #[serde(rename = "FREE")]
    Free,
    #[serde(rename = "trial")]
    Trial(Trial),
    #[serde(rename = "PREMIUM")]
    Premium,
}

pub static TARZAN: Lazy<User> = Lazy::new(|| User {
    user_id: 123,
    name: "Tarzan".to_string(),
    quote: "AAAAaAaAaAyAAAAaAaAaAyAAAAaAaAaA".to_string(),
    pets: vec![Pet {
        name: "Cheeta".to_string(),
        height_in_meters: 1.67,
        picture: "🐒".to_string(),
    }],
    subscription_status: SubscriptionStatus::Trial(Trial {
        start_time: Timestamp {
            seconds: 1_743_592_409,
            nanos: 0,
        },
    }),
});

impl Reflective for User {
    type Descriptor = StructDescriptor<Self>;

    fn descriptor() -> Self::Descriptor {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("user_id", 0, signature_of::<i32>),
            FieldDescriptor::new("name", 1, signature_of::<String>),
            FieldDescriptor::new("quote", 2, signature_of::<String>),
            FieldDescriptor::new("pets", 3, signature_of::<Vec<Pet>>),
            FieldDescriptor::new("subscription_status", 4, signature_of::<SubscriptionStatus>),
        ];
        StructDescriptor::new("User", "user.User", FIELDS)
    }
}

impl ReflectiveStruct for User {
    fn map_fields<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        Ok(Self {
            user_id: transformer.transform_value(self.user_id)?,
            name: transformer.transform_value(self.name)?,
            quote: transformer.transform_value(self.quote)?,
            pets: transformer.transform_value(self.pets)?,
            subscription_status: transformer.transform_value(self.subscription_status)?,
        })
    }
}

impl Reflective for Pet {
    type Descriptor = StructDescriptor<Self>;

    fn descriptor() -> Self::Descriptor {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("name", 0, signature_of::<String>),
            FieldDescriptor::new("height_in_meters", 1, signature_of::<f32>),
            FieldDescriptor::new("picture", 2, signature_of::<String>),
        ];
        StructDescriptor::new("Pet", "user.Pet", FIELDS)
    }
}

impl ReflectiveStruct for Pet {
    fn map_fields<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        Ok(Self {
            name: transformer.transform_value(self.name)?,
            height_in_meters: transformer.transform_value(self.height_in_meters)?,
            picture: transformer.transform_value(self.picture)?,
        })
    }
}

impl Reflective for Trial {
    type Descriptor = StructDescriptor<Self>;

    fn descriptor() -> Self::Descriptor {
        const FIELDS: &[FieldDescriptor] =
            &[FieldDescriptor::new("start_time", 0, signature_of::<Timestamp>)];
        StructDescriptor::new("Trial", "user.Trial", FIELDS)
    }
}

impl ReflectiveStruct for Trial {
    fn map_fields<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        Ok(Self {
            start_time: transformer.transform_value(self.start_time)?,
        })
    }
}

impl Reflective for SubscriptionStatus {
    type Descriptor = EnumDescriptor<Self>;

    fn descriptor() -> Self::Descriptor {
        const VARIANTS: &[VariantDescriptor] = &[
            VariantDescriptor::constant("UNKNOWN", 0),
            VariantDescriptor::constant("FREE", 1),
            VariantDescriptor::wrapper("trial", 2, signature_of::<Trial>),
            VariantDescriptor::constant("PREMIUM", 3),
        ];
        EnumDescriptor::new("SubscriptionStatus", "user.SubscriptionStatus", VARIANTS)
    }
}

impl ReflectiveEnum for SubscriptionStatus {
    fn variant_number(&self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Free => 1,
            Self::Trial(_) => 2,
            Self::Premium => 3,
        }
    }

    fn map_value<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        match self {
            Self::Trial(value) => Ok(Self::Trial(transformer.transform_value(value)?)),
            constant => Ok(constant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tarzan_serializes_with_tagged_status_and_readable_timestamp() {
        let value = serde_json::to_value(&*TARZAN).unwrap();

        assert_eq!(value["name"], json!("Tarzan"));
        assert_eq!(value["pets"][0]["name"], json!("Cheeta"));
        assert_eq!(
            value["subscription_status"],
            json!({
                "kind": "trial",
                "value": {
                    "start_time": {
                        "unix_millis": 1_743_592_409_000_i64,
                        "formatted": "2025-04-02T11:13:29.000Z"
                    }
                }
            })
        );
    }

    #[test]
    fn tarzan_round_trips_through_json() {
        let json = serde_json::to_string(&*TARZAN).unwrap();
        let decoded: User = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, *TARZAN);
    }

    #[test]
    fn sub_millisecond_timestamps_round_trip_through_json() {
        let trial = Trial {
            start_time: Timestamp {
                seconds: 1,
                nanos: 1_500,
            },
        };

        let value = serde_json::to_value(&trial).unwrap();
        assert_eq!(value["start_time"]["unix_millis"], json!(1000));
        assert_eq!(value["start_time"]["sub_millis_nanos"], json!(1500));

        let decoded: Trial = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, trial);
    }

    #[test]
    fn timestamps_before_the_epoch_round_trip_through_json() {
        let trial = Trial {
            start_time: Timestamp {
                seconds: -2,
                nanos: 999_999_999,
            },
        };

        let json = serde_json::to_string(&trial).unwrap();
        let decoded: Trial = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, trial);
    }

    #[test]
    fn out_of_range_sub_millis_nanos_are_rejected() {
        let result = serde_json::from_value::<Trial>(json!({
            "start_time": { "unix_millis": 0, "sub_millis_nanos": 1_000_000 }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn missing_fields_take_default_values() {
        let user: User = serde_json::from_value(json!({ "name": "John Doe" })).unwrap();

        assert_eq!(user.user_id, 0);
        assert!(user.pets.is_empty());
        assert_eq!(user.subscription_status, SubscriptionStatus::Unknown);
    }

    #[test]
    fn constant_variants_serialize_as_bare_kinds() {
        assert_eq!(
            serde_json::to_value(SubscriptionStatus::Premium).unwrap(),
            json!({ "kind": "PREMIUM" })
        );
    }

    #[test]
    fn variant_numbers_match_the_descriptor() {
        let descriptor = SubscriptionStatus::descriptor();

        for status in [
            SubscriptionStatus::Unknown,
            SubscriptionStatus::Free,
            SubscriptionStatus::Trial(Trial::default()),
            SubscriptionStatus::Premium,
        ] {
            let variant = descriptor.active_variant(&status).unwrap();
            assert_eq!(variant.number(), status.variant_number());
        }
    }
}
