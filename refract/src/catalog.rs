//! # Catalog
//!
//! Binds the qualified name of every schema record to the Rust type generated for it, so a
//! JSON value can be decoded, transformed with the engine and encoded back without the caller
//! naming the type at compile time.
use crate::transforms::{Operation, TransformError};
use refract_core::{RecordInfo, Reflective, signature_of, transform_all};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::HashMap;
use user_schema::{
    AddUserRequest, AddUserResponse, GetUserRequest, GetUserResponse, Pet, SubscriptionStatus,
    Trial, User,
};

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("Type '{0}' has no generated Rust type")]
    UnknownType(String),

    #[error("Invalid value for '{type_name}': '{source}'")]
    Decode {
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Transform failed: '{0}'")]
    Transform(#[from] TransformError),

    #[error("Failed to encode the result: '{0}'")]
    Encode(#[source] serde_json::Error),
}

type Transcoder = fn(Value, Operation) -> Result<Value, TranscodeError>;

#[derive(Default)]
pub struct Catalog {
    transcoders: HashMap<&'static str, Transcoder>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of the `user` and `service` schema modules.
    pub fn user_schema() -> Self {
        let mut catalog = Self::new();
        catalog
            .register::<AddUserRequest>()
            .register::<AddUserResponse>()
            .register::<GetUserRequest>()
            .register::<GetUserResponse>()
            .register::<Pet>()
            .register::<SubscriptionStatus>()
            .register::<Trial>()
            .register::<User>();
        catalog
    }

    /// Registers `T` under the name of the record it describes. Types that are not
    /// records are ignored.
    pub fn register<T>(&mut self) -> &mut Self
    where
        T: Reflective + Serialize + DeserializeOwned,
    {
        if let Some(record) = signature_of::<T>().record() {
            self.transcoders
                .insert(record.qualified_name(), transcode::<T>);
        }
        self
    }

    /// Decodes `body` as a value of `record`, applies `operation` to every string and encodes
    /// the result.
    pub fn transform(
        &self,
        record: RecordInfo,
        body: Value,
        operation: Operation,
    ) -> Result<Value, TranscodeError> {
        let transcoder = self
            .transcoders
            .get(record.qualified_name())
            .ok_or_else(|| TranscodeError::UnknownType(record.qualified_name().to_string()))?;

        transcoder(body, operation)
    }
}

fn transcode<T>(body: Value, operation: Operation) -> Result<Value, TranscodeError>
where
    T: Reflective + Serialize + DeserializeOwned,
{
    let type_name = signature_of::<T>().to_string();

    let input: T = serde_json::from_value(body).map_err(|source| TranscodeError::Decode {
        type_name: type_name.clone(),
        source,
    })?;

    tracing::debug!(%type_name, ?operation, "Transforming value");

    let output = transform_all(input, &operation)?;

    serde_json::to_value(output).map_err(TranscodeError::Encode)
}
