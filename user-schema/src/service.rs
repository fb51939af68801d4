//! Generated from the `service` schema module.
use crate::user::User;
use refract_core::{
    FieldDescriptor, Reflective, ReflectiveStruct, ReflectiveTransformer, StructDescriptor,
    signature_of,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddUserRequest {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddUserResponse {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserRequest {
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetUserResponse {
    /// Absent when no user has the requested id.
    pub user: Option<User>,
}

impl Reflective for AddUserRequest {
    type Descriptor = StructDescriptor<Self>;

    fn descriptor() -> Self::Descriptor {
        const FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new("user", 0, signature_of::<User>)];
        StructDescriptor::new("AddUserRequest", "service.AddUserRequest", FIELDS)
    }
}

impl ReflectiveStruct for AddUserRequest {
    fn map_fields<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        Ok(Self {
            user: transformer.transform_value(self.user)?,
        })
    }
}

impl Reflective for AddUserResponse {
    type Descriptor = StructDescriptor<Self>;

    fn descriptor() -> Self::Descriptor {
        StructDescriptor::new("AddUserResponse", "service.AddUserResponse", &[])
    }
}

impl ReflectiveStruct for AddUserResponse {
    fn map_fields<F>(self, _transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        Ok(self)
    }
}

impl Reflective for GetUserRequest {
    type Descriptor = StructDescriptor<Self>;

    fn descriptor() -> Self::Descriptor {
        const FIELDS: &[FieldDescriptor] =
            &[FieldDescriptor::new("user_id", 0, signature_of::<i32>)];
        StructDescriptor::new("GetUserRequest", "service.GetUserRequest", FIELDS)
    }
}

impl ReflectiveStruct for GetUserRequest {
    fn map_fields<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        Ok(Self {
            user_id: transformer.transform_value(self.user_id)?,
        })
    }
}

impl Reflective for GetUserResponse {
    type Descriptor = StructDescriptor<Self>;

    fn descriptor() -> Self::Descriptor {
        const FIELDS: &[FieldDescriptor] =
            &[FieldDescriptor::new("user", 0, signature_of::<Option<User>>)];
        StructDescriptor::new("GetUserResponse", "service.GetUserResponse", FIELDS)
    }
}

impl ReflectiveStruct for GetUserResponse {
    fn map_fields<F>(self, transformer: &F) -> Result<Self, F::Error>
    where
        F: ReflectiveTransformer,
    {
        Ok(Self {
            user: transformer.transform_value(self.user)?,
        })
    }
}
