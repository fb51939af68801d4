use local_schema::{Animal, Label, Mood, Person, Status, TrialNote, tarzan};
use refract_core::{LeafTransform, map_strings, signature_of, transform_all};
use std::convert::Infallible;
use user_schema::{
    AddUserRequest, GetUserRequest, GetUserResponse, SubscriptionStatus, TARZAN, User, UserStore,
};


struct UpperCase;

impl LeafTransform for UpperCase {
    type Error = Infallible;

    fn string(&self, value: String) -> Result<String, Infallible> {
        Ok(value.to_uppercase())
    }
}

/// Overrides every leaf, to show that constant enum variants never reach leaf logic.
struct Everything;

impl LeafTransform for Everything {
    type Error = Infallible;

    fn bool(&self, value: bool) -> Result<bool, Infallible> {
        Ok(!value)
    }

    fn int32(&self, value: i32) -> Result<i32, Infallible> {
        Ok(value + 1)
    }

    fn int64(&self, value: i64) -> Result<i64, Infallible> {
        Ok(value + 1)
    }

    fn hash64(&self, value: u64) -> Result<u64, Infallible> {
        Ok(value + 1)
    }

    fn string(&self, value: String) -> Result<String, Infallible> {
        Ok(value + "!")
    }
}

#[derive(Debug, PartialEq)]
struct TooLong(String);

/// Rejects strings longer than 5 characters.
struct MaxLength;

impl LeafTransform for MaxLength {
    type Error = TooLong;

    fn string(&self, value: String) -> Result<String, TooLong> {
        if value.chars().count() > 5 {
            Err(TooLong(value))
        } else {
            Ok(value.to_uppercase())
        }
    }
}

#[test]
fn test_reference_scenario() {
    let expected = Person {
        name: "TARZAN".to_string(),
        pets: vec![Animal {
            name: "CHEETA".to_string(),
            ..tarzan().pets[0].clone()
        }],
        status: Status::Trial(TrialNote {
            note: "OK".to_string(),
        }),
        ..tarzan()
    };

    let result = transform_all(tarzan(), &UpperCase).unwrap();

    assert_eq!(result, expected);
    // Non-string leaves are untouched
    assert_eq!(result.id, 42);
    assert_eq!(result.age, Some(30));
    assert_eq!(result.pets[0].checksum, 7);
}

#[test]
fn test_tarzan_from_user_schema() {
    let result = map_strings(TARZAN.clone(), |s| s.to_uppercase());

    assert_eq!(result.user_id, 123);
    assert_eq!(result.name, "TARZAN");
    assert_eq!(result.quote, "AAAAAAAAAAYAAAAAAAAAAYAAAAAAAAAA");
    assert_eq!(result.pets[0].name, "CHEETA");
    assert_eq!(result.pets[0].height_in_meters, 1.67);
    assert_eq!(result.pets[0].picture, "🐒");
    // Same variant, same timestamp
    assert_eq!(result.subscription_status, TARZAN.subscription_status);
}

#[test]
fn test_absent_optionals_stay_absent() {
    let person = Person {
        nickname: None,
        age: Some(7),
        ..tarzan()
    };

    let result = transform_all(person, &UpperCase).unwrap();

    assert_eq!(result.nickname, None);
    assert_eq!(result.age, Some(7));

    let empty = GetUserResponse { user: None };
    assert_eq!(transform_all(empty.clone(), &UpperCase), Ok(empty));
}

#[test]
fn test_present_optionals_are_transformed() {
    let person = Person {
        nickname: Some("king of the apes".to_string()),
        ..tarzan()
    };

    let result = transform_all(person, &UpperCase).unwrap();
    assert_eq!(result.nickname.as_deref(), Some("KING OF THE APES"));

    let found = GetUserResponse {
        user: Some(TARZAN.clone()),
    };
    let result = transform_all(found, &UpperCase).unwrap();
    assert_eq!(result.user.map(|u| u.name), Some("TARZAN".to_string()));
}

#[test]
fn test_newtype_descriptors_convert_through_their_witness() {
    // 1. The newtype is described as the string it wraps
    assert_eq!(signature_of::<Label>().to_string(), "string");
    assert_eq!(signature_of::<Vec<Option<Label>>>().to_string(), "[string?]");

    // 2. Leaf logic sees the inner string and the result is wrapped again
    let labels = vec![Some(Label("cheeta".to_string())), None];
    assert_eq!(
        transform_all(labels, &UpperCase),
        Ok(vec![Some(Label("CHEETA".to_string())), None])
    );

    // 3. A failing leaf returns its error without rebuilding the label
    let long = Label("Greystoke".to_string());
    assert_eq!(
        transform_all(long, &MaxLength),
        Err(TooLong("Greystoke".to_string()))
    );
}

#[test]
fn test_service_messages_transform_through_the_store() {
    let mut store = UserStore::new();

    // 1. Transform the request before it reaches the store
    let request = transform_all(
        AddUserRequest {
            user: TARZAN.clone(),
        },
        &UpperCase,
    )
    .unwrap();
    store.add_user(request).unwrap();

    // 2. The stored user is the transformed one, and its response transforms back
    let response = store.get_user(&GetUserRequest { user_id: 123 });
    assert_eq!(response.user.as_ref().map(|u| u.name.as_str()), Some("TARZAN"));

    let lowered = map_strings(response, |s| s.to_lowercase());
    assert_eq!(lowered.user.map(|u| u.quote), Some(TARZAN.quote.to_lowercase()));
}

#[test]
fn test_constant_enum_variants_are_returned_unchanged() {
    for status in [Status::Unset, Status::Active] {
        assert_eq!(transform_all(status.clone(), &Everything), Ok(status));
    }

    for status in [
        SubscriptionStatus::Unknown,
        SubscriptionStatus::Free,
        SubscriptionStatus::Premium,
    ] {
        assert_eq!(transform_all(status.clone(), &Everything), Ok(status));
    }

    assert_eq!(transform_all(Mood::Calm, &Everything), Ok(Mood::Calm));
}

#[test]
fn test_enum_payloads_keep_their_variant() {
    let result = transform_all(Mood::Noisy("grr".to_string()), &Everything).unwrap();

    assert_eq!(result, Mood::Noisy("grr!".to_string()));
}

#[test]
fn test_every_primitive_kind_is_reached() {
    let person = Person {
        pets: vec![Animal {
            name: "Cheeta".to_string(),
            checksum: 41,
            mood: Some(Mood::Noisy("hoo".to_string())),
        }],
        ..tarzan()
    };

    let result = transform_all(person, &Everything).unwrap();

    assert_eq!(result.id, 43);
    assert_eq!(result.age, Some(31));
    assert_eq!(result.name, "Tarzan!");
    assert_eq!(result.pets[0].checksum, 42);
    assert_eq!(result.pets[0].mood, Some(Mood::Noisy("hoo!".to_string())));
}

#[test]
fn test_first_leaf_error_is_returned_unmodified() {
    let person = Person {
        name: "Jane".to_string(),
        nickname: Some("Lady Greystoke".to_string()),
        pets: vec![Animal {
            name: "Cheeta the chimpanzee".to_string(),
            ..Animal::default()
        }],
        ..tarzan()
    };

    let result = transform_all(person, &MaxLength);

    // `nickname` comes before `pets` in schema order
    assert_eq!(result, Err(TooLong("Lady Greystoke".to_string())));
}

#[test]
fn test_fallible_transform_succeeds_when_every_leaf_does() {
    let user = User {
        name: "Jane".to_string(),
        ..User::default()
    };

    let result = transform_all(user, &MaxLength).unwrap();

    assert_eq!(result.name, "JANE");
}
