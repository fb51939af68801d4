use proptest::prelude::*;
use refract_core::{
    LeafTransform, Reflective, ReflectiveEnum, TypeDescriptor, map_strings, transform_all,
};
use refract_core::prost_types::Timestamp;
use std::convert::Infallible;
use user_schema::{Pet, SubscriptionStatus, Trial, User};

struct Identity;

impl LeafTransform for Identity {
    type Error = Infallible;
}

// Letters whose upper case is stable, plus some that change length.
const NAME: &str = "[a-zA-Z0-9 ßéñœ]{0,16}";

fn upper(user: User) -> User {
    map_strings(user, |s| s.to_uppercase())
}

/// Strategy for generating arbitrary Pet values
fn arb_pet() -> impl Strategy<Value = Pet> {
    (NAME, 0.0f32..5.0, "[🐒🐘🦁]{0,2}").prop_map(|(name, height_in_meters, picture)| Pet {
        name,
        height_in_meters,
        picture,
    })
}

/// Strategy for generating arbitrary SubscriptionStatus values
fn arb_status() -> impl Strategy<Value = SubscriptionStatus> {
    prop_oneof![
        Just(SubscriptionStatus::Unknown),
        Just(SubscriptionStatus::Free),
        Just(SubscriptionStatus::Premium),
        (0i64..4_000_000_000, 0i32..1_000_000_000).prop_map(|(seconds, nanos)| {
            SubscriptionStatus::Trial(Trial {
                start_time: Timestamp { seconds, nanos },
            })
        }),
    ]
}

/// Strategy for generating arbitrary User values
fn arb_user() -> impl Strategy<Value = User> {
    (
        any::<i32>(),
        NAME,
        "[aAyY ]{0,32}",
        prop::collection::vec(arb_pet(), 0..5),
        arb_status(),
    )
        .prop_map(|(user_id, name, quote, pets, subscription_status)| User {
            user_id,
            name,
            quote,
            pets,
            subscription_status,
        })
}

proptest! {
    /// Identity law: a transform without overrides returns an equal value
    #[test]
    fn test_identity_law(user in arb_user()) {
        prop_assert_eq!(transform_all(user.clone(), &Identity), Ok(user));
    }

    /// Identity law holds for containers of records too
    #[test]
    fn test_identity_law_for_containers(
        pets in prop::collection::vec(prop::option::of(arb_pet()), 0..6)
    ) {
        prop_assert_eq!(transform_all(pets.clone(), &Identity), Ok(pets));
    }

    /// Idempotence: upper-casing twice is upper-casing once
    #[test]
    fn test_upper_case_is_idempotent(user in arb_user()) {
        let once = upper(user);
        let twice = upper(once.clone());
        prop_assert_eq!(twice, once);
    }

    /// Structure preservation: lengths, order, active variants and non-string leaves
    #[test]
    fn test_structure_is_preserved(user in arb_user()) {
        let result = upper(user.clone());

        prop_assert_eq!(result.user_id, user.user_id);
        prop_assert_eq!(result.pets.len(), user.pets.len());
        for (after, before) in result.pets.iter().zip(&user.pets) {
            prop_assert_eq!(after.height_in_meters, before.height_in_meters);
            prop_assert_eq!(&after.name, &before.name.to_uppercase());
        }
        prop_assert_eq!(
            result.subscription_status.variant_number(),
            user.subscription_status.variant_number()
        );
        if let (SubscriptionStatus::Trial(after), SubscriptionStatus::Trial(before)) =
            (&result.subscription_status, &user.subscription_status)
        {
            prop_assert_eq!(after, before);
        }
    }

    /// Optional presence is preserved
    #[test]
    fn test_optional_presence_is_preserved(user in prop::option::of(arb_user())) {
        let was_present = user.is_some();
        let result = map_strings(user, |s| s.to_lowercase());
        prop_assert_eq!(result.is_some(), was_present);
    }

    /// JSON encoding is loss-free, timestamps included
    #[test]
    fn test_users_round_trip_through_json(user in arb_user()) {
        let json = serde_json::to_string(&user).unwrap();
        let decoded: User = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, user);
    }

    /// Signatures do not depend on values
    #[test]
    fn test_signature_is_static(_user in arb_user()) {
        prop_assert_eq!(User::descriptor().signature().to_string(), "user.User");
    }
}
