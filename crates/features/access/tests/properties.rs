use furever_access::{AccessDecision, Availability, FeaturePermissions, LinkOutcome};
use furever_domain::features::SERVICES;
use furever_domain::{Role, RoleSet};
use proptest::prelude::*;

fn any_role() -> impl Strategy<Value = Option<Role>> {
    prop_oneof![
        Just(None),
        Just(Some(Role::PetOwner)),
        Just(Some(Role::Veterinarian)),
        Just(Some(Role::Shelter)),
    ]
}

proptest! {
    #[test]
    fn unmapped_features_are_always_open(feature in "[a-zA-Z ]{0,24}", role in any_role()) {
        let table = FeaturePermissions::standard();
        prop_assume!(table.required(&feature).is_none());
        prop_assert_eq!(table.check(&feature, role), AccessDecision::Open);
        prop_assert_eq!(table.availability(&feature, role), Availability::Available);
    }

    #[test]
    fn denials_report_the_exact_entry(index in 0usize..SERVICES.len(), role in any_role()) {
        let table = FeaturePermissions::standard();
        let feature = SERVICES[index];
        let required = table.required(feature).unwrap_or(RoleSet::empty());

        match table.check(feature, role) {
            AccessDecision::Denied(denied) => {
                prop_assert!(role.is_none_or(|r| !required.allows(r)));
                prop_assert_eq!(denied.required, required);
                prop_assert_eq!(denied.current, role);
                prop_assert_eq!(denied.feature.as_str(), feature);
            },
            AccessDecision::Granted => {
                prop_assert!(role.is_some_and(|r| required.allows(r)));
            },
            AccessDecision::Open => prop_assert!(false, "every service is gated"),
        }
    }
}

#[test]
fn no_role_is_denied_every_service() {
    let table = FeaturePermissions::standard();
    for feature in SERVICES {
        assert!(matches!(table.follow_link(feature, "#", None), LinkOutcome::Denied(_)));
    }
}

#[test]
fn each_role_sees_the_expected_services() {
    let table = FeaturePermissions::standard();
    let available = |role| -> Vec<&'static str> {
        SERVICES
            .into_iter()
            .filter(|feature| table.check(feature, Some(role)).is_allowed())
            .collect()
    };

    assert_eq!(
        available(Role::PetOwner),
        ["Pet Adoption", "Pet Products", "Pet Training", "Grooming"]
    );
    assert_eq!(available(Role::Veterinarian), ["Veterinary Care", "Emergency Services"]);
    assert_eq!(available(Role::Shelter), ["Pet Adoption", "Pet Training", "Grooming"]);
}
