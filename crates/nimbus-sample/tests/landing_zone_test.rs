use nimbus::mock::MockConstructor;
use nimbus::{with_config, with_name, with_resource_options, ResourceBuilder};
use nimbus_sample::landing_zone::{LandingZone, LOG_RETENTION_DAYS, SUBNETS};
use nimbus_sample::presets::{Expiring, Subnet, Tagged, Versioned};
use nimbus_sample::resources::{Bucket, BucketArgs, Network, NetworkArgs};
use nimbus_sample::{CloudError, Stack, StackConfig, StackOption};

fn stack(name: &str) -> Stack {
    Stack::new(&StackConfig {
        project: "shop".to_string(),
        stack: name.to_string(),
    })
}

#[test]
fn test_landing_zone_full_declaration() {
    let stack = stack("staging");
    let zone = LandingZone::declare(&stack).unwrap();

    assert_eq!(stack.len(), 3);
    assert_eq!(zone.network.subnets, SUBNETS.to_vec());
    assert!(zone.assets.versioning);
    assert!(!zone.logs.versioning);

    let export = stack.export();
    let names: Vec<&str> = export.resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["core", "assets", "logs"]);

    let network = &export.resources[0];
    assert!(network.options.protect);
    assert_eq!(network.inputs["tags"]["env"], "staging");

    let assets = &export.resources[1];
    assert_eq!(assets.options.depends_on, vec![zone.network.urn.clone()]);
    assert!(assets.options.retain_on_delete);
    assert_eq!(assets.inputs["versioning"], true);
    assert_eq!(assets.inputs["tags"]["env"], "staging");

    let logs = &export.resources[2];
    assert_eq!(logs.options.parent, Some(zone.network.urn.clone()));
    assert_eq!(logs.options.ignore_changes, vec!["tags"]);
    assert_eq!(logs.inputs["lifecycle_days"], LOG_RETENTION_DAYS);
    assert_eq!(logs.inputs["tags"]["env"], "staging");
}

#[test]
fn test_export_serializes_to_json() {
    let stack = stack("dev");
    LandingZone::declare(&stack).unwrap();

    let json = serde_json::to_value(stack.export()).unwrap();
    assert_eq!(json["project"], "shop");
    assert_eq!(json["resources"][0]["type"], Network::TYPE);
    assert_eq!(
        json["resources"][0]["urn"],
        "urn:nimbus:dev::shop::net:Network::core"
    );
}

#[test]
fn test_declaring_twice_fails_with_duplicate() {
    let stack = stack("dev");
    LandingZone::declare(&stack).unwrap();

    let err = LandingZone::declare(&stack).unwrap_err();
    assert!(matches!(err, CloudError::DuplicateUrn(urn) if urn == stack.urn(Network::TYPE, "core")));
    assert_eq!(stack.len(), 3);
}

#[test]
fn test_unnamed_resource_error_comes_from_constructor() {
    let stack = stack("dev");
    let err = ResourceBuilder::build(Bucket::new)
        .with([with_config(Versioned)])
        .register(&stack)
        .unwrap_err();

    assert!(matches!(err, CloudError::InvalidName { ref name, .. } if name.is_empty()));
    assert!(stack.is_empty());
}

#[test]
fn test_dependency_on_undeclared_resource() {
    let stack = stack("dev");
    let ghost = stack.urn(Network::TYPE, "ghost");

    let err = ResourceBuilder::build(Bucket::new)
        .with([
            with_name("orphan"),
            with_resource_options([StackOption::DependsOn(ghost.clone())]),
        ])
        .register(&stack)
        .unwrap_err();

    assert!(matches!(err, CloudError::UnknownDependency(urn) if urn == ghost));
}

#[test]
fn test_subnet_outside_network_is_rejected() {
    let stack = stack("dev");
    let err = ResourceBuilder::build(Network::new)
        .with([
            with_name("edge"),
            with_config(|args: &mut NetworkArgs| args.cidr = "192.168.0.0/24".to_string()),
            with_config(Subnet::new("192.168.1.0/28")),
        ])
        .register(&stack)
        .unwrap_err();

    assert!(matches!(err, CloudError::InvalidInput { field: "subnets", .. }));
    assert_eq!(
        err.to_string(),
        "invalid input `subnets`: 192.168.1.0/28 is outside 192.168.0.0/24"
    );
}

#[test]
fn test_zero_day_expiry_is_rejected() {
    let stack = stack("dev");
    let err = ResourceBuilder::build(Bucket::new)
        .with([with_name("tmp"), with_config(Expiring(0))])
        .register(&stack)
        .unwrap_err();

    assert!(matches!(err, CloudError::InvalidInput { field: "lifecycle_days", .. }));
}

#[test]
fn test_later_protect_option_overrides_earlier() {
    let stack = stack("dev");
    let bucket = ResourceBuilder::build(Bucket::new)
        .with([with_name("scratch")])
        .with([with_resource_options([StackOption::Protect(true)])])
        .with([with_resource_options([StackOption::Protect(false)])])
        .register(&stack)
        .unwrap();

    let recorded = stack.get(&bucket.urn).unwrap();
    assert!(!recorded.options.protect);
}

/// The bucket declaration with a mocked constructor: nothing reaches the stack, and the
/// forwarded arguments can be checked directly.
#[test]
fn test_bucket_declaration_with_mocked_constructor() {
    let stack = stack("dev");
    let urn = stack.urn(Bucket::TYPE, "media");

    let mut mock = MockConstructor::<Stack, BucketArgs, Bucket>::new();
    mock.expect_register().return_ok(Bucket {
        urn: urn.clone(),
        name: "media".to_string(),
        versioning: true,
    });

    let bucket = ResourceBuilder::build(mock.constructor())
        .with([
            with_name("media"),
            with_config(Versioned),
            with_config(Tagged::new("team", "web")),
            with_resource_options([StackOption::RetainOnDelete(true)]),
        ])
        .register(&stack)
        .unwrap();

    assert_eq!(bucket.urn, urn);
    assert!(stack.is_empty());

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "media");
    assert!(calls[0].input.versioning);
    assert_eq!(calls[0].input.tags.get("team").map(String::as_str), Some("web"));
    assert_eq!(calls[0].options, vec![StackOption::RetainOnDelete(true)]);
    mock.verify();
}
