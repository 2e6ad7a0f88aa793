use cloudenv::{
    CloudConfigError, CloudConfiguration, CloudEnvironments, ServiceName, cloud_config_from_name,
};

const SUPPORTED: [&str; 5] = [
    "AzureChinaCloud",
    "AzureCloud",
    "AzurePublicCloud",
    "AzureUSGovernment",
    "AzureUSGovernmentCloud",
];

#[test]
fn mixed_case_matches_upper_case() {
    for name in SUPPORTED {
        assert_eq!(
            cloud_config_from_name(name, ""),
            cloud_config_from_name(&name.to_uppercase(), "")
        );
        assert_eq!(
            cloud_config_from_name(&name.to_lowercase(), ""),
            cloud_config_from_name(&name.to_uppercase(), "")
        );
    }
}

#[test]
fn override_applies_to_every_supported_cloud() {
    let endpoint = "https://management.private.example/";
    for name in SUPPORTED {
        let base = cloud_config_from_name(name, "").unwrap();
        let overridden = cloud_config_from_name(name, endpoint).unwrap();

        let rm = overridden.service(ServiceName::ResourceManager).unwrap();
        assert_eq!(rm.endpoint, endpoint);
        assert_eq!(rm.audience, base.resource_manager().unwrap().audience);
    }
}

#[test]
fn repeated_overrides_leave_builtin_table_untouched() {
    let before = cloud_config_from_name("AZURECHINACLOUD", "").unwrap();
    for i in 0..3 {
        let endpoint = format!("https://arm-{i}.example");
        let cfg = cloud_config_from_name("AZURECHINACLOUD", &endpoint).unwrap();
        assert_eq!(cfg.resource_manager().unwrap().endpoint, endpoint);
    }
    let after = cloud_config_from_name("AZURECHINACLOUD", "").unwrap();
    assert_eq!(before, after);
    assert_eq!(after, CloudConfiguration::azure_china());
}

#[test]
fn unknown_cloud_is_config_not_found() {
    assert_eq!(
        cloud_config_from_name("AzureStackCloud", ""),
        Err(CloudConfigError::ConfigNotFound)
    );
    assert_eq!(
        cloud_config_from_name("AzureStackCloud", "https://arm.example"),
        Err(CloudConfigError::ConfigNotFound)
    );
}

#[test]
fn custom_table_resolves_its_own_entries() {
    let table = CloudEnvironments::new().with(
        "azurestackcloud",
        CloudConfiguration::new("https://login.stack.example/").with_service(
            ServiceName::ResourceManager,
            "https://management.stack.example",
            "https://management.stack.example/audience",
        ),
    );

    let cfg = table.resolve("AzureStackCloud", "https://arm.local").unwrap();
    assert_eq!(cfg.resource_manager().unwrap().endpoint, "https://arm.local");
    assert_eq!(
        table.resolve("", ""),
        Err(CloudConfigError::ConfigNotFound)
    );
}
