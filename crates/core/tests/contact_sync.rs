//! Contact sync against the member list.

mod support;

use responsys_core::{ContactSyncService, LocalContact, ResponsysClient};
use responsys_domain::{ResponsysConfig, ResponsysError};
use serde_json::json;
use support::{credentials, FakeTransport};

fn config() -> ResponsysConfig {
    ResponsysConfig::with_credentials("api_user", "s3cret")
}

fn contact(id: usize, welcome: bool) -> LocalContact {
    LocalContact::new()
        .with_attribute("apparel21_person_id", format!("P{id}"))
        .with_attribute("email", format!("user{id}@example.com"))
        .with_attribute("firstname", "Jo")
        .with_welcome(welcome)
}

#[test]
fn disabled_integration_sends_nothing() {
    let transport = FakeTransport::new();
    let mut client = ResponsysClient::new(credentials(), transport.clone());
    let config = ResponsysConfig { enabled: false, ..config() };

    let report = ContactSyncService::new(&config).sync(&mut client, &[contact(1, true)]).unwrap();

    assert!(report.skipped);
    assert_eq!(report.contacts, 1);
    assert!(transport.calls().is_empty());
}

#[test]
fn merges_into_member_list_on_key_column() {
    let transport = FakeTransport::new();
    transport.respond("mergeListMembers", json!({"result": {"insertCount": "1", "updateCount": "1"}}));
    let mut client = ResponsysClient::new(credentials(), transport.clone());

    let report = ContactSyncService::new(&config())
        .sync(&mut client, &[contact(1, false), contact(2, false)])
        .unwrap();

    assert_eq!(report.inserted, 1);
    assert_eq!(report.updated, 1);
    assert_eq!(transport.count("triggerCustomEvent"), 0);

    let payload = &transport.calls_to("mergeListMembers")[0].payload;
    assert_eq!(payload["list"], json!({"folderName": "!MasterData", "objectName": "METALICUS_LIST"}));
    assert_eq!(payload["mergeRule"]["matchColumnName1"], json!("CUSTOMER_ID_"));
    assert_eq!(
        payload["recordData"]["fieldNames"],
        json!(["CUSTOMER_ID_", "EMAIL_ADDRESS_", "FIRST_NAME", "LAST_NAME", "EMAIL_PERMISSION_STATUS_"])
    );
    assert_eq!(
        payload["recordData"]["records"][0]["fieldValues"],
        json!(["P1", "user1@example.com", "Jo", null, "I"])
    );
}

#[test]
fn welcomes_flagged_contacts_with_email() {
    let transport = FakeTransport::new();
    transport.respond("mergeListMembers", json!({"result": {"insertCount": "3"}}));
    transport.respond("triggerCustomEvent", json!({"result": {"success": "true"}}));
    let mut client = ResponsysClient::new(credentials(), transport.clone());
    let no_email = LocalContact::new().with_attribute("apparel21_person_id", "P9").with_welcome(true);

    let report = ContactSyncService::new(&config())
        .sync(&mut client, &[contact(1, true), contact(2, false), no_email])
        .unwrap();

    assert_eq!(report.welcomed, 1);
    assert_eq!(report.welcome_failures, 0);

    let payload = &transport.calls_to("triggerCustomEvent")[0].payload;
    assert_eq!(payload["customEvent"]["eventName"], json!("onlinesignup"));
    assert_eq!(payload["recipientData"].as_array().map(Vec::len), Some(1));
    assert_eq!(payload["recipientData"][0]["recipient"]["emailAddress"], json!("user1@example.com"));
    assert_eq!(
        payload["recipientData"][0]["recipient"]["listName"],
        json!({"folderName": "_Programs", "objectName": "METALICUS_LIST"})
    );
}

#[test]
fn splits_work_into_calls_of_two_hundred() {
    let transport = FakeTransport::new();
    let mut client = ResponsysClient::new(credentials(), transport.clone());
    let contacts: Vec<LocalContact> = (0..450).map(|i| contact(i, i % 2 == 0)).collect();

    transport.respond("mergeListMembers", json!({"result": {"insertCount": "200"}}));
    transport.respond("mergeListMembers", json!({"result": {"insertCount": "200"}}));
    transport.respond("mergeListMembers", json!({"result": {"insertCount": "50"}}));
    transport.respond("triggerCustomEvent", json!({"result": ""}));
    transport.respond("triggerCustomEvent", json!({"result": ""}));

    let report = ContactSyncService::new(&config()).sync(&mut client, &contacts).unwrap();

    assert_eq!(report.inserted, 450);
    let merge_sizes: Vec<usize> = transport
        .calls_to("mergeListMembers")
        .iter()
        .map(|call| call.payload["recordData"]["records"].as_array().map_or(0, Vec::len))
        .collect();
    assert_eq!(merge_sizes, vec![200, 200, 50]);

    let trigger_sizes: Vec<usize> = transport
        .calls_to("triggerCustomEvent")
        .iter()
        .map(|call| call.payload["recipientData"].as_array().map_or(0, Vec::len))
        .collect();
    assert_eq!(trigger_sizes, vec![200, 25]);
}

#[test]
fn unmapped_key_attribute_is_a_config_error() {
    let transport = FakeTransport::new();
    let mut client = ResponsysClient::new(credentials(), transport.clone());
    let mut config = config();
    config.mapping.key_attribute = "loyalty_id".into();

    let result = ContactSyncService::new(&config).sync(&mut client, &[contact(1, false)]);

    assert!(matches!(result, Err(ResponsysError::Config(_))));
    assert!(transport.calls().is_empty());
}
