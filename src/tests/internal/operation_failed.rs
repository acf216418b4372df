use crate::error::OperationFailed;
use crate::webdav::enums::{ExpectedStatus, WebDavMethod, reason_phrase};

#[test]
fn every_method_has_an_operation_name() {
    let table = [
        (WebDavMethod::HEAD, "get header"),
        (WebDavMethod::GET, "download"),
        (WebDavMethod::PUT, "upload"),
        (WebDavMethod::DELETE, "delete"),
        (WebDavMethod::MKCOL, "create directory"),
        (WebDavMethod::PROPFIND, "list directory"),
    ];

    for (method, name) in table {
        assert_eq!(method.operation_name(), name);
        assert_eq!(method.to_request_method().as_str(), method.as_str());
    }
}

#[test]
fn expected_status_membership() {
    let single = ExpectedStatus::Single(201);
    assert!(single.contains(201));
    assert!(!single.contains(200));

    let set = ExpectedStatus::Set(&[200, 204]);
    assert!(set.contains(200));
    assert!(set.contains(204));
    assert!(!set.contains(404));
    assert_eq!(set.codes(), &[200, 204]);
}

#[test]
fn unknown_codes_render_as_unknown() {
    assert_eq!(reason_phrase(207), "Multi-Status");
    assert_eq!(reason_phrase(599), "UNKNOWN");
}

#[test]
fn message_carries_all_diagnostics() {
    let failed = OperationFailed::new(
        WebDavMethod::MKCOL,
        "a/b",
        ExpectedStatus::Set(&[201, 405]),
        409,
    );

    assert_eq!(failed.reason(), "Failed to create directory \"a/b\"");

    let message = failed.to_string();
    assert!(message.starts_with("Failed to create directory \"a/b\"."));
    assert!(message.contains("Operation     :  MKCOL a/b"));
    assert!(message.contains("Expected code :  201 Created, 405 Method Not Allowed"));
    assert!(message.contains("Actual code   :  409 Conflict"));
}
