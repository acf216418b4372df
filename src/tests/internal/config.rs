use crate::WebDavSession;
use crate::auth::Credentials;
use crate::config::{ClientConfig, Protocol, check_port_number};
use crate::error::{ConfigError, WebDavError};

#[test]
fn port_bounds() {
    assert_eq!(check_port_number(1), Ok(1));
    assert_eq!(check_port_number(65535), Ok(65535));
    assert_eq!(check_port_number(" 8080 "), Ok(8080));

    assert_eq!(check_port_number(0), Err(ConfigError::BadPortNumber(0)));
    assert_eq!(check_port_number(65536), Err(ConfigError::BadPortNumber(65536)));
    assert_eq!(check_port_number(-1), Err(ConfigError::BadPortNumber(-1)));
}

#[test]
fn port_must_be_numeric() {
    assert_eq!(
        check_port_number("http"),
        Err(ConfigError::NotNumber("http".to_string()))
    );
    assert!(matches!(check_port_number("80.5"), Err(ConfigError::NotNumber(_))));
}

#[test]
fn https_defaults_to_443() {
    let config = ClientConfig::new("host").protocol("https");

    assert_eq!(config.resolve_protocol(), Ok(Protocol::Https));
    assert_eq!(config.resolve_port(), Ok(443));
    assert_eq!(config.base_url().unwrap(), "https://host:443");

    let session = WebDavSession::new(config).unwrap();
    assert_eq!(session.base_url(), "https://host:443");
    assert_eq!(session.current_working_directory(), "/");
}

#[test]
fn http_defaults_to_80_and_appends_path() {
    let config = ClientConfig::new("host").path("remote.php/dav");
    assert_eq!(config.base_url().unwrap(), "http://host:80/remote.php/dav");
}

#[test]
fn explicit_port_wins() {
    let config = ClientConfig::new("host").protocol("https").port(8443);
    assert_eq!(config.base_url().unwrap(), "https://host:8443");
}

#[test]
fn unknown_protocol_is_rejected() {
    let config = ClientConfig::new("host").protocol("ftp");
    assert_eq!(
        config.resolve_port(),
        Err(ConfigError::CouldNotDetermineProtocol { protocol: "ftp".to_string() })
    );

    let err = WebDavSession::new(config).unwrap_err();
    assert!(matches!(
        err,
        WebDavError::InvalidConfiguration(ConfigError::CouldNotDetermineProtocol { .. })
    ));
}

#[test]
fn bad_port_fails_session_construction() {
    let err = WebDavSession::new(ClientConfig::new("host").port(70000)).unwrap_err();
    assert!(matches!(
        err,
        WebDavError::InvalidConfiguration(ConfigError::BadPortNumber(70000))
    ));

    let err = WebDavSession::new(ClientConfig::new("host").port("eighty")).unwrap_err();
    assert!(matches!(
        err,
        WebDavError::InvalidConfiguration(ConfigError::NotNumber(_))
    ));
}

#[test]
fn deserializes_port_as_number_or_text() {
    let config: ClientConfig =
        serde_json::from_str(r#"{ "host": "h", "port": 8080, "protocol": "https" }"#)
            .unwrap();
    assert_eq!(config.base_url().unwrap(), "https://h:8080");
    assert!(config.verify_ssl);

    let config: ClientConfig =
        serde_json::from_str(r#"{ "host": "h", "port": "abc" }"#).unwrap();
    assert!(matches!(config.resolve_port(), Err(ConfigError::NotNumber(_))));

    let config: ClientConfig = serde_json::from_str(r#"{ "host": "h" }"#).unwrap();
    assert_eq!(config.base_url().unwrap(), "http://h:80");
}

#[test]
fn auth_takes_precedence_over_username() {
    let bearer = Credentials::Bearer("token".to_string());
    let config = ClientConfig::new("h")
        .credentials("user", "pass")
        .auth(bearer.clone());
    assert_eq!(config.effective_credentials(), Some(bearer));

    let config = ClientConfig::new("h").credentials("user", "pass");
    assert_eq!(
        config.effective_credentials(),
        Some(Credentials::Basic {
            username: "user".to_string(),
            password: "pass".to_string(),
        })
    );

    // 只有账号没有密码时不发送认证
    let config = ClientConfig::new("h").credentials("user", "");
    assert_eq!(config.effective_credentials(), None);
}

#[test]
fn debug_hides_secrets() {
    let config = ClientConfig::new("h").auth(Credentials::Basic {
        username: "user".to_string(),
        password: "s3cret".to_string(),
    });
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("s3cret"));

    let session = WebDavSession::new(config).unwrap();
    assert!(!format!("{:?}", session).contains("s3cret"));
}

#[test]
fn sessions_with_same_credentials_compare_equal() {
    let a = WebDavSession::new(ClientConfig::new("a").credentials("u", "p")).unwrap();
    let b = WebDavSession::new(ClientConfig::new("b").credentials("u", "p")).unwrap();
    let c = WebDavSession::new(ClientConfig::new("a").credentials("u", "q")).unwrap();

    assert!(a.auth.eq_only_token(&b.auth));
    assert!(!a.auth.eq_only_token(&c.auth));
}

#[test]
fn missing_certificate_file_is_reported() {
    let config = ClientConfig::new("h").cert("/nonexistent/client.pem");
    let err = WebDavSession::new(config).unwrap_err();
    assert!(matches!(err, WebDavError::ReadCertificate(_)));
}
