use viacaa::{is_caa_tag, is_caa_value, IodefValue, IssueValue, Parameter, Property};

// Property tags and values of the example records in RFC 6844, §5, and
// RFC 8659, §4.

const RECORDS: &[(&str, &str)] = &[
    ("issue", "ca.example.net"),
    ("issue", "ca.example.net; account=230123"),
    ("issue", "ca.example.net; policy=ev"),
    ("issue", "ca1.example.net"),
    ("issue", "ca2.example.org"),
    ("issue", ";"),
    ("issuewild", ";"),
    ("iodef", "mailto:security@example.com"),
    ("iodef", "http://iodef.example.com/"),
];

#[test]
fn rfc_example_records_ok() {
    let _ = tracing_subscriber::fmt::try_init();

    for &(tag, value) in RECORDS {
        assert!(is_caa_tag(tag).is_some(), "tag {tag}");
        assert!(is_caa_value(tag, value).is_some(), "{tag} {value}");
    }
}

#[test]
fn rfc_example_records_parsed() {
    let _ = tracing_subscriber::fmt::try_init();

    let value = IssueValue::parse("ca.example.net; account=230123").unwrap();
    assert_eq!(value.issuer, Some("ca.example.net"));
    assert_eq!(
        value.parameters,
        [Parameter { tag: "account", value: "230123" }]
    );

    assert!(IssueValue::parse(";").unwrap().forbids_issuance());

    assert_eq!(
        IodefValue::parse("mailto:security@example.com"),
        Ok(IodefValue::Mailto("security@example.com".into()))
    );
    assert!(matches!(
        IodefValue::parse("http://iodef.example.com/"),
        Ok(IodefValue::Url(url)) if url.host_str() == Some("iodef.example.com")
    ));

    assert!("IODEF".parse::<Property>().is_ok());
}

#[test]
fn rfc_malformed_records() {
    let _ = tracing_subscriber::fmt::try_init();

    // RFC 8659, §4.2: malformed issue value
    assert_eq!(is_caa_value("issue", "%%%%%"), None);

    // RFC 6844, §5.1: unknown critical property
    assert_eq!(is_caa_tag("tbs"), None);
    assert_eq!(is_caa_value("tbs", "Unknown"), None);
}
