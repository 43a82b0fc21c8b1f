use dburl::{parse, ClusterUrl, ConfigValue, ParseError};

#[test]
fn test_multi_host_becomes_sequence() {
    let config = parse("mongodb://user:pw@h1:27017,h2:27018/admindb").unwrap();
    assert_eq!(config.driver(), "mongodb");
    assert_eq!(config.get_str("database"), Some("admindb"));
    assert_eq!(config.get_str("user"), Some("user"));
    assert_eq!(config.get_str("password"), Some("pw"));
    assert_eq!(
        config.get("host").and_then(ConfigValue::as_seq),
        Some(&["h1:27017".to_string(), "h2:27018".to_string()][..])
    );
    assert!(!config.contains("port"));
}

#[test]
fn test_single_host_stays_scalar() {
    let config = parse("mongodb://h1:27017/db").unwrap();
    assert_eq!(config.get_str("host"), Some("h1"));
    assert_eq!(config.get_str("port"), Some("27017"));
    assert_eq!(config.get_str("database"), Some("db"));
}

#[test]
fn test_single_host_without_port_omits_port() {
    let config = parse("mongodb://localhost/db").unwrap();
    assert_eq!(config.get_str("host"), Some("localhost"));
    assert!(!config.contains("port"));
}

#[test]
fn test_mixed_port_presence_in_host_list() {
    let config = parse("mongodb://h1:27017,h2/db").unwrap();
    assert_eq!(
        config.get("host").and_then(ConfigValue::as_seq),
        Some(&["h1:27017".to_string(), "h2".to_string()][..])
    );
}

#[test]
fn test_query_parameters_are_discarded() {
    // Connection options belong to the cluster grammar, not the mapping.
    let config = parse("mongodb://u:p@h1:27017,h2:27018/db?replicaSet=rs0&w=majority").unwrap();
    assert!(!config.contains("replicaSet"));
    assert!(!config.contains("w"));
    assert_eq!(config.get_str("database"), Some("db"));
}

#[test]
fn test_credentials_omitted_when_absent() {
    let config = parse("mongodb://h1:27017,h2:27018/db").unwrap();
    assert!(!config.contains("user"));
    assert!(!config.contains("password"));
}

#[test]
fn test_invalid_cluster_url_propagates() {
    let err = parse("mongodb://h1:notaport/db").unwrap_err();
    assert!(matches!(err, ParseError::InvalidClusterUrl { .. }));

    assert!(parse("mongodb://").is_err());
}

#[test]
fn test_cluster_url_exposes_collaborator_shape() {
    let cluster = ClusterUrl::parse("mongodb://user@h1,h2:27018/db").unwrap();
    assert_eq!(cluster.username.as_deref(), Some("user"));
    assert_eq!(cluster.password, None);
    assert_eq!(cluster.hosts[0].port, None);
    assert_eq!(cluster.hosts[1].port, Some(27018));
    assert_eq!(cluster.database, "db");
}

#[test]
fn test_error_message_names_the_problem() {
    let err = parse("mongodb://h1:70000/db").unwrap_err();
    assert!(err.to_string().starts_with("invalid cluster connection string"));
}
