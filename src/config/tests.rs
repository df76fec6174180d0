use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_listen_on_port_5000_with_docs_and_seed() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.addr.to_string(), "127.0.0.1:5000");
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert!(settings.docs.enabled);
    assert!(settings.store.seed);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);

    let err = Settings::from_raw(raw).expect_err("port zero");
    assert!(matches!(err, LoadError::Invalid { key: "server.port", .. }));
}

#[test]
fn unparseable_host_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.host = Some("not a host".to_string());

    let err = Settings::from_raw(raw).expect_err("bad host");
    assert!(matches!(err, LoadError::Invalid { key: "server.addr", .. }));
}

#[test]
fn unknown_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("bad level");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["masterblog"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_serve_arguments() {
    let args = CliArgs::parse_from([
        "masterblog",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--server-port",
        "8080",
        "--docs-enabled=false",
        "--store-seed",
        "no",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(serve.overrides.server_port, Some(8080));
            assert_eq!(serve.overrides.docs_enabled, Some(false));
            assert_eq!(serve.overrides.store_seed, Some(false));
        }
    }
}

#[test]
fn serve_overrides_disable_docs_and_seed() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        docs_enabled: Some(false),
        store_seed: Some(false),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(!settings.docs.enabled);
    assert!(!settings.store.seed);
}

fn env_source(vars: &[(&str, &str)]) -> Environment {
    let map = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<config::Map<String, String>>();
    environment().source(Some(map))
}

#[test]
fn environment_layer_overrides_defaults() {
    let args = CliArgs::parse_from(["masterblog"]);
    let env = env_source(&[
        ("MASTERBLOG__SERVER__PORT", "6123"),
        ("MASTERBLOG__DOCS__ENABLED", "false"),
        ("MASTERBLOG_CONFIG_FILE", "ignored.toml"),
    ]);

    let settings = load_from(&args, env).expect("valid settings");

    assert_eq!(settings.server.addr.to_string(), "127.0.0.1:6123");
    assert!(!settings.docs.enabled);
    assert!(settings.store.seed);
}

#[test]
fn cli_overrides_environment_layer() {
    let args = CliArgs::parse_from(["masterblog", "serve", "--server-port", "7000"]);
    let env = env_source(&[
        ("MASTERBLOG__SERVER__PORT", "6123"),
        ("MASTERBLOG__STORE__SEED", "false"),
    ]);

    let settings = load_from(&args, env).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 7000);
    assert!(!settings.store.seed);
}

#[test]
fn invalid_environment_value_is_rejected() {
    let args = CliArgs::parse_from(["masterblog"]);
    let env = env_source(&[("MASTERBLOG__SERVER__PORT", "not-a-port")]);

    assert!(load_from(&args, env).is_err());
}
