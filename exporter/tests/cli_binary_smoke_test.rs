use std::process::Command;

fn bin_path() -> &'static str {
    env!("CARGO_BIN_EXE_pingdom-exporter")
}

fn unique_test_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve test port");
    let port = listener
        .local_addr()
        .expect("failed to read test port")
        .port();
    drop(listener);
    port
}

#[test]
fn missing_token_exits_with_code_2_before_binding() {
    let port = unique_test_port();
    let output = Command::new(bin_path())
        .env_remove("PINGDOM_TOKEN")
        .env("PUBLISH_PORT", port.to_string())
        .output()
        .expect("failed to run pingdom-exporter");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("PINGDOM_TOKEN"),
        "error should name the variable: {stderr}"
    );

    // ポートは一度もバインドされていない
    std::net::TcpListener::bind(("127.0.0.1", port)).expect("port should still be free");
}

#[test]
fn missing_port_exits_with_code_2() {
    let output = Command::new(bin_path())
        .env("PINGDOM_TOKEN", "test-token")
        .env_remove("PUBLISH_PORT")
        .output()
        .expect("failed to run pingdom-exporter");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ERROR: Environment variable PUBLISH_PORT is not set"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn invalid_log_level_exits_with_code_2() {
    let output = Command::new(bin_path())
        .env("PINGDOM_TOKEN", "test-token")
        .env("PUBLISH_PORT", unique_test_port().to_string())
        .env("LOG_LEVEL", "chatty")
        .output()
        .expect("failed to run pingdom-exporter");

    assert_eq!(output.status.code(), Some(2));
}
