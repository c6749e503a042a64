//! Common utilities for integration tests

use crate::*;

/// Start a mock server and a client whose hosts both point at it
pub async fn create_test_environment() -> (ServerGuard, RegistryClient) {
    create_test_environment_with(HeaderConfig::default()).await
}

/// Same as [`create_test_environment`] with custom request headers
pub async fn create_test_environment_with(headers: HeaderConfig) -> (ServerGuard, RegistryClient) {
    let server = Server::new_async().await;
    let client = create_client(&server, headers);
    (server, client)
}

pub fn create_client(server: &ServerGuard, headers: HeaderConfig) -> RegistryClient {
    let url = server.url();
    let config = ClientConfig::new()
        .with_headers(headers)
        .with_hosts(HostConfig::new(&url, &url));
    RegistryClient::with_config(config).expect("Failed to create RegistryClient")
}

/// A `{success: true, data}` API body
pub fn envelope(data: Value) -> String {
    json!({ "success": true, "data": data }).to_string()
}

/// A `{success: false, error}` API body
pub fn failure(message: &str) -> String {
    json!({ "success": false, "error": message }).to_string()
}

/// A module entry as the API lists it
pub fn module_json(name: &str, stars: u64) -> Value {
    json!({
        "name": name,
        "description": format!("The {name} module"),
        "star_count": stars,
        "created_at": "2020-05-13T21:36:44.226Z"
    })
}
