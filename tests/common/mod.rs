use swish_client::SwishClient;
use wiremock::MockServer;

pub const PAYEE_ALIAS: &str = "1231181189";
pub const PAYER_ALIAS: &str = "46701234567";

pub fn api_base(server: &MockServer) -> String {
    format!("{}/api/v1/", server.uri())
}

pub fn client_for(server: &MockServer) -> SwishClient {
    SwishClient::new(PAYEE_ALIAS, None, Some(&api_base(server))).unwrap()
}

pub fn location(server: &MockServer, resource: &str, id: &str) -> String {
    format!("{}/api/v1/{}/{}", server.uri(), resource, id)
}
