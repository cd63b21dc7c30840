use saffron_admin::{
    api::AdminClient,
    config::Config,
    listing::{FetchState, RemoteListing},
    records::UserRecord,
    validation::{FundsRequest, LoginRequest},
    Error,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one HTTP response and hand back the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/api", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&raw).into_owned()
    });

    (base, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn client_for(base: &str) -> AdminClient {
    let config = Config {
        api_base_url: base.to_string(),
        request_timeout_secs: 5,
        ..Config::default()
    };
    AdminClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_list_users_sends_bearer_token() {
    let (base, server) = serve_once(
        "200 OK",
        r#"[{"_id":"65f1c0a9e4b0d2a1b3c4d5e6","fullName":"Rohit Sharma","phone":"9876543210","money":1520.5,"totalBets":3,"createdAt":"2025-03-05T10:15:00Z"}]"#,
    )
    .await;
    let client = client_for(&base).with_token(Some("jwt-abc".to_string()));

    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].full_name, "Rohit Sharma");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/users HTTP/1.1"));
    assert!(request.to_lowercase().contains("authorization: bearer jwt-abc"));
}

#[tokio::test]
async fn test_add_money_surfaces_server_message() {
    let (base, server) = serve_once("400 Bad Request", r#"{"message":"User not found"}"#).await;
    let client = client_for(&base);
    let request = FundsRequest::new("9876543210", "250").unwrap();

    let err = client.add_money(&request).await.unwrap_err();
    assert_eq!(err.display_message(), "User not found");

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /api/users/add-money"));
    assert!(raw.contains(r#""phone":"9876543210""#));
    assert!(raw.contains(r#""amount":250.0"#));
}

#[tokio::test]
async fn test_add_money_receipt() {
    let (base, _server) = serve_once(
        "200 OK",
        r#"{"message":"Money added successfully","newBalance":1750.5}"#,
    )
    .await;
    let client = client_for(&base);
    let request = FundsRequest::new("9876543210", "250").unwrap();

    let receipt = client.add_money(&request).await.unwrap();
    assert_eq!(receipt.amount, 250.0);
    assert_eq!(receipt.new_balance, 1750.5);
    assert_eq!(receipt.phone, "9876543210");
}

#[tokio::test]
async fn test_error_field_preferred_over_fallback() {
    let (base, _server) = serve_once("500 Internal Server Error", r#"{"error":"Database unavailable"}"#).await;
    let client = client_for(&base);

    let err = client.account_history().await.unwrap_err();
    assert!(matches!(err, Error::Api(ref m) if m == "Database unavailable"));
}

#[tokio::test]
async fn test_users_fallback_message_on_empty_error_body() {
    let (base, _server) = serve_once("503 Service Unavailable", "").await;
    let client = client_for(&base);

    let err = client.list_users().await.unwrap_err();
    assert_eq!(err.display_message(), "Failed to fetch users");
}

#[tokio::test]
async fn test_login_returns_token() {
    let (base, server) = serve_once("200 OK", r#"{"token":"jwt-xyz"}"#).await;
    let client = client_for(&base);
    let request = LoginRequest::new("9876543210", "secret").unwrap();

    let token = client.login(&request).await.unwrap();
    assert_eq!(token, "jwt-xyz");
    assert!(server.await.unwrap().starts_with("POST /api/login"));
}

#[tokio::test]
async fn test_login_without_token_is_auth_error() {
    let (base, _server) = serve_once("200 OK", r#"{"message":"ok"}"#).await;
    let client = client_for(&base);
    let request = LoginRequest::new("9876543210", "secret").unwrap();

    assert!(matches!(client.login(&request).await, Err(Error::Auth(_))));
}

#[tokio::test]
async fn test_users_fetch_failure_then_retry() {
    // Reserve a port and close it so the first fetch cannot connect.
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_base = format!("http://{}/api", closed.local_addr().unwrap());
    drop(closed);

    let mut remote: RemoteListing<UserRecord> = RemoteListing::new(12);
    assert!(remote.start_fetch());
    remote.finish_fetch(client_for(&dead_base).list_users().await);
    assert!(matches!(remote.state(), FetchState::Failed(_)));

    let (base, _server) = serve_once(
        "200 OK",
        r#"[{"_id":"a1","fullName":"Rohit","phone":"9876543210","createdAt":"2025-03-05T10:15:00Z"}]"#,
    )
    .await;
    assert!(remote.retry());
    assert!(remote.state().is_loading());
    remote.finish_fetch(client_for(&base).list_users().await);

    assert_eq!(remote.state(), &FetchState::Ready);
    assert_eq!(remote.listing.records().len(), 1);
}
