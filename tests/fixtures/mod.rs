//! Shared event builders for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};

use api_event_handler::{Dispatcher, InvocationMeta, ResponseEnvelope};

pub const SECURITY_HEADERS: [(&str, &str); 7] = [
    ("Content-Type", "application/json"),
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "DENY"),
    ("X-XSS-Protection", "1; mode=block"),
    (
        "Strict-Transport-Security",
        "max-age=31536000; includeSubDomains",
    ),
    ("Cache-Control", "no-store, no-cache, must-revalidate"),
    ("Pragma", "no-cache"),
];

pub fn invocation() -> InvocationMeta {
    InvocationMeta::new("test-request-id", "api-event-handler")
        .with_function_version("42")
        .with_function_arn("arn:aws:lambda:us-east-1:123456789012:function:api-event-handler")
}

/// Gateway payload with the usual request context filled in
pub fn gateway_event(method: &str, path: &str) -> Value {
    json!({
        "version": "2.0",
        "routeKey": "$default",
        "rawPath": path,
        "rawQueryString": "",
        "headers": {
            "accept": "application/json",
            "authorization": "Bearer secret-token",
            "content-type": "application/json",
            "user-agent": "integration-test"
        },
        "isBase64Encoded": false,
        "requestContext": {
            "accountId": "123456789012",
            "apiId": "test-api",
            "domainName": "test-api.execute-api.us-east-1.amazonaws.com",
            "stage": "$default",
            "requestId": "gateway-request-id",
            "time": "01/May/2024:12:00:00 +0000",
            "timeEpoch": 1714564800000_i64,
            "http": {
                "method": method,
                "path": path,
                "protocol": "HTTP/1.1",
                "sourceIp": "203.0.113.10",
                "userAgent": "integration-test"
            }
        }
    })
}

pub fn with_field(mut event: Value, key: &str, value: Value) -> Value {
    event[key] = value;
    event
}

/// Run a payload through a default dispatcher and decode the body
pub fn dispatch(event: Value) -> (ResponseEnvelope, Value) {
    let response = Dispatcher::default().handle_value(event, &invocation());
    let body = response
        .body_json()
        .expect("response body should be valid JSON");
    (response, body)
}

pub fn assert_security_headers(response: &ResponseEnvelope) {
    for (name, value) in SECURITY_HEADERS {
        assert_eq!(
            response.headers.get(name).map(String::as_str),
            Some(value),
            "missing or wrong header {}",
            name
        );
    }
}
