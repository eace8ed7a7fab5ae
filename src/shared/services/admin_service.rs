use serde::Serialize;
use serde_json::Value;

use super::transport::{DefaultTransport, HttpMethod, PreparedRequest, Transport};
use crate::config::ShellConfig;
use crate::shared::errors::Result;
use crate::shared::logging::{log_admin_request, log_admin_request_error};

/// CRUD client for the single admin resource.
///
/// Each call sends exactly one request: GET for `query`, POST for
/// `create`, DELETE for `remove`, PUT for `update`. Nothing is retried.
#[derive(Debug, Clone)]
pub struct AdminService<T = DefaultTransport> {
    url: String,
    transport: T,
}

impl AdminService<DefaultTransport> {
    pub fn new(config: &ShellConfig) -> Self {
        Self::with_transport(config.admin_url(), DefaultTransport::default())
    }
}

impl Default for AdminService<DefaultTransport> {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}

impl<T: Transport> AdminService<T> {
    pub fn with_transport(url: impl Into<String>, transport: T) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }

    pub async fn query<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        self.request(HttpMethod::Get, params).await
    }

    pub async fn create<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        self.request(HttpMethod::Post, params).await
    }

    pub async fn remove<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        self.request(HttpMethod::Delete, params).await
    }

    pub async fn update<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        self.request(HttpMethod::Put, params).await
    }

    async fn request<P: Serialize + ?Sized>(&self, method: HttpMethod, params: &P) -> Result<Value> {
        let request = prepare_request(&self.url, method, params)?;
        log_admin_request(method.as_str(), &request.url);

        match self.transport.send(&request).await {
            Ok(body) => Ok(parse_body(&body)),
            Err(e) => {
                log_admin_request_error(method.as_str(), &request.url, &e.to_string());
                Err(e)
            }
        }
    }
}

/// Build the request for `method`: GET params go into the query string,
/// every other verb sends them as a JSON body.
pub fn prepare_request<P: Serialize + ?Sized>(
    url: &str,
    method: HttpMethod,
    params: &P,
) -> Result<PreparedRequest> {
    let value = serde_json::to_value(params)?;
    if method.is_write() {
        return Ok(PreparedRequest {
            method,
            url: url.to_string(),
            body: Some(serde_json::to_string(&value)?),
        });
    }

    let query = query_string(&value);
    let url = if query.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, query)
    };
    Ok(PreparedRequest {
        method,
        url,
        body: None,
    })
}

/// Encode the scalar fields of a JSON object as `key=value` pairs.
/// Nulls, arrays and nested objects are left out.
fn query_string(value: &Value) -> String {
    let Value::Object(fields) = value else {
        return String::new();
    };
    fields
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&text)
            ))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Raw response body: JSON when it parses, text otherwise, null when empty
fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    /// Records every request and answers with a canned result
    struct RecordingTransport {
        sent: RefCell<Vec<PreparedRequest>>,
        reply: std::result::Result<String, u16>,
    }

    impl RecordingTransport {
        fn ok(body: &str) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                reply: Ok(body.to_string()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                reply: Err(status),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for RecordingTransport {
        async fn send(&self, request: &PreparedRequest) -> Result<String> {
            self.sent.borrow_mut().push(request.clone());
            match &self.reply {
                Ok(body) => Ok(body.clone()),
                Err(status) => Err(AppError::Status {
                    status: *status,
                    status_text: "Internal Server Error".to_string(),
                }),
            }
        }
    }

    fn service(transport: RecordingTransport) -> AdminService<RecordingTransport> {
        AdminService::with_transport("http://localhost/api/admin", transport)
    }

    #[test]
    fn test_each_operation_uses_its_verb_once() {
        let admin = service(RecordingTransport::ok("{}"));
        let params = json!({ "key": 1 });

        block_on(admin.query(&params)).unwrap();
        block_on(admin.create(&params)).unwrap();
        block_on(admin.remove(&params)).unwrap();
        block_on(admin.update(&params)).unwrap();

        let methods: Vec<HttpMethod> = admin.transport.sent.borrow().iter().map(|r| r.method).collect();
        assert_eq!(
            methods,
            vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Delete, HttpMethod::Put]
        );
        assert!(!HttpMethod::Get.is_write());
    }

    #[test]
    fn test_query_encodes_params_in_url() {
        let admin = service(RecordingTransport::ok(r#"{"list":[]}"#));
        let body = block_on(admin.query(&json!({
            "currentPage": 2,
            "desc": "a b&c",
            "filters": ["x"],
            "owner": null,
        })))
        .unwrap();

        assert_eq!(body, json!({ "list": [] }));
        let sent = admin.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].url,
            "http://localhost/api/admin?currentPage=2&desc=a%20b%26c"
        );
        assert!(sent[0].body.is_none());
    }

    #[test]
    fn test_write_operations_send_json_body() {
        let admin = service(RecordingTransport::ok(""));
        let body = block_on(admin.create(&json!({ "desc": "new rule" }))).unwrap();

        assert_eq!(body, Value::Null);
        let sent = admin.transport.sent.borrow();
        assert_eq!(sent[0].url, "http://localhost/api/admin");
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"desc":"new rule"}"#));
    }

    #[test]
    fn test_failure_is_not_retried() {
        let admin = service(RecordingTransport::failing(500));
        let err = block_on(admin.update(&json!({ "key": 7 }))).unwrap_err();

        assert!(err.is_status());
        assert_eq!(admin.transport.sent.borrow().len(), 1);
    }

    #[test]
    fn test_non_json_body_is_returned_as_text() {
        assert_eq!(parse_body("ok"), Value::String("ok".to_string()));
        assert_eq!(parse_body("  "), Value::Null);
        assert_eq!(parse_body("[1]"), json!([1]));
    }
}
