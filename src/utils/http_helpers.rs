use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// A general purpose HTTP error type that can be converted into an `IntoResponse`.
///
/// The body is the message as plain text, terminated by a newline.
#[derive(Debug)]
pub struct HTTPError {
    status: StatusCode,
    message: String,
    allow: Option<&'static str>,
}

impl HTTPError {
    /// Creates a new HTTP error with the given status code and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        HTTPError {
            status,
            message: message.into(),
            allow: None,
        }
    }

    /// A 400 carrying the decoder's own message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "404 page not found")
    }

    /// A 405 advertising the permitted methods in the `Allow` header.
    pub fn method_not_allowed(allow: &'static str) -> Self {
        HTTPError {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: "Method Not Allowed".to_string(),
            allow: Some(allow),
        }
    }
}

/// Converts our `HTTPError` into an HTTP response.
impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self.message),
        )
            .into_response();
        if let Some(allow) = self.allow {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static(allow));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_is_plain_text() {
        let response = HTTPError::bad_request("EOF while parsing a value").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert!(response.headers().get(ALLOW).is_none());
        assert_eq!(body_text(response).await, "EOF while parsing a value\n");
    }

    #[tokio::test]
    async fn test_method_not_allowed_sets_allow_header() {
        let response = HTTPError::method_not_allowed("GET, POST").into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(ALLOW).unwrap(), "GET, POST");
        assert_eq!(body_text(response).await, "Method Not Allowed\n");
    }

    #[tokio::test]
    async fn test_not_found_message() {
        let response = HTTPError::not_found().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "404 page not found\n");
    }
}
