use hyper::{Response, StatusCode};
use http_body_util::Full;
use bytes::Bytes;
use super::MiddlewareError;

/// 미들웨어 에러를 HTTP 응답으로 변환합니다.
///
/// 디코딩 실패는 미들웨어 안에서 흡수되지 않고 에러로 올라오므로
/// 여기서 500 계열로 매핑됩니다.
pub fn handle_middleware_error(err: MiddlewareError) -> Response<Full<Bytes>> {
    let status = match &err {
        MiddlewareError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MiddlewareError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MiddlewareError::Utf8(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MiddlewareError::Hook { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        MiddlewareError::Hyper(_) => StatusCode::BAD_GATEWAY,
    };

    Response::builder()
        .status(status)
        .body(Full::new(Bytes::from(err.to_string())))
        .unwrap_or_else(|_| {
            Response::new(Full::new(Bytes::from("Internal Server Error")))
        })
}
