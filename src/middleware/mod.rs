pub mod basic_auth;
pub mod error;
pub mod response;
pub mod traits;

use bytes::Bytes;
use http_body_util::Full;

/// 미들웨어가 다루는 요청 타입
pub type Request = hyper::Request<Full<Bytes>>;

/// 미들웨어가 다루는 응답 타입
pub type Response = hyper::Response<Full<Bytes>>;

pub use basic_auth::{AuthHooks, BasicAuthConfig, BasicAuthMiddleware, StaticAuthenticator};
pub use error::MiddlewareError;
pub use response::handle_middleware_error;
pub use traits::Chain;
