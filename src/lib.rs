//! HTTP Basic 인증 핸드셰이크를 구현하는 미들웨어 크레이트입니다.
//!
//! # 주요 기능
//!
//! - RFC 7617 Basic 인증 핸드셰이크 (401 챌린지, 400/403 거부, 체인 전달)
//! - 판정 하나와 라이프사이클 훅 네 개를 외부에 위임하는 `AuthHooks` 시임
//! - 설정의 사용자 맵과 bcrypt 해시 기반의 기본 인증기
//!
//! # 예제
//!
//! ```
//! use http_basic_auth::middleware::{BasicAuthConfig, BasicAuthMiddleware, StaticAuthenticator};
//! use http_body_util::Full;
//! use bytes::Bytes;
//!
//! let config = BasicAuthConfig {
//!     realm: "Private".to_string(),
//!     ..Default::default()
//! };
//! let hooks = Box::new(StaticAuthenticator::new(&config));
//! let auth = BasicAuthMiddleware::new(config, hooks).unwrap();
//!
//! // 헤더가 없는 요청에는 401 챌린지로 응답
//! let mut res = hyper::Response::new(Full::new(Bytes::new()));
//! auth.issue_challenge(&mut res);
//! assert_eq!(res.status(), hyper::StatusCode::UNAUTHORIZED);
//! assert_eq!(
//!     res.headers()[hyper::header::WWW_AUTHENTICATE],
//!     "Basic realm=\"Private\""
//! );
//! ```
//!
//! # 설정
//!
//! ```
//! use http_basic_auth::middleware::BasicAuthConfig;
//!
//! let config = BasicAuthConfig::from_toml(r#"
//!     [basic-auth]
//!     realm = "Private"
//! "#).unwrap();
//! assert_eq!(config.realm, "Private");
//! ```

pub mod logging;
pub mod middleware;
