use std::collections::HashMap;
use async_trait::async_trait;
use super::config::BasicAuthConfig;
use super::hooks::AuthHooks;

/// 설정의 사용자 맵 기반 인증기
///
/// # 지원하는 해시 알고리즘
/// - bcrypt ($2a$, $2b$, $2y$ 접두사)
pub struct StaticAuthenticator {
    users: HashMap<String, String>,
}

impl StaticAuthenticator {
    pub fn new(config: &BasicAuthConfig) -> Self {
        Self {
            users: config.users.clone(),
        }
    }
}

#[async_trait]
impl AuthHooks for StaticAuthenticator {
    async fn authenticate(&self, user: &str, password: &str, _raw_pair: &str) -> bool {
        self.users
            .get(user)
            .map(|hash| verify_password(password, hash))
            .unwrap_or(false)
    }
}

/// 비밀번호 검증 함수
fn verify_password(password: &str, hash: &str) -> bool {
    if hash.starts_with("$2") {
        bcrypt::verify(password, hash).unwrap_or(false)
    } else {
        // bcrypt가 아닌 해시는 지원하지 않음
        false
    }
}
