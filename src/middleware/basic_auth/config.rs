use std::collections::HashMap;
use serde::Deserialize;

/// Basic 인증 설정
#[derive(Debug, Clone, Deserialize)]
pub struct BasicAuthConfig {
    /// 사용자 이름과 해시된 비밀번호 맵
    #[serde(default)]
    pub users: HashMap<String, String>,

    /// 인증 영역 (realm)
    #[serde(default = "default_realm")]
    pub realm: String,
}

fn default_realm() -> String {
    "Restricted Area".to_string()
}

impl Default for BasicAuthConfig {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            realm: default_realm(),
        }
    }
}

impl BasicAuthConfig {
    /// TOML 설정에서 Basic 인증 설정을 파싱합니다.
    pub fn from_toml(config: &str) -> Result<Self, toml::de::Error> {
        #[derive(Deserialize)]
        struct Config {
            #[serde(rename = "basic-auth")]
            basic_auth: BasicAuthConfig,
        }

        let config: Config = toml::from_str(config)?;
        Ok(config.basic_auth)
    }
}
