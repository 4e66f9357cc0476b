use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Authorization 헤더에서 추출한 자격증명
#[derive(Debug, PartialEq)]
pub(crate) struct Credentials {
    pub user: String,
    pub password: String,
    /// 디코딩된 "user:password" 원문
    pub raw: String,
}

/// 헤더 파싱 실패 분류
///
/// `Decode`/`Utf8`만 에러로 전파되고 나머지는 요청 거부로 끝납니다.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ParseError {
    #[error("헤더가 두 토큰이 아님")]
    MalformedHeader,

    #[error("Basic 이외의 인증 스킴")]
    WrongScheme,

    #[error("base64 디코딩 실패: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("UTF-8 변환 실패: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("user:password 형식이 아님")]
    MalformedPair,
}

/// Authorization 헤더 값을 자격증명으로 파싱합니다.
///
/// 값은 공백 하나로 구분된 `Basic <base64>` 두 토큰이어야 하고,
/// 스킴은 대소문자까지 정확히 일치해야 합니다.
pub(crate) fn parse_authorization(value: &str) -> Result<Credentials, ParseError> {
    let tokens: Vec<&str> = value.split(' ').collect();
    if tokens.len() != 2 {
        return Err(ParseError::MalformedHeader);
    }
    if tokens[0] != "Basic" {
        return Err(ParseError::WrongScheme);
    }

    let decoded = BASE64.decode(tokens[1])?;
    let raw = String::from_utf8(decoded)?;

    // 비밀번호 안의 ':'를 보존해야 하므로 첫 구분자에서만 나눈다
    let (user, password) = match raw.split_once(':') {
        Some((user, password)) => (user.to_string(), password.to_string()),
        None => return Err(ParseError::MalformedPair),
    };

    // 사용자나 비밀번호가 비어 있으면 자격증명으로 보지 않는다
    if user.is_empty() || password.is_empty() {
        return Err(ParseError::MalformedPair);
    }

    Ok(Credentials { user, password, raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_credentials() {
        // "user:pass" in base64
        let credentials = parse_authorization("Basic dXNlcjpwYXNz").unwrap();

        assert_eq!(credentials.user, "user");
        assert_eq!(credentials.password, "pass");
        assert_eq!(credentials.raw, "user:pass");
    }

    #[test]
    fn test_password_keeps_colons() {
        // "user:pa:ss" in base64
        let encoded = BASE64.encode("user:pa:ss");
        let credentials = parse_authorization(&format!("Basic {}", encoded)).unwrap();

        assert_eq!(credentials.user, "user");
        assert_eq!(credentials.password, "pa:ss");
        assert_eq!(credentials.raw, "user:pa:ss");
    }

    #[test]
    fn test_wrong_token_count() {
        assert!(matches!(
            parse_authorization("Basic"),
            Err(ParseError::MalformedHeader)
        ));
        assert!(matches!(
            parse_authorization("Basic dXNlcjpwYXNz extra"),
            Err(ParseError::MalformedHeader)
        ));
        assert!(matches!(
            // 공백 두 개는 세 토큰으로 나뉜다
            parse_authorization("Basic  dXNlcjpwYXNz"),
            Err(ParseError::MalformedHeader)
        ));
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert!(matches!(
            parse_authorization("Bearer abcd"),
            Err(ParseError::WrongScheme)
        ));
        assert!(matches!(
            parse_authorization("basic dXNlcjpwYXNz"),
            Err(ParseError::WrongScheme)
        ));
    }

    #[test]
    fn test_invalid_base64() {
        assert!(matches!(
            parse_authorization("Basic not-base64!!"),
            Err(ParseError::Decode(_))
        ));
    }

    #[test]
    fn test_non_utf8_payload() {
        // 0xFF 단독은 유효한 UTF-8이 아니다
        let encoded = BASE64.encode([0xFF]);
        assert!(matches!(
            parse_authorization(&format!("Basic {}", encoded)),
            Err(ParseError::Utf8(_))
        ));
    }

    #[test]
    fn test_missing_colon() {
        let encoded = BASE64.encode("userpass");
        assert!(matches!(
            parse_authorization(&format!("Basic {}", encoded)),
            Err(ParseError::MalformedPair)
        ));
    }

    #[test]
    fn test_empty_user_or_password() {
        let empty_password = BASE64.encode("user:");
        assert!(matches!(
            parse_authorization(&format!("Basic {}", empty_password)),
            Err(ParseError::MalformedPair)
        ));

        let empty_user = BASE64.encode(":pass");
        assert!(matches!(
            parse_authorization(&format!("Basic {}", empty_user)),
            Err(ParseError::MalformedPair)
        ));
    }
}
