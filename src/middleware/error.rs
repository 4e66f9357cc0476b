use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum MiddlewareError {
    /// 미들웨어 구성 단계의 오류
    #[error("설정 오류: {0}")]
    Config(String),

    /// 자격증명 페이로드가 base64가 아님
    #[error("base64 디코딩 실패: {0}")]
    Decode(#[from] base64::DecodeError),

    /// 디코딩된 자격증명이 UTF-8이 아님
    #[error("UTF-8 변환 실패: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// 확장 훅에서 올라온 오류
    #[error("훅 {hook} 실행 실패: {message}")]
    Hook {
        hook: String,
        message: String,
    },

    #[error(transparent)]
    Hyper(#[from] hyper::Error),
}
