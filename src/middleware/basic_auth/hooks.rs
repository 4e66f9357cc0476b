use crate::middleware::{MiddlewareError, Request, Response};
use async_trait::async_trait;

/// Basic 인증 확장 훅 세트
///
/// 자격증명 판정 하나와 판정 전후/체인 전후에 호출되는 라이프사이클 훅
/// 네 개로 구성됩니다. 판정 외의 훅은 기본 구현이 아무 일도 하지 않으므로
/// 필요한 것만 재정의하면 됩니다. 훅에서 올라온 에러는 재시도 없이
/// `process` 호출자에게 전파됩니다.
#[async_trait]
pub trait AuthHooks: Send + Sync {
    /// 사용자 자격증명을 검증합니다.
    ///
    /// `raw_pair`는 디코딩된 `user:password` 원문입니다.
    async fn authenticate(&self, user: &str, password: &str, raw_pair: &str) -> bool;

    /// 자격증명 판정 직전에 호출됩니다.
    async fn before_authentication(
        &self,
        _req: &Request,
        _res: &mut Response,
        _user: &str,
    ) -> Result<(), MiddlewareError> {
        Ok(())
    }

    /// 판정 성공 후 체인 전달 직전에 호출됩니다.
    async fn before_chain(&self, _req: &Request, _user: &str) -> Result<(), MiddlewareError> {
        Ok(())
    }

    /// 체인 구간이 끝나면 결과와 무관하게 호출됩니다.
    async fn after_chain(
        &self,
        _req: &Request,
        _res: &mut Response,
        _user: &str,
    ) -> Result<(), MiddlewareError> {
        Ok(())
    }

    /// 핸드셰이크 전체가 끝나면 결과와 무관하게 호출됩니다.
    async fn after_authentication(
        &self,
        _req: &Request,
        _res: &mut Response,
        _user: &str,
    ) -> Result<(), MiddlewareError> {
        Ok(())
    }
}
