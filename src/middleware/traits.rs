use super::{MiddlewareError, Request, Response};
use async_trait::async_trait;

/// 체인 연속 트레이트
///
/// 인증을 통과한 요청이 전달되는 다음 처리 단계를 정의합니다.
/// 구현은 호스트 애플리케이션이 제공합니다.
#[async_trait]
pub trait Chain: Send + Sync {
    /// 요청을 체인의 나머지 구간으로 전달합니다.
    async fn proceed(&self, req: &mut Request, res: &mut Response) -> Result<(), MiddlewareError>;
}
