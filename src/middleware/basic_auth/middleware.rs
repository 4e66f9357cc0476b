use crate::middleware::{Chain, MiddlewareError, Request, Response};
use super::config::BasicAuthConfig;
use super::hooks::AuthHooks;
use super::parser::{self, Credentials, ParseError};
use hyper::header::{self, HeaderValue};
use hyper::StatusCode;
use tracing::{debug, warn};

/// Basic 인증 미들웨어
///
/// Authorization 헤더를 검사해서 요청을 체인으로 전달할지 거부할지
/// 결정하고, 결정 전후의 정해진 지점에서 `AuthHooks`의 훅을 호출합니다.
///
/// 요청별 상태를 갖지 않으므로 여러 요청이 동시에 `process`를 호출해도
/// 안전합니다.
pub struct BasicAuthMiddleware {
    realm: String,
    /// 미리 계산된 WWW-Authenticate 값
    challenge: HeaderValue,
    hooks: Box<dyn AuthHooks>,
}

impl BasicAuthMiddleware {
    /// realm 설정과 훅 구현으로 미들웨어를 생성합니다.
    ///
    /// 챌린지 값은 여기서 한 번 계산됩니다. realm이 헤더 값으로 쓸 수
    /// 없는 문자를 담고 있으면 설정 오류로 끝납니다.
    pub fn new(config: BasicAuthConfig, hooks: Box<dyn AuthHooks>) -> Result<Self, MiddlewareError> {
        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{}\"", config.realm))
            .map_err(|e| MiddlewareError::Config(format!("realm을 헤더 값으로 쓸 수 없음: {}", e)))?;

        Ok(Self {
            realm: config.realm,
            challenge,
            hooks,
        })
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// 인증이 필요함을 클라이언트에 알립니다.
    ///
    /// 상태를 401로 바꾸고 WWW-Authenticate 헤더를 설정합니다.
    /// 여러 번 호출해도 결과는 같습니다.
    pub fn issue_challenge(&self, res: &mut Response) {
        *res.status_mut() = StatusCode::UNAUTHORIZED;
        res.headers_mut()
            .insert(header::WWW_AUTHENTICATE, self.challenge.clone());
    }

    /// Basic 인증 핸드셰이크를 수행합니다.
    ///
    /// - 헤더가 없으면 401 챌린지로 끝납니다.
    /// - 형식이 잘못된 헤더(토큰 수, 스킴, 자격증명 모양)는 400으로
    ///   끝나고 체인은 호출되지 않습니다.
    /// - base64/UTF-8 디코딩 실패는 흡수하지 않고 에러로 전파합니다.
    /// - 판정에 실패하면 403, 성공하면 `chain`으로 전달합니다.
    ///
    /// 자격증명이 파싱된 뒤에는 결과와 무관하게 `after_authentication`이
    /// 정확히 한 번, 체인 구간에 들어간 뒤에는 `after_chain`이 정확히
    /// 한 번 호출됩니다.
    pub async fn process(
        &self,
        req: &mut Request,
        res: &mut Response,
        chain: &dyn Chain,
    ) -> Result<(), MiddlewareError> {
        let Some(value) = req.headers().get(header::AUTHORIZATION) else {
            debug!(realm = %self.realm, "No Authorization header, issuing challenge");
            self.issue_challenge(res);
            return Ok(());
        };

        let Ok(value) = value.to_str() else {
            warn!("Rejecting non-ASCII Authorization header");
            *res.status_mut() = StatusCode::BAD_REQUEST;
            return Ok(());
        };

        let credentials = match parser::parse_authorization(value) {
            Ok(credentials) => credentials,
            Err(ParseError::Decode(e)) => return Err(MiddlewareError::Decode(e)),
            Err(ParseError::Utf8(e)) => return Err(MiddlewareError::Utf8(e)),
            Err(e) => {
                warn!(error = %e, "Rejecting malformed Authorization header");
                *res.status_mut() = StatusCode::BAD_REQUEST;
                return Ok(());
            }
        };

        let outcome = self.run_handshake(req, res, chain, &credentials).await;
        let cleanup = self
            .hooks
            .after_authentication(req, res, &credentials.user)
            .await;

        finish(outcome, cleanup, "after_authentication")
    }

    /// 판정과 체인 전달 구간. after_chain 보장은 여기서 처리됩니다.
    async fn run_handshake(
        &self,
        req: &mut Request,
        res: &mut Response,
        chain: &dyn Chain,
        credentials: &Credentials,
    ) -> Result<(), MiddlewareError> {
        self.hooks
            .before_authentication(req, res, &credentials.user)
            .await?;

        let accepted = self
            .hooks
            .authenticate(&credentials.user, &credentials.password, &credentials.raw)
            .await;

        if !accepted {
            debug!(user = %credentials.user, "Credentials rejected");
            *res.status_mut() = StatusCode::FORBIDDEN;
            return Ok(());
        }

        debug!(user = %credentials.user, "Credentials accepted, forwarding to chain");
        let forwarded = self.forward(req, res, chain, &credentials.user).await;
        let cleanup = self.hooks.after_chain(req, res, &credentials.user).await;

        finish(forwarded, cleanup, "after_chain")
    }

    /// before_chain과 체인 전달. 어느 쪽이 실패해도 after_chain은
    /// 호출한 쪽에서 보장합니다.
    async fn forward(
        &self,
        req: &mut Request,
        res: &mut Response,
        chain: &dyn Chain,
        user: &str,
    ) -> Result<(), MiddlewareError> {
        self.hooks.before_chain(req, user).await?;
        chain.proceed(req, res).await
    }
}

/// 본 구간의 결과와 정리 훅의 결과를 합칩니다. 먼저 난 에러가 우선하고,
/// 그 경우 정리 훅의 에러는 로그로만 남습니다.
fn finish(
    outcome: Result<(), MiddlewareError>,
    cleanup: Result<(), MiddlewareError>,
    hook: &str,
) -> Result<(), MiddlewareError> {
    match (outcome, cleanup) {
        (Err(outcome_err), Err(cleanup_err)) => {
            warn!(hook = hook, error = %cleanup_err, "Cleanup hook failed while another error was propagating");
            Err(outcome_err)
        }
        (Err(outcome_err), Ok(())) => Err(outcome_err),
        (Ok(()), cleanup) => cleanup,
    }
}
