use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;

/// 인증 가드가 토큰 검증 후 요청 확장(extensions)에 넣는 호출자 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// 토큰에서 추출된 사용자 ID
    pub user_id: ObjectId,
}

impl AuthenticatedUser {
    pub fn new(user_id: ObjectId) -> Self {
        Self { user_id }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 가드가 적용되지 않은 라우트에서 사용하면 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(*user)),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let user_id = ObjectId::new();
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser::new(user_id));

        let extracted = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(extracted.user_id, user_id);
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthenticated() {
        let req = TestRequest::default().to_http_request();

        match AuthenticatedUser::extract(&req).await {
            Err(AppError::AuthenticationError(_)) => {}
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }
}
