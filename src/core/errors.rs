//! # Application Error Handling System
//!
//! 프로필/피드 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 모든 핸들러는 `AppResult<T>`를 반환하고, 에러는 `actix_web::ResponseError`
//! 구현을 통해 일관된 JSON 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 단일 입력값 검증 실패 |
//! | `FieldValidation` | 400 Bad Request | 필드 단위 스키마 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 없음/무효, 로그인 실패 |
//! | `AuthorizationError` | 403 Forbidden | 타인의 게시물/댓글 삭제 시도 |
//! | `NotFound` | 404 Not Found | 프로필, 게시물, 댓글 없음 |
//! | `ConflictError` | 409 Conflict | 이메일/핸들 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | GitHub API 오류 |
//! | `InternalError` | 500 Internal Server Error | 서명 실패, 부분 삭제 등 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "not_found",
//!   "message": "게시물을 찾을 수 없습니다"
//! }
//! ```
//!
//! 필드 검증 실패 시에는 `errors` 배열이 추가됩니다:
//!
//! ```json
//! {
//!   "error": "validation_error",
//!   "message": "입력값 검증에 실패했습니다",
//!   "errors": [{ "field": "email", "message": "유효한 이메일 주소를 입력해주세요" }]
//! }
//! ```
//!
//! 5xx 에러는 서버 로그에만 상세 내용을 남기고 클라이언트에는 일반 메시지만 전달합니다.

use serde::Serialize;
use thiserror::Error;

/// 필드 단위 검증 실패 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// 검증에 실패한 필드 이름
    pub field: String,
    /// 사용자에게 표시할 메시지
    pub message: String,
}

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층과 리포지토리 계층에서 발생하는 모든 실패를 표현합니다.
/// 핸들러에서 `?`로 전파하면 `ResponseError` 구현이 상태 코드와 JSON 본문을 결정합니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 요청 DTO 검증 (필드 단위 에러로 변환)
/// payload.validate()?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류입니다. 내부 메시지는 로그에만 기록됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 서비스 계층에서 직접 검출한 단일 검증 실패(빈 게시물 본문 등)와
    /// 잘못된 JSON 본문처럼 필드를 특정할 수 없는 실패를 나타냅니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 스키마 검증 에러
    ///
    /// `validator` 크레이트의 검증 결과를 필드별 메시지로 변환한 것입니다.
    #[error("Validation error: {} field(s) rejected", .0.len())]
    FieldValidation(Vec<FieldError>),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 중복 이메일로 회원가입하거나 다른 사용자가 사용 중인 핸들로
    /// 프로필을 만들 때 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// 토큰이 없거나, 서명이 잘못되었거나, 만료된 경우 모두 이 변형 하나로 보고됩니다.
    /// 만료와 위조를 구분하지 않아 서명 유효성 정보가 노출되지 않습니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    ///
    /// 인증은 되었지만 해당 애그리거트 인스턴스의 소유자가 아닌 경우입니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (GitHub API 등)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    ///
    /// 토큰 서명 실패, 비밀번호 해싱 실패, 계정 삭제 도중의 부분 실패 등
    /// 예상하지 못한 시스템 오류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 에러 종류를 구분할 수 있도록 응답에 포함되는 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) | AppError::FieldValidation(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::AuthenticationError(_) => "unauthenticated",
            AppError::AuthorizationError(_) => "forbidden",
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => "internal_error",
        }
    }

    /// 클라이언트에게 노출해도 되는 메시지
    ///
    /// 5xx 계열은 내부 정보를 숨기고 일반 메시지로 대체합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
            AppError::FieldValidation(_) => "입력값 검증에 실패했습니다".to_string(),
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => "서버 내부 오류가 발생했습니다".to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::FieldValidation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 여기서 한 번 로그로 남기므로 호출 측에서 중복 로깅할 필요가 없습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        let mut body = serde_json::json!({
            "error": self.code(),
            "message": self.public_message(),
        });

        if let AppError::FieldValidation(errors) = self {
            body["errors"] = serde_json::json!(errors);
        }

        actix_web::HttpResponse::build(status).json(body)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} 값이 올바르지 않습니다", field)),
                })
            })
            .collect();

        // HashMap 순회 순서에 의존하지 않도록 필드명으로 정렬
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::FieldValidation(fields)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let bson = mongodb::bson::to_bson(&entry).context("경력 항목 직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use validator::Validate;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("게시물 내용은 필수입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("게시물을 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 사용 중인 핸들입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("권한이 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3:27017".to_string());
        let response = error.error_response();
        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "internal_error");
        assert!(!json["message"].as_str().unwrap().contains("10.0.0.3"));
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "이름은 필수입니다"))]
        name: String,
        #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
        email: String,
    }

    #[actix_web::test]
    async fn test_field_validation_lists_every_field() {
        let sample = Sample { name: String::new(), email: "nope".to_string() };
        let error: AppError = sample.validate().unwrap_err().into();

        match &error {
            AppError::FieldValidation(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].field, "email");
                assert_eq!(fields[1].field, "name");
                assert_eq!(fields[1].message, "이름은 필수입니다");
            }
            other => panic!("Expected FieldValidation, got {:?}", other),
        }

        let response = error.error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
