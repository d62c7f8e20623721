//! # Profile HTTP Handlers
//!
//! 프로필 연산을 HTTP로 노출하는 핸들러입니다. 요청자 식별자는 인증 미들웨어가
//! 넣어 둔 `AuthenticatedUser` / `OptionalUser`에서 꺼내 서비스에 명시적으로 넘깁니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `GET` | `/api/v1/user` | 필수 | 본인 전체 보기 | 200 OK |
//! | `PUT` | `/api/v1/user`, `/api/v1/user/update` | 필수 | 프로필 갱신 | 200 OK |
//! | 그 외 | `/api/v1/user` | 필수 | 지원하지 않는 동작 | 400 Bad Request |
//! | `GET` | `/api/v1/user/username/{candidate}` | 필수 | 사용자명 사용 여부 (`true`/`false`) | 200 OK |
//! | `GET` | `/api/v1/user/info/{id}` | 선택 | 공개 보기 | 200 OK |
//! | `GET` | `/api/v1/user/photo/{id}` | 없음 | 사진 위치로 리다이렉트 | 302 Found |

use actix_web::{get, http::header, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::core::AppError;
use crate::domain::dto::profiles::request::UpdateProfileRequest;
use crate::domain::dto::profiles::response::UpdatedProfileResponse;
use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
use crate::services::profiles::ProfileService;

/// 본인 전체 보기
///
/// 등록 이메일, 연결된 인증 프로바이더, 태그를 함께 반환합니다.
pub async fn get_self_view(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let view = service.get_self_view(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(view))
}

/// 프로필 갱신
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Jane",
///   "username": "jane_doe",
///   "photoUrl": "https://cdn.example.com/jane.png",
///   "auths": ["google"]
/// }
/// ```
///
/// 빈 문자열 필드는 무시됩니다. `auths`가 있으면 목록에 없는 인증 연결을 삭제하고
/// 응답에 요청한 목록을 그대로 돌려줍니다.
pub async fn update_profile(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let (patch, desired_providers) = payload.into_inner().into_parts();
    let updated = service
        .update_profile(&user.user_id, patch, desired_providers)
        .await?;

    Ok(HttpResponse::Ok().json(UpdatedProfileResponse::from(updated)))
}

/// `/api/v1/user` 아래에서 처리되지 않은 요청
pub async fn invalid_operation(req: HttpRequest) -> Result<HttpResponse, AppError> {
    log::debug!("지원하지 않는 요청: {} {}", req.method(), req.path());

    Err(AppError::InvalidOperation(format!(
        "지원하지 않는 요청입니다: {} {}",
        req.method(),
        req.path()
    )))
}

/// 사용자명 사용 여부. 요청자 본인이 쓰는 사용자명은 `false`입니다.
#[get("/username/{candidate}")]
pub async fn check_username(
    service: web::Data<ProfileService>,
    user: AuthenticatedUser,
    candidate: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let taken = service.check_username_taken(&candidate, &user.user_id).await?;

    Ok(HttpResponse::Ok().json(taken))
}

/// 공개 보기. 로그인한 요청자가 대상 본인이면 `isOwner`가 `true`입니다.
#[get("/{id}")]
pub async fn get_public_view(
    service: web::Data<ProfileService>,
    viewer: OptionalUser,
    target_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = service.get_public_view(&target_id, viewer.viewer_id()).await?;

    Ok(HttpResponse::Ok().json(view))
}

/// 사진 리다이렉트. 항상 302를 반환합니다.
#[get("/{id}")]
pub async fn get_photo(
    service: web::Data<ProfileService>,
    target_id: web::Path<String>,
) -> HttpResponse {
    let target = service.resolve_photo_target(&target_id).await;

    HttpResponse::Found()
        .insert_header((header::LOCATION, target.location()))
        .finish()
}
