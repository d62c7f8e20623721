//! # Route Configuration
//!
//! 모든 HTTP 라우트를 등록합니다. 스코프는 앞에서부터 경로 접두사로 매칭되므로
//! 인증 요구사항이 다른 `/api/v1/user/info`, `/api/v1/user/photo`를
//! `/api/v1/user`보다 먼저 등록합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(profile_service)
//!     .configure(routes::configure_all_routes)
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_profile_routes(cfg);
}

fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    // 공개 보기 - 로그인 여부에 따라 isOwner 결정
    cfg.service(
        web::scope("/api/v1/user/info")
            .wrap(AuthMiddleware::optional())
            .service(handlers::profiles::get_public_view)
    );

    // 사진 리다이렉트 - 인증 없음
    cfg.service(
        web::scope("/api/v1/user/photo")
            .service(handlers::profiles::get_photo)
    );

    cfg.service(
        web::scope("/api/v1/user")
            .wrap(AuthMiddleware::required_with_roles(vec!["user", "admin"]))
            .service(handlers::profiles::check_username)
            .service(
                web::resource("")
                    .route(web::get().to(handlers::profiles::get_self_view))
                    .route(web::put().to(handlers::profiles::update_profile))
                    .default_service(web::to(handlers::profiles::invalid_operation))
            )
            .service(
                web::resource("/update")
                    .route(web::put().to(handlers::profiles::update_profile))
            )
            .default_service(web::to(handlers::profiles::invalid_operation))
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_profile_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
