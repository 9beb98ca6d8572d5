//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiErrorBody;
use crate::repository::{FactureRecord, NewFacture, NewTarif, TarifRecord};
use crate::routes::{HealthResponse, LoginForm, TokenResponse};

/// Clinic API 문서.
///
/// 핵심 엔드포인트(인증, 가격, 청구)의 OpenAPI 3.0 스펙입니다.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic Management API",
        version = "0.1.0",
        description = r#"
# 클리닉 관리 REST API

사용자, 환자, 직원, 예약, 방문, 카탈로그/가격, 청구, 의료 기록을
관리하는 단일 테넌트 REST API입니다.

## 인증

`POST /login`으로 토큰을 발급받고, 보호된 엔드포인트에는
`Authorization: Bearer <token>` 헤더를 포함하세요. 토큰은 무상태이며
60분 후 만료됩니다.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "auth", description = "인증 - 로그인 및 토큰 발급"),
        (name = "catalogue", description = "카탈로그 - 의료 행위 및 가격"),
        (name = "factures", description = "청구 - 청구서 생성/조회")
    ),
    components(
        schemas(
            ApiErrorBody,
            HealthResponse,
            LoginForm,
            TokenResponse,
            NewTarif,
            TarifRecord,
            NewFacture,
            FactureRecord,
        )
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::health::health_ready,
        crate::routes::auth::login,
        crate::routes::catalogue::fixer_prix,
        crate::routes::factures::creer_facture,
        crate::routes::factures::obtenir_facture_visite,
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_valid() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string(&spec).unwrap();

        assert!(json.contains("Clinic Management API"));
        assert!(json.contains("/login"));
        assert!(json.contains("/factures"));
    }

    #[test]
    fn test_swagger_ui_router_creates() {
        let _router: Router<()> = swagger_ui_router();
    }
}
