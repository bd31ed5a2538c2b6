/// Route table for blog-service
///
/// All routing decisions live here: a path outside the table is a 404, a known path
/// with an unsupported method is a 405, and an `{id}` that is not an integer is a 404.
use crate::error::AppError;
use crate::handlers;
use crate::metrics;
use actix_web::{web, Resource};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(resource("/users/register").route(web::post().to(handlers::register_user)))
        .service(
            resource("/posts")
                .route(web::get().to(handlers::list_posts))
                .route(web::post().to(handlers::create_post)),
        )
        .service(resource("/posts/{post_id}").route(web::get().to(handlers::get_post)))
        .service(
            resource("/posts/{post_id}/comments")
                .route(web::get().to(handlers::get_post_comments)),
        )
        .service(
            resource("/posts/{post_id}/likes")
                .route(web::get().to(handlers::count_likes))
                .route(web::post().to(handlers::like_post))
                .route(web::delete().to(handlers::unlike_post)),
        )
        .service(resource("/comments").route(web::post().to(handlers::create_comment)))
        .service(
            resource("/comments/{comment_id}")
                .route(web::get().to(handlers::get_comment))
                .route(web::delete().to(handlers::delete_comment)),
        )
        .service(resource("/health").route(web::get().to(handlers::health_summary)))
        .service(resource("/health/ready").route(web::get().to(handlers::readiness_summary)))
        .service(resource("/health/live").route(web::get().to(handlers::liveness_check)))
        .service(resource("/metrics").route(web::get().to(metrics::serve_metrics)))
        .default_service(web::to(handlers::not_found));
}

/// A resource whose unmatched methods answer 405 with a plain-text body
fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(handlers::method_not_allowed))
}

/// Any body that fails to decode is a 400; the Content-Type header is not enforced.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "Rejected request body");
            AppError::bad_request("Invalid JSON").into()
        })
}

/// Identifiers that do not parse are reported as missing resources.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Unparseable path identifier");
        AppError::not_found("Not found page").into()
    })
}
