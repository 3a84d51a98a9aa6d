// storefront_server/src/web/cors.rs

use actix_cors::Cors;
use actix_web::http::header;

pub fn cors(allowed_origins: &[String]) -> Cors {
  let mut cors = Cors::default()
    .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
    .allowed_headers(vec![
      header::ORIGIN,
      header::CONTENT_TYPE,
      header::ACCEPT,
      header::AUTHORIZATION,
    ])
    .supports_credentials()
    .max_age(3600);

  for origin in allowed_origins {
    // actix-cors refuses "*" as a literal origin.
    cors = if origin == "*" {
      cors.allow_any_origin()
    } else {
      cors.allowed_origin(origin)
    };
  }
  cors
}
