use crate::server::{config::JwtConfig, service::token::TokenService};

mod motorcycle;

fn token_service() -> TokenService {
    TokenService::new(&JwtConfig::new("service-test-secret-with-at-least-32-bytes").unwrap())
}
