use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

/// Session token issued by `POST /auth/login`, sent as `Authorization: Bearer <token>`.
/// Signature and expiry are checked by the auth use case, not here.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT")]
pub struct BearerToken(pub Bearer);
