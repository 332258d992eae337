use super::{AuthError, auth_error_from_status, ticket_request_failed_message};

#[test]
fn unauthorized_maps_to_invalid_credential() {
    assert_eq!(auth_error_from_status(401), AuthError::InvalidCredential);
}

#[test]
fn too_many_requests_maps_to_rate_limited() {
    assert_eq!(auth_error_from_status(429), AuthError::RateLimited);
}

#[test]
fn other_statuses_map_to_other() {
    assert_eq!(auth_error_from_status(500), AuthError::Other);
    assert_eq!(auth_error_from_status(400), AuthError::Other);
    assert_eq!(auth_error_from_status(403), AuthError::Other);
}

#[test]
fn invalid_credential_message_names_the_credentials() {
    assert_eq!(
        AuthError::InvalidCredential.message(),
        "Correo o contraseña incorrectos."
    );
}

#[test]
fn rate_limited_message_mentions_the_lockout() {
    assert_eq!(
        AuthError::RateLimited.message(),
        "Cuenta bloqueada temporalmente por muchos intentos."
    );
}

#[test]
fn other_message_is_generic() {
    assert_eq!(AuthError::Other.message(), "Ocurrió un error inesperado.");
}

#[test]
fn ticket_failure_message_includes_status() {
    assert_eq!(
        ticket_request_failed_message(503),
        "ticket request failed: 503"
    );
}
