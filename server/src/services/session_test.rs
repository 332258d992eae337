use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// token generation
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

#[test]
fn generate_ws_ticket_is_32_hex_chars() {
    let ticket = generate_ws_ticket();
    assert_eq!(ticket.len(), 32);
    assert!(ticket.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_ws_ticket_two_calls_differ() {
    assert_ne!(generate_ws_ticket(), generate_ws_ticket());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_uuid_as_string() {
    let user = SessionUser {
        id: Uuid::nil(),
        name: "Ana".into(),
        email: "ana@empresa.com".into(),
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@empresa.com");
}

#[test]
fn session_ttl_days_default() {
    // Env var unset in the test environment.
    assert_eq!(session_ttl_days(), DEFAULT_SESSION_TTL_DAYS);
}
