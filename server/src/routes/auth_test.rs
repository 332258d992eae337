use super::*;

// =============================================================================
// cookie builders
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax() {
    let cookie = session_cookie("tok123".into(), false);

    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok123");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(false));
    // Browser-session cookie: no Max-Age.
    assert_eq!(cookie.max_age(), None);
}

#[test]
fn session_cookie_secure_flag_propagates() {
    let cookie = session_cookie("tok123".into(), true);
    assert_eq!(cookie.secure(), Some(true));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie(false);

    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// env_bool
// =============================================================================

#[test]
fn env_bool_unset_is_none() {
    assert_eq!(env_bool("VIGIA_TEST_UNSET_FLAG"), None);
}

// =============================================================================
// request bodies
// =============================================================================

#[test]
fn login_request_deserializes() {
    let req: LoginRequest = serde_json::from_str(r#"{"email":"ana@empresa.com","password":"secreta"}"#).unwrap();
    assert_eq!(req.email, "ana@empresa.com");
    assert_eq!(req.password, "secreta");
}

#[test]
fn login_request_rejects_missing_fields() {
    let req: Result<LoginRequest, _> = serde_json::from_str(r#"{"email":"ana@empresa.com"}"#);
    assert!(req.is_err());
}
