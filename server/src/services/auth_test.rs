use super::*;

#[test]
fn normalize_email_accepts_basic_address() {
    assert_eq!(normalize_email("  ADMIN@Empresa.com "), Some("admin@empresa.com".to_owned()));
}

#[test]
fn normalize_email_rejects_invalid_values() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("admin"), None);
    assert_eq!(normalize_email("@empresa.com"), None);
    assert_eq!(normalize_email("admin@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}

#[test]
fn hash_then_verify_round_trip() {
    let hash = hash_password("hunter2").unwrap();
    assert!(verify_password("hunter2", &hash));
    assert!(!verify_password("hunter3", &hash));
}

#[test]
fn hash_is_salted() {
    let a = hash_password("hunter2").unwrap();
    let b = hash_password("hunter2").unwrap();
    assert_ne!(a, b);
}

#[test]
fn verify_password_rejects_malformed_hash() {
    assert!(!verify_password("hunter2", "not-a-bcrypt-hash"));
    assert!(!verify_password("hunter2", ""));
}
