//! Domain-level constants.

// =============================================================================
// Identifiers
// =============================================================================

/// First id handed out by a fresh user store
pub const FIRST_USER_ID: i64 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Check that a caller-supplied field is present (non-blank).
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

// =============================================================================
// Demo data
// =============================================================================

/// Display name used for seeded demo user `n`
pub fn demo_user_name(n: usize) -> String {
    format!("User {}", n)
}

/// Email used for seeded demo user `n`
pub fn demo_user_email(n: usize) -> String {
    format!("user{}@example.com", n)
}
