//! Standard values shared by fixtures and tests.

/// Plaintext password every fixture user is created with.
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// bcrypt cost used by fixtures and tests.
///
/// The lowest cost bcrypt accepts, so hashing stays fast in tests.
pub static TEST_PASSWORD_HASH_COST: u32 = 4;

/// Domain appended to fixture usernames to build unique email addresses.
pub static TEST_EMAIL_DOMAIN: &str = "holonet.test";
