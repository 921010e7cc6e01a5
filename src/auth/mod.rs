pub mod handlers;
pub mod middleware;
pub mod session;
pub mod token;

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "session";
