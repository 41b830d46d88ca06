//! Root welcome handler

use rocket::get;

/// Root endpoint
#[get("/")]
pub fn root() -> &'static str {
    "Welcome to the Configuration Store Service"
}
