pub mod claims;
pub mod health;
pub mod profiles;
