pub mod auth;

pub use auth::secret_key_middleware;
