pub use super::api_key::Entity as ApiKey;
pub use super::api_key_usage::Entity as ApiKeyUsage;
