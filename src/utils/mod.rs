pub(crate) mod auth;
pub(crate) mod ownership;
pub(crate) mod token;
pub(crate) mod validate;
