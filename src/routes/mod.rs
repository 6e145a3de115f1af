pub(crate) mod auth;
pub(crate) mod author;
pub(crate) mod book;
pub(crate) mod router;
