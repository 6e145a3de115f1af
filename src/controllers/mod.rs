pub(crate) mod author;
pub(crate) mod book;
pub(crate) mod user;
