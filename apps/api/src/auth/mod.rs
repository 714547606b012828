// Login / signup against the auth backend, with the resulting token and user
// persisted in a small file-backed session store.

pub mod handlers;
pub mod session;
pub mod validation;
