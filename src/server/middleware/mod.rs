//! Request authentication and authorization.

pub mod auth;

#[cfg(test)]
mod test;
