//! Small helpers shared by services and controllers.

pub mod extract;
pub mod jwt;
pub mod password;
pub mod validate;
