pub use super::appointment::Entity as Appointment;
pub use super::customer::Entity as Customer;
pub use super::patient::Entity as Patient;
pub use super::token_blocklist::Entity as TokenBlocklist;
pub use super::veterinarian::Entity as Veterinarian;
