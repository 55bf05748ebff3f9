//! Page components for GupShup.

mod home;
mod login;
mod profile_edit;
mod register;

pub use home::Home;
pub use login::Login;
pub use profile_edit::ProfileEdit;
pub use register::Register;
