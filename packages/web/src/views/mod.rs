mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod reviews;
pub use reviews::Reviews;
