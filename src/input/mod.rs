pub mod error;
pub mod validator;
