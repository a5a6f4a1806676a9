pub mod adapters;
pub mod dto;
pub mod services;
pub mod validator;
