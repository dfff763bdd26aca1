pub mod http;
pub mod sendgrid;
pub mod webhook;
