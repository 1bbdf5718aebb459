pub mod auth;
pub mod dupecheck;
