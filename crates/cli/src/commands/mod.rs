pub mod config_cmd;
pub mod inspect;
pub mod serve;
