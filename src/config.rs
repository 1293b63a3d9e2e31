use std::sync::OnceLock;

use crate::logging::init_log;

pub struct Config {
    pub log_config: LogConfig,
}

pub enum LogConfig {
    /// Console logging driven by the number of `-v` flags on the command
    /// line.
    Verbose(u8),
    NoLog,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn init_config(config: Config) {
    CONFIG.set(config).unwrap_or_else(|_| {
        panic!("cannot init config again after init");
    });
    init_log(&get_config().log_config);
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("cannot get config before init")
}
