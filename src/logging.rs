use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::sync::Mutex;

use crate::config::LogConfig;

fn now() -> DateTime<Local> {
    Local::now()
}

fn map_level_to_str(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

fn open_log_file(file_name: &str) -> io::Result<Mutex<LineWriter<File>>> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_name)?;
    Ok(Mutex::new(LineWriter::new(file)))
}

mod console {
    use super::*;

    /// Logs to stderr, and to `debug.log` as well once `-vvv` asks for a
    /// file copy.
    pub struct ConsoleLogger {
        writer: Option<Mutex<LineWriter<File>>>,
    }

    impl ConsoleLogger {
        pub fn new(write_file: bool) -> io::Result<Self> {
            let writer = if write_file {
                Some(open_log_file("debug.log")?)
            } else {
                None
            };
            Ok(Self { writer })
        }
    }

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            eprintln!(
                "[{:<5} {}] {}",
                map_level_to_str(record.level()),
                now().format("%H:%M:%S%.3f"),
                record.args()
            );
            if let Some(writer) = &self.writer {
                let mut writer = writer.lock().unwrap();
                let _ = writeln!(
                    writer,
                    "[{:<5} {}] {}",
                    map_level_to_str(record.level()),
                    now().format("%H:%M:%S%.6f"),
                    record.args()
                );
            }
        }

        fn flush(&self) {
            if let Some(writer) = &self.writer {
                if let Ok(mut writer) = writer.lock() {
                    let _ = writer.flush();
                }
            }
        }
    }
}

mod trace {
    use super::*;

    /// Records everything, module paths included, to `trace.log`.
    pub struct TraceLogger {
        writer: Mutex<LineWriter<File>>,
    }

    impl TraceLogger {
        pub fn new() -> io::Result<Self> {
            Ok(Self {
                writer: open_log_file("trace.log")?,
            })
        }
    }

    impl Log for TraceLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            let mut writer = self.writer.lock().unwrap();
            let _ = writeln!(
                writer,
                "[{:<5} {} {}] {}",
                map_level_to_str(record.level()),
                now().format("%H:%M:%S%.6f"),
                record.module_path().unwrap_or("???"),
                record.args()
            );
        }

        fn flush(&self) {
            let mut writer = self.writer.lock().unwrap();
            let _ = writer.flush();
        }
    }
}

pub fn init_log(config: &LogConfig) {
    match config {
        LogConfig::Verbose(verbose) => match *verbose {
            0 => {}
            1 => {
                let logger = console::ConsoleLogger::new(false).unwrap();
                log::set_boxed_logger(Box::new(logger)).unwrap();
                log::set_max_level(LevelFilter::Info);
            }
            2 => {
                let logger = console::ConsoleLogger::new(false).unwrap();
                log::set_boxed_logger(Box::new(logger)).unwrap();
                log::set_max_level(LevelFilter::Debug);
            }
            3 => {
                let logger = console::ConsoleLogger::new(true).unwrap();
                log::set_boxed_logger(Box::new(logger)).unwrap();
                log::set_max_level(LevelFilter::Debug);
            }
            4..=u8::MAX => {
                let logger = trace::TraceLogger::new().unwrap();
                log::set_boxed_logger(Box::new(logger)).unwrap();
                log::set_max_level(LevelFilter::Trace);
            }
        },
        LogConfig::NoLog => {}
    };
}
