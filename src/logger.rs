use {
    backtrace::Backtrace,
    log::{Level, Log, Metadata, Record},
    std::{io::Write, time::SystemTime},
};

/// Writes records to stderr as `[<time> <level> <module>] <message>`.
pub struct Logger {
    level: Level,
}

impl Logger {
    /// Installs the logger and a panic hook that logs the panic with a backtrace.
    pub fn install_stderr(level: Level) {
        std::panic::set_hook(Box::new(|p| {
            match p.location() {
                Some(loc) => log::error!(
                    "Panic at {} line {} column {}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                ),
                None => log::error!("Panic at unknown location"),
            }
            let payload = p.payload();
            let msg = match payload.downcast_ref::<&str>() {
                Some(msg) => Some(*msg),
                None => payload.downcast_ref::<String>().map(|s| s.as_str()),
            };
            if let Some(msg) = msg {
                log::error!("Message: {}", msg);
            }
            log::error!("Backtrace:\n{:?}", Backtrace::new());
        }));
        if log::set_boxed_logger(Box::new(Self { level })).is_err() {
            fatal!("Error: A logger has already been installed");
        }
        log::set_max_level(level.to_level_filter());
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{} {:5} {}] {}",
            humantime::format_rfc3339_millis(SystemTime::now()),
            record.level(),
            record.module_path().unwrap_or("?"),
            record.args(),
        );
    }

    fn flush(&self) {}
}
