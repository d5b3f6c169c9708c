struct CalculatorLogger {
    level: log::LevelFilter,
}

impl log::Log for CalculatorLogger {
    #[inline]
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "[{}] [{}] {}",
            record.level(),
            record.module_path().unwrap_or("?"),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Installs the stderr logger. Only the first call has any effect.
pub fn init(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let logger = Box::leak(Box::new(CalculatorLogger { level }));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
