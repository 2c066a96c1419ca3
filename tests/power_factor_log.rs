//! 역률 상한 적용 시 경고 로그 테스트. 전역 로거를 쓰므로 별도 바이너리로 둔다.
use std::sync::Mutex;

use line_rating_toolbox::session::{cap_power_factor, parse_power_factor};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture(Mutex<Vec<String>>);

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.0.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn capping_warns_once_per_changed_value() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let typed = parse_power_factor("1.5").unwrap();
    assert_eq!(cap_power_factor(typed), 0.99);
    assert_eq!(cap_power_factor(1.0), 0.99);
    assert_eq!(cap_power_factor(0.8), 0.8);

    let lines = LOGGER.0.lock().unwrap();
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert!(lines[0].contains("1.5") && lines[0].contains("0.99"));
    assert!(lines[1].contains("replaced with 0.99"));
}
