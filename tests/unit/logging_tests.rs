use icmp::{Comparator, compare};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that appends formatted log lines to a shared buffer.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_logs<F: FnOnce()>(level: Level, f: F) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn test_finish_record_carries_counts() {
        let logs = with_captured_logs(Level::DEBUG, || {
            compare(vec![1, 2, 4], vec![1, 3, 4], |_| {});
        });

        assert!(logs.contains("starting comparison"), "logs: {logs}");
        assert!(logs.contains("comparison finished"), "logs: {logs}");
        assert!(logs.contains("matched=2"), "logs: {logs}");
        assert!(logs.contains("added=1"), "logs: {logs}");
        assert!(logs.contains("removed=1"), "logs: {logs}");
        assert!(!logs.contains("classified element"), "logs: {logs}");
    }

    #[test]
    fn test_trace_level_reports_each_event() {
        let logs = with_captured_logs(Level::TRACE, || {
            Comparator::new(vec![1, 2], vec![2, 3])
                .on_event(|_| {})
                .run()
                .unwrap();
        });

        assert_eq!(logs.matches("classified element").count(), 3);
        assert!(logs.contains("kind=added"), "logs: {logs}");
        assert!(logs.contains("kind=compare"), "logs: {logs}");
        assert!(logs.contains("kind=removed"), "logs: {logs}");
    }

    #[test]
    fn test_missing_callback_logs_nothing() {
        let logs = with_captured_logs(Level::TRACE, || {
            let result = Comparator::new(vec![1], vec![1]).run();
            assert!(result.is_err());
        });

        assert!(logs.is_empty(), "logs: {logs}");
    }
}
