use evlog_core::{registry, EventLogger, LevelMask, MockDestination};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

static REGISTRY_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that replace the process-wide logger
#[allow(dead_code)]
pub fn registry_guard() -> MutexGuard<'static, ()> {
    REGISTRY_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Install a fresh logger holding one all-levels mock as the current logger
#[allow(dead_code)]
pub fn install_mock(identifier: &str) -> (Arc<EventLogger>, Arc<MockDestination>) {
    let mock = Arc::new(MockDestination::new(identifier, LevelMask::ALL));
    let logger = Arc::new(EventLogger::new());
    assert!(logger.register(mock.clone()));
    registry::set_current(logger.clone());
    (logger, mock)
}

/// Writer whose contents stay readable after the destination takes ownership
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
