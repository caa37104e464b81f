use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

const APPROVAL_CODE_LEN: usize = 8;

/// Issues the read-only display tokens shown on a freshly mounted form.
///
/// Approval codes are random and purely cosmetic. Application ids come from a
/// counter, so one generator never hands out the same id twice.
#[derive(Debug, Default)]
pub struct TokenGenerator {
    next_application: AtomicU64,
}

impl TokenGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn approval_code(&self) -> String {
        let code: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(APPROVAL_CODE_LEN)
            .map(|b| char::from(b).to_ascii_uppercase())
            .collect();
        format!("PAC-{}", code)
    }

    pub fn application_id(&self) -> String {
        let n = self.next_application.fetch_add(1, Ordering::Relaxed) + 1;
        format!("APP-{:06}", n)
    }
}
