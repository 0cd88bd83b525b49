//! Simulated typing. Bot messages are revealed one at a time with a delay
//! that grows with message length; input appears shortly after the last one.
//!
//! All waiting goes through a [`Pacer`] so tests and scripted clients can run
//! the same sequence with [`InstantPacer`].

use async_trait::async_trait;
use std::time::Duration;

pub const FIRST_MESSAGE_DELAY: Duration = Duration::from_millis(700);
pub const MESSAGE_BASE_DELAY: Duration = Duration::from_millis(800);
pub const PER_CHAR_DELAY: Duration = Duration::from_millis(8);
/// Gap between the last message of a batch and the input affordance.
pub const INPUT_SETTLE_DELAY: Duration = Duration::from_millis(300);
/// Pause spent in the `analyzing` step before the result is shown.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(1800 + 3500);

/// Delay before message `index` of a batch appears, measured from the
/// previous message. Length is counted in UTF-16 units, as browsers do.
pub fn reveal_delay(index: usize, text: &str) -> Duration {
    if index == 0 {
        return FIRST_MESSAGE_DELAY;
    }
    let units = u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX);
    MESSAGE_BASE_DELAY + PER_CHAR_DELAY.saturating_mul(units)
}

/// Offsets from the start of the batch at which each message appears.
pub fn reveal_schedule<S: AsRef<str>>(messages: &[S]) -> Vec<Duration> {
    let mut elapsed = Duration::ZERO;
    messages
        .iter()
        .enumerate()
        .map(|(i, m)| {
            elapsed += reveal_delay(i, m.as_ref());
            elapsed
        })
        .collect()
}

#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Real delays on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypingPacer;

#[async_trait]
impl Pacer for TypingPacer {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Zero delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

#[async_trait]
impl Pacer for InstantPacer {
    async fn pause(&self, _delay: Duration) {}
}

/// Reveal `messages` one by one through `show`, then wait for the input
/// affordance to settle.
pub async fn reveal<S, F>(pacer: &dyn Pacer, messages: &[S], mut show: F)
where
    S: AsRef<str> + Sync,
    F: FnMut(&str) + Send,
{
    for (i, message) in messages.iter().enumerate() {
        pacer.pause(reveal_delay(i, message.as_ref())).await;
        show(message.as_ref());
    }
    if !messages.is_empty() {
        pacer.pause(INPUT_SETTLE_DELAY).await;
    }
}
