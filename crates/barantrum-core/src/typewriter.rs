//! Intro typewriter effect.
//!
//! [`Typewriter`] is the pure state machine: a source string and how much of
//! it has been revealed. [`TypingEffect`] drives it from a tokio interval and
//! publishes the revealed text on a `watch` channel.
//!
//! Only one driver task is ever live. Every restart bumps a generation
//! counter under the same lock the driver ticks through, so a task that
//! outlives its abort still cannot touch the buffer.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default reveal interval per character.
pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_millis(15);

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTick {
    /// One more character was revealed
    Typed(char),
    /// The whole source is already visible
    Complete,
}

/// Incremental revealer of a fixed string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source: Arc<str>,
    /// Byte offset of the revealed prefix, always on a char boundary
    cursor: usize,
    generation: u64,
}

impl Typewriter {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            cursor: 0,
            generation: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Currently revealed prefix.
    pub fn revealed(&self) -> &str {
        &self.source[..self.cursor]
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Generation of the current run. Changes on every restart or cancel.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clear the buffer and begin a new run. Returns the new generation.
    pub fn restart(&mut self) -> u64 {
        self.cursor = 0;
        self.generation += 1;
        self.generation
    }

    /// Invalidate the current run without touching the buffer.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Reveal the next character.
    pub fn tick(&mut self) -> TypeTick {
        match self.source[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                TypeTick::Typed(c)
            }
            None => TypeTick::Complete,
        }
    }
}

/// Timer-driven typewriter with cancel-before-restart semantics.
///
/// Must be started from within a tokio runtime.
pub struct TypingEffect {
    state: Arc<Mutex<Typewriter>>,
    interval: Duration,
    tx: watch::Sender<String>,
    task: Option<JoinHandle<()>>,
}

impl TypingEffect {
    pub fn new(source: impl Into<Arc<str>>, interval: Duration) -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self {
            state: Arc::new(Mutex::new(Typewriter::new(source))),
            interval,
            tx,
            task: None,
        }
    }

    /// Receive the revealed text every time it changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    /// Snapshot of the revealed text.
    pub fn revealed(&self) -> String {
        self.state.lock().revealed().to_string()
    }

    /// Whether a driver task is still revealing characters.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// (Re)start from an empty buffer, cancelling any run in flight.
    pub fn start(&mut self) {
        self.stop();

        let generation = {
            let mut typewriter = self.state.lock();
            let generation = typewriter.restart();
            self.tx.send_replace(String::new());
            generation
        };
        tracing::debug!(generation, "Typing effect started");

        let state = Arc::clone(&self.state);
        let tx = self.tx.clone();
        let interval = self.interval;

        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; characters start one interval in.
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let mut typewriter = state.lock();
                if typewriter.generation() != generation {
                    break;
                }
                if let TypeTick::Typed(_) = typewriter.tick() {
                    tx.send_replace(typewriter.revealed().to_string());
                }
                if typewriter.is_finished() {
                    tracing::debug!(generation, "Typing effect complete");
                    break;
                }
            }
        }));
    }

    /// Tear the driver down. The revealed text stays where it stopped.
    pub fn stop(&mut self) {
        self.state.lock().cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TypingEffect {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ticks_until_complete() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.tick(), TypeTick::Typed('a'));
        assert_eq!(tw.tick(), TypeTick::Typed('b'));
        assert_eq!(tw.tick(), TypeTick::Typed('c'));
        assert!(tw.is_finished());
        assert_eq!(tw.revealed(), "abc");

        // No further mutation once complete.
        assert_eq!(tw.tick(), TypeTick::Complete);
        assert_eq!(tw.revealed(), "abc");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new("도시 기록");
        let mut ticks = 0;
        while let TypeTick::Typed(_) = tw.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, "도시 기록".chars().count());
        assert_eq!(tw.revealed(), "도시 기록");
    }

    #[test]
    fn test_restart_resets_and_bumps_generation() {
        let mut tw = Typewriter::new("abc");
        tw.tick();
        tw.tick();
        let before = tw.generation();
        let generation = tw.restart();
        assert_eq!(tw.revealed(), "");
        assert!(generation > before);
    }

    #[test]
    fn test_cancel_keeps_buffer() {
        let mut tw = Typewriter::new("abc");
        tw.tick();
        let before = tw.generation();
        tw.cancel();
        assert_eq!(tw.revealed(), "a");
        assert_ne!(tw.generation(), before);
    }

    #[test]
    fn test_empty_source_is_immediately_finished() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_finished());
        assert_eq!(tw.tick(), TypeTick::Complete);
    }

    #[tokio::test(start_paused = true)]
    async fn test_effect_reveals_full_source_then_stops() {
        let mut effect = TypingEffect::new("abc", Duration::from_millis(10));
        effect.start();
        assert_eq!(effect.revealed(), "");

        tokio::time::sleep(Duration::from_millis(35)).await;
        tokio::task::yield_now().await;

        assert_eq!(effect.revealed(), "abc");
        assert!(!effect.is_running());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(effect.revealed(), "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_mid_flight_does_not_duplicate() {
        let mut effect = TypingEffect::new("abcdef", Duration::from_millis(10));
        effect.start();
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert_eq!(effect.revealed(), "ab");

        effect.start();
        assert_eq!(effect.revealed(), "");

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(effect.revealed(), "abcdef");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_buffer() {
        let mut effect = TypingEffect::new("abcdef", Duration::from_millis(10));
        effect.start();
        tokio::time::sleep(Duration::from_millis(25)).await;
        effect.stop();
        assert!(!effect.is_running());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(effect.revealed(), "ab");
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_growing_prefixes() {
        let mut effect = TypingEffect::new("xyz", Duration::from_millis(10));
        let mut rx = effect.subscribe();
        effect.start();

        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let text = rx.borrow_and_update().clone();
            seen.push(text.clone());
            if text == "xyz" {
                break;
            }
        }

        assert_eq!(seen.last().map(String::as_str), Some("xyz"));
        for text in &seen {
            assert!("xyz".starts_with(text.as_str()));
        }
    }

    #[derive(Debug, Clone)]
    enum Op {
        Tick,
        Restart,
        Cancel,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => Just(Op::Tick),
            1 => Just(Op::Restart),
            1 => Just(Op::Cancel),
        ]
    }

    proptest! {
        /// Whatever the interleaving, the buffer is a prefix of the source.
        #[test]
        fn revealed_is_always_a_prefix(
            source in "[a-z가-힣 ]{0,40}",
            ops in prop::collection::vec(op_strategy(), 0..120),
        ) {
            let mut tw = Typewriter::new(source.as_str());
            for op in ops {
                match op {
                    Op::Tick => { tw.tick(); }
                    Op::Restart => { tw.restart(); }
                    Op::Cancel => tw.cancel(),
                }
                prop_assert!(source.starts_with(tw.revealed()));
                prop_assert!(tw.revealed().len() <= source.len());
            }
        }
    }
}
