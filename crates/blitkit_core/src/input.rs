use std::collections::HashSet;

use blitkit_common::Key;

/// Polled keyboard state with edge detection.
///
/// A frontend feeds press/release signals in whatever order the host
/// delivers them; the owner polls between frames. Two queries are offered:
/// [`is_down`](Self::is_down) answers "is the key held right now", while
/// [`is_pressed`](Self::is_pressed) answers "did this hold start since I
/// last asked" and therefore fires once per press-hold cycle.
///
/// Per key the tracker walks three states: absent, held-but-unreported,
/// and held-and-reported. A press moves absent to held-but-unreported, the
/// first `is_pressed` poll moves on to held-and-reported (and returns
/// true exactly then), and a release drops the key back to absent from
/// either held state.
#[derive(Debug, Default)]
pub struct InputTracker {
    down: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press signal. Pressing an already-held key (host key
    /// auto-repeat) changes nothing; in particular it does not re-arm
    /// `is_pressed`.
    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    /// Record a release signal. Clears both the held state and the
    /// reported mark, whether or not either was set.
    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
        self.pressed.remove(&key);
    }

    /// Callback form of [`press`](Self::press)/[`release`](Self::release),
    /// matching the `App` key-event signature so apps can forward events
    /// unchanged.
    pub fn handle_key_event(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    /// True while `key` is held. Pure read, stable between signals.
    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    /// True at most once per press-hold cycle of `key`.
    ///
    /// The first poll after a press returns true and marks the key as
    /// reported; later polls during the same hold return false even though
    /// `is_down` stays true. Releasing and pressing again starts a fresh
    /// cycle. The reported mark is the write side effect behind the
    /// `&mut self`.
    pub fn is_pressed(&mut self, key: Key) -> bool {
        if self.pressed.contains(&key) {
            false
        } else if self.down.contains(&key) {
            self.pressed.insert(key);
            true
        } else {
            false
        }
    }
}
