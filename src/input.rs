/// Keyboard and mouse input from the terminal.
///
/// Input model: instead of acting on each key event individually, we keep a
/// `key_frame` map that records the frame number of the last press/repeat
/// event for every key. Each poll reports every key that is still "fresh"
/// (within `HOLD_WINDOW` frames), so Space and the arrows can be held
/// together.
///
/// * **Keyboard-enhancement capable** terminals send `Release` events, which
///   drop the key immediately.
/// * **Classic terminals** only send `Press` (OS key-repeat shows up as
///   repeated presses). Keys expire after `HOLD_WINDOW` frames of silence,
///   which is longer than the OS repeat interval.

use std::collections::HashMap;
use std::sync::mpsc::{self, TryRecvError};

use asteroid_shooter::platform::{InputFrame, InputSource};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// A key counts as held if it was seen within this many frames.
/// 8 frames @ 60 FPS ≈ 133 ms, longer than a ≥ 15 Hz key-repeat interval.
/// It is shorter than the OS delay before repeats start (250–500 ms), so on
/// terminals without release events a held key moves once, stalls until the
/// repeats arrive, then keeps going. That stall is accepted: a longer window
/// would keep the ship moving for the same delay after every release.
const HOLD_WINDOW: u64 = 8;

const LEFT_KEYS: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const UP_KEYS: &[KeyCode] = &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const DOWN_KEYS: &[KeyCode] = &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
const FIRE_KEYS: &[KeyCode] = &[KeyCode::Char(' ')];

pub struct TerminalInput {
    rx: mpsc::Receiver<Event>,
    // Maps each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
}

impl TerminalInput {
    pub fn new(rx: mpsc::Receiver<Event>) -> Self {
        TerminalInput {
            rx,
            key_frame: HashMap::new(),
            frame: 0,
        }
    }

    fn is_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| {
            self.key_frame
                .get(key)
                .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
                .unwrap_or(false)
        })
    }

    /// Record one event; one-shot actions (quit, confirm) go straight into `input`.
    fn handle(&mut self, event: Event, input: &mut InputFrame) {
        match event {
            Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                KeyEventKind::Press => {
                    self.key_frame.insert(code, self.frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => input.quit = true,
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            input.quit = true
                        }
                        KeyCode::Enter => input.confirm = true,
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    self.key_frame.insert(code, self.frame);
                }
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                }
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(_),
                ..
            }) => input.confirm = true,
            _ => {}
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> InputFrame {
        self.frame += 1;
        let mut input = InputFrame::default();

        // Drain all pending events (non-blocking)
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.handle(event, &mut input),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("input thread stopped");
                    input.quit = true;
                    break;
                }
            }
        }

        input.left = self.is_held(LEFT_KEYS);
        input.right = self.is_held(RIGHT_KEYS);
        input.up = self.is_held(UP_KEYS);
        input.down = self.is_held(DOWN_KEYS);
        input.fire = self.is_held(FIRE_KEYS);
        input
    }
}
