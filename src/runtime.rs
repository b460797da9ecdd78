use std::io;
use std::sync::mpsc::Receiver;

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::Session;

/// Terminal events the input loop reacts to
#[derive(Clone, Debug)]
pub enum TyperEvent {
    Key(KeyEvent),
    Resize,
}

/// Source of terminal events (keyboard, resize)
pub trait TyperEventSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> io::Result<TyperEvent>;
}

/// Production event source reading crossterm events on the calling thread
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEventSource;

impl TyperEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> io::Result<TyperEvent> {
        loop {
            match event::read()? {
                CtEvent::Key(key) => return Ok(TyperEvent::Key(key)),
                CtEvent::Resize(_, _) => return Ok(TyperEvent::Resize),
                _ => {}
            }
        }
    }
}

/// Scripted event source for headless tests
pub struct TestEventSource {
    rx: Receiver<TyperEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<TyperEvent>) -> Self {
        Self { rx }
    }
}

impl TyperEventSource for TestEventSource {
    fn next_event(&mut self) -> io::Result<TyperEvent> {
        self.rx
            .recv()
            .map_err(|_| io::Error::new(io::ErrorKind::UnexpectedEof, "event source closed"))
    }
}

/// What a key press means to a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Type(char),
    Backspace,
    Interrupt,
    Ignore,
}

impl From<&KeyEvent> for KeyAction {
    fn from(key: &KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return KeyAction::Ignore;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            // raw mode swallows SIGINT, ctrl+c arrives as a key
            KeyCode::Char('c') if ctrl => KeyAction::Interrupt,
            KeyCode::Esc => KeyAction::Interrupt,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(_) if ctrl => KeyAction::Ignore,
            KeyCode::Char(c) if !c.is_control() => KeyAction::Type(c),
            _ => KeyAction::Ignore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Completed,
    Interrupted,
}

/// Runner that feeds events into a session until it completes or is aborted
pub struct Runner<E: TyperEventSource> {
    event_source: E,
}

impl<E: TyperEventSource> Runner<E> {
    pub fn new(event_source: E) -> Self {
        Self { event_source }
    }

    /// Drives `session` to completion, calling `draw` after every change
    /// and on resize.
    pub fn run<F>(&mut self, session: &mut Session, mut draw: F) -> io::Result<LoopExit>
    where
        F: FnMut(&Session) -> io::Result<()>,
    {
        draw(session)?;

        while !session.has_finished() {
            match self.event_source.next_event()? {
                TyperEvent::Resize => {}
                TyperEvent::Key(key) => match KeyAction::from(&key) {
                    KeyAction::Interrupt => return Ok(LoopExit::Interrupted),
                    KeyAction::Backspace => session.backspace(),
                    KeyAction::Type(c) => session.write(c),
                    KeyAction::Ignore => continue,
                },
            }
            draw(session)?;
        }

        Ok(LoopExit::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing_policy::TypingPolicy;
    use crossterm::event::KeyEventState;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;

    fn key(code: KeyCode) -> TyperEvent {
        TyperEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn runner_with(events: Vec<TyperEvent>) -> Runner<TestEventSource> {
        let (tx, rx) = mpsc::channel();
        for ev in events {
            tx.send(ev).unwrap();
        }
        Runner::new(TestEventSource::new(rx))
    }

    #[test]
    fn key_action_mapping() {
        let plain = |code| KeyAction::from(&KeyEvent::new(code, KeyModifiers::NONE));

        assert_eq!(plain(KeyCode::Char('a')), KeyAction::Type('a'));
        assert_eq!(plain(KeyCode::Char(' ')), KeyAction::Type(' '));
        assert_eq!(plain(KeyCode::Backspace), KeyAction::Backspace);
        assert_eq!(plain(KeyCode::Esc), KeyAction::Interrupt);
        assert_eq!(plain(KeyCode::Enter), KeyAction::Ignore);
        assert_eq!(plain(KeyCode::Tab), KeyAction::Ignore);
        assert_eq!(plain(KeyCode::Left), KeyAction::Ignore);
    }

    #[test]
    fn key_action_modifiers() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        let shift_a = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);

        assert_eq!(KeyAction::from(&ctrl_c), KeyAction::Interrupt);
        assert_eq!(KeyAction::from(&ctrl_a), KeyAction::Ignore);
        assert_eq!(KeyAction::from(&shift_a), KeyAction::Type('A'));
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(KeyAction::from(&release), KeyAction::Ignore);
    }

    #[test]
    fn run_completes_session() {
        let mut session = Session::new(vec!["hi".to_string()], TypingPolicy::Normal);
        let mut runner = runner_with(vec![key(KeyCode::Char('h')), key(KeyCode::Char('i'))]);
        let mut frames = 0;

        let exit = runner
            .run(&mut session, |_| {
                frames += 1;
                Ok(())
            })
            .unwrap();

        assert_eq!(exit, LoopExit::Completed);
        assert!(session.has_finished());
        // initial frame plus one per keystroke
        assert_eq!(frames, 3);
    }

    #[test]
    fn run_handles_backspace() {
        let mut session = Session::new(vec!["ab".to_string()], TypingPolicy::Normal);
        let mut runner = runner_with(vec![
            key(KeyCode::Char('a')),
            key(KeyCode::Char('x')),
            key(KeyCode::Backspace),
            key(KeyCode::Char('b')),
        ]);

        let exit = runner.run(&mut session, |_| Ok(())).unwrap();

        assert_eq!(exit, LoopExit::Completed);
        assert_eq!(session.typed(), "ab");
        assert_eq!(session.correct_chars, 2);
        assert_eq!(session.total_chars, 3);
    }

    #[test]
    fn run_stops_on_interrupt() {
        let mut session = Session::new(vec!["hello".to_string()], TypingPolicy::Normal);
        let mut runner = runner_with(vec![
            key(KeyCode::Char('h')),
            TyperEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            key(KeyCode::Char('e')),
        ]);

        let exit = runner.run(&mut session, |_| Ok(())).unwrap();

        assert_eq!(exit, LoopExit::Interrupted);
        assert_eq!(session.typed(), "h");
        assert!(!session.has_finished());
    }

    #[test]
    fn run_redraws_on_resize() {
        let mut session = Session::new(vec!["a".to_string()], TypingPolicy::Normal);
        let mut runner = runner_with(vec![TyperEvent::Resize, key(KeyCode::Char('a'))]);
        let mut frames = 0;

        runner
            .run(&mut session, |_| {
                frames += 1;
                Ok(())
            })
            .unwrap();

        assert_eq!(frames, 3);
    }

    #[test]
    fn run_reports_closed_source() {
        let mut session = Session::new(vec!["abc".to_string()], TypingPolicy::Normal);
        let mut runner = runner_with(vec![key(KeyCode::Char('a'))]);

        let err = runner.run(&mut session, |_| Ok(())).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn run_propagates_draw_errors() {
        let mut session = Session::new(vec!["abc".to_string()], TypingPolicy::Normal);
        let mut runner = runner_with(vec![]);

        let err = runner
            .run(&mut session, |_| Err(io::Error::other("draw failed")))
            .unwrap_err();

        assert_eq!(err.to_string(), "draw failed");
    }

    static RUNTIME_RECORDS: AtomicUsize = AtomicUsize::new(0);

    struct CountingLogger;

    impl log::Log for CountingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if record.target().starts_with("typer::runtime") {
                RUNTIME_RECORDS.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn flush(&self) {}
    }

    // stderr belongs to the alternate screen while the loop runs
    #[test]
    fn run_does_not_log() {
        let _ = log::set_logger(&CountingLogger);
        log::set_max_level(log::LevelFilter::Trace);

        let mut session = Session::new(vec!["ab".to_string()], TypingPolicy::Normal);
        let mut runner = runner_with(vec![key(KeyCode::Char('a')), key(KeyCode::Char('b'))]);
        assert_eq!(
            runner.run(&mut session, |_| Ok(())).unwrap(),
            LoopExit::Completed
        );

        let mut session = Session::new(vec!["ab".to_string()], TypingPolicy::Normal);
        let mut runner = runner_with(vec![key(KeyCode::Esc)]);
        assert_eq!(
            runner.run(&mut session, |_| Ok(())).unwrap(),
            LoopExit::Interrupted
        );

        assert_eq!(RUNTIME_RECORDS.load(Ordering::SeqCst), 0);
    }
}
