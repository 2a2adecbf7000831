#[allow(unused_macros)]
macro_rules! strs {
    ( $( $ss: expr ),* ) => {
        vec![ $( String::from($ss), )* ]
    };
}

#[allow(unused_macros)]
macro_rules! key {
    ($k: literal) => {
        $k.parse::<$crate::key::KeyDescriptor>().unwrap()
    };
}

#[allow(unused_macros)]
macro_rules! mods {
    ($m: literal) => {
        $m.parse::<$crate::key::Modifiers>().unwrap()
    };
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use crate::errors::FormatError;
    use crate::format::{FormatColor, FormatItem, Formatter};
    use crate::host::{EventHandler, EventSource, Host, StatusWindow};
    use crate::mode::ActivateKeyTable;

    /// Action type used by test hosts.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum TestAction {
        Activate(ActivateKeyTable),
        Split,
        Close,
        Next,
    }

    /// A host whose formatter writes a readable markup instead of escape codes, and which can be
    /// told to fail once it sees a given piece of text.
    #[derive(Default)]
    pub struct TestHost {
        pub fail_on: Option<String>,
        pub calls: Cell<usize>,
    }

    impl TestHost {
        pub fn failing_on(text: &str) -> Self {
            TestHost { fail_on: Some(text.to_string()), calls: Cell::new(0) }
        }
    }

    impl Formatter for TestHost {
        fn format(&self, items: &[FormatItem]) -> Result<String, FormatError> {
            self.calls.set(self.calls.get() + 1);

            let mut out = String::new();

            for item in items {
                match item {
                    FormatItem::Attribute(_) => {},
                    FormatItem::Foreground(FormatColor::Color(c) | FormatColor::AnsiColor(c)) => {
                        out.push_str(&format!("[fg:{c}]"));
                    },
                    FormatItem::Background(FormatColor::Color(c) | FormatColor::AnsiColor(c)) => {
                        out.push_str(&format!("[bg:{c}]"));
                    },
                    FormatItem::Text(t) => {
                        if matches!(&self.fail_on, Some(f) if t.contains(f.as_str())) {
                            return Err(FormatError::Host(format!("refusing {t:?}")));
                        }

                        out.push_str(t);
                    },
                }
            }

            return Ok(out);
        }
    }

    impl Host for TestHost {
        type Action = TestAction;

        fn activate_key_table(&self, args: ActivateKeyTable) -> TestAction {
            TestAction::Activate(args)
        }
    }

    /// A window that records what the status hook pushes to it.
    #[derive(Default)]
    pub struct TestWindow {
        pub active: Option<String>,
        pub status: Option<String>,
    }

    impl TestWindow {
        pub fn in_table(name: &str) -> Self {
            TestWindow { active: Some(name.to_string()), status: None }
        }
    }

    impl StatusWindow for TestWindow {
        fn active_key_table(&self) -> Option<String> {
            self.active.clone()
        }

        fn set_right_status(&mut self, text: &str) {
            self.status = Some(text.to_string());
        }
    }

    /// An event source that keeps handlers around so tests can fire them.
    #[derive(Default)]
    pub struct TestEvents {
        handlers: RefCell<HashMap<String, Vec<EventHandler>>>,
    }

    impl TestEvents {
        pub fn emit(&self, event: &str, window: &mut dyn StatusWindow) -> usize {
            let mut handlers = self.handlers.borrow_mut();
            let Some(hs) = handlers.get_mut(event) else {
                return 0;
            };

            for h in hs.iter_mut() {
                h(window);
            }

            return hs.len();
        }
    }

    impl EventSource for TestEvents {
        fn on(&mut self, event: &str, handler: EventHandler) {
            self.handlers.borrow_mut().entry(event.to_string()).or_default().push(handler);
        }
    }
}
