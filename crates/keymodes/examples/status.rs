//! # Status lines
//!
//! This example registers a couple of modes, prints the bindings that would be installed into the
//! host, and then prints each mode's status line as the host would draw it. Pass a JSON object
//! as the first argument to override the default options:
//!
//! ```text
//! cargo run --example status -- '{"theme": {"hint_color": "cyan"}, "badge_glyph": "|"}'
//! ```
use std::error::Error;

use keymodes::{
    ActivateKeyTable,
    AnsiFormatter,
    FormatError,
    FormatItem,
    Formatter,
    Host,
    Mode,
    Registry,
    StatusWindow,
};

#[derive(Clone, Debug)]
enum Action {
    ActivateKeyTable(ActivateKeyTable),
    SplitHorizontal,
    SplitVertical,
    ClosePane,
    SpawnTab,
    NextTab,
}

struct Terminal;

impl Formatter for Terminal {
    fn format(&self, items: &[FormatItem]) -> Result<String, FormatError> {
        AnsiFormatter.format(items)
    }
}

impl Host for Terminal {
    type Action = Action;

    fn activate_key_table(&self, args: ActivateKeyTable) -> Action {
        Action::ActivateKeyTable(args)
    }
}

struct Window {
    active: Option<String>,
}

impl StatusWindow for Window {
    fn active_key_table(&self) -> Option<String> {
        self.active.clone()
    }

    fn set_right_status(&mut self, text: &str) {
        let name = self.active.as_deref().unwrap_or("(none)");

        println!("{name:>8}: {text}");
    }
}

fn modes() -> Result<Vec<Mode<Action>>, Box<dyn Error>> {
    let pane = Mode::new("pane", "p".parse()?, "blue")
        .bind("h".parse()?, None, Action::SplitHorizontal, "split horizontal")
        .bind("v".parse()?, None, Action::SplitVertical, "split vertical")
        .bind("x".parse()?, None, Action::ClosePane, "close")
        .until_unknown(true);

    let tab = Mode::new("tab", "phys:t".parse()?, "yellow")
        .bind("c".parse()?, None, Action::SpawnTab, "new")
        .bind("n".parse()?, Some("SHIFT".parse()?), Action::NextTab, "next")
        .one_shot(true);

    Ok(vec![pane, tab])
}

fn main() -> Result<(), Box<dyn Error>> {
    let overrides: Option<serde_json::Value> = match std::env::args().nth(1) {
        Some(arg) => Some(serde_json::from_str(&arg)?),
        None => None,
    };

    let registry = Registry::build(&Terminal, modes()?, overrides.as_ref())?;

    for bind in registry.keys() {
        let mods = bind.mods.unwrap_or_default();

        match &bind.action {
            Action::ActivateKeyTable(args) => {
                println!("{mods}+{} => enter {:?} (one shot: {})", bind.key, args.name, args.one_shot);
            },
            action => {
                println!("{mods}+{} => {action:?}", bind.key);
            },
        }
    }

    println!();

    for active in [None, Some("pane"), Some("tab")] {
        let mut window = Window { active: active.map(String::from) };

        registry.update_status(&mut window);
    }

    Ok(())
}
