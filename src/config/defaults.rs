//! Default values for configuration fields.

use crate::apps::{ComponentName, DeckEntry, DeckEntryKind, Intent};

pub(super) fn outer_hit_padding() -> f32 {
    24.0
}

pub(super) fn inner_hit_padding() -> f32 {
    12.0
}

pub(super) fn drag_tint() -> [u8; 4] {
    [96, 176, 255, 110]
}

/// Starter deck shown on first launch.
pub(super) fn entries() -> Vec<DeckEntry> {
    vec![
        app("Browser", "🌐", [47, 111, 177], "org.example.browser", "MainActivity"),
        app("Mail", "✉", [64, 140, 112], "org.example.mail", "InboxActivity"),
        app("Terminal", "❯", [52, 58, 64], "org.example.terminal", "ShellActivity"),
        app("Music", "♫", [129, 94, 187], "org.example.music", "PlayerActivity"),
        DeckEntry {
            title: "Compose".into(),
            glyph: "✎".into(),
            accent: [192, 138, 43],
            kind: DeckEntryKind::Shortcut {
                intent: Intent::for_action("org.example.mail.COMPOSE")
                    .with_component(ComponentName::new("org.example.mail", "ComposeActivity")),
            },
        },
        DeckEntry {
            title: "Games".into(),
            glyph: "▦".into(),
            accent: [192, 57, 43],
            kind: DeckEntryKind::Group {
                members: vec!["Chess".into(), "Go".into()],
            },
        },
    ]
}

fn app(title: &str, glyph: &str, accent: [u8; 3], package: &str, class: &str) -> DeckEntry {
    DeckEntry {
        title: title.into(),
        glyph: glyph.into(),
        accent,
        kind: DeckEntryKind::App {
            component: ComponentName::new(package, class),
        },
    }
}
