//! Plain-text rendering of screens.

use std::fmt::Write as _;

use card_core::card::{card_height, photo_size};
use card_core::{
    BackgroundColor, CardView, Composer, Decoration, FontFamily, FontSize, HomeScreen, Screen,
    SplashScreen,
};

const RULE: &str = "────────────────────────────────────────";

/// Nominal card width in pixels, used to report card and photo sizes.
const CARD_WIDTH: f32 = 340.0;

/// Render whichever screen is mounted.
#[must_use]
pub fn screen(screen: &Screen) -> String {
    match screen {
        Screen::Splash(splash) => splash_screen(splash),
        Screen::Home(home) => home_screen(home),
        Screen::Composer(composer) => composer_screen(composer),
        Screen::Preview(preview) => {
            let mut out = String::from("== Your Card ==\n");
            out.push_str(&card(&preview.view()));
            out
        }
    }
}

fn splash_screen(splash: &SplashScreen) -> String {
    format!("[ {} ]\n", splash.logo().path)
}

fn home_screen(home: &HomeScreen) -> String {
    let action = if home.busy().is_busy() {
        "(loading...)".to_string()
    } else {
        format!("[ {} ]  -> create", HomeScreen::CREATE_LABEL)
    };
    format!(
        "[ {} ]\n{}\n\n{action}\n",
        home.logo().path,
        HomeScreen::TITLE
    )
}

fn composer_screen(composer: &Composer) -> String {
    let card_data = composer.card();
    let mut out = card(&composer.live_preview());

    let _ = writeln!(out, "to:       {}", card_data.recipient_name());
    let fonts = FontFamily::ALL
        .iter()
        .map(|f| mark(f.name(), *f == card_data.font_family()))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "font:     {fonts}");
    let sizes = FontSize::ALL
        .iter()
        .map(|s| mark(&s.points().to_string(), *s == card_data.font_size()))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "size:     {sizes}");
    let style = card_data.style();
    let _ = writeln!(
        out,
        "style:    {} {} {}",
        mark("B", style.bold),
        mark("I", style.italic),
        mark("U", style.underline)
    );
    let colors = BackgroundColor::PALETTE
        .iter()
        .map(|c| mark(c.name(), composer.is_selected(*c)))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "color:    {colors}");
    let decorations = Decoration::ALL
        .iter()
        .map(|d| d.symbol())
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "decorate: {decorations}");

    if composer.busy().is_busy() {
        out.push_str("(loading...)\n");
    } else {
        out.push_str("[ Preview Card ]  -> preview\n");
    }
    out
}

/// Wrap the active option in brackets.
fn mark(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

/// Render a card view inside a left-ruled box.
#[must_use]
pub fn card(view: &CardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "┌{RULE}");
    let _ = writeln!(
        out,
        "│ ({} {}, {CARD_WIDTH:.0}x{:.0})",
        view.background.name(),
        view.background.hex(),
        card_height(CARD_WIDTH)
    );
    if let Some(photo) = &view.photo {
        let (width, height) = photo_size(CARD_WIDTH);
        let _ = writeln!(out, "│ [photo {}, {width:.0}x{height:.0}]", photo.uri);
    }
    if let Some(recipient) = &view.recipient {
        let _ = writeln!(out, "│ {recipient}");
    }
    for line in &view.message_lines {
        let _ = writeln!(out, "│ {}", styled(line, view));
    }
    if !view.decorations.is_empty() {
        let _ = writeln!(out, "│ {}", view.decoration_row());
    }
    let _ = writeln!(out, "│ ({})", style_note(view));
    let _ = writeln!(out, "└{RULE}");
    out
}

/// Markdown-ish emphasis so style survives a plain terminal.
fn styled(line: &str, view: &CardView) -> String {
    let mut text = line.to_string();
    if view.style.italic {
        text = format!("_{text}_");
    }
    if view.style.bold {
        text = format!("**{text}**");
    }
    if view.style.underline {
        text = format!("<u>{text}</u>");
    }
    text
}

fn style_note(view: &CardView) -> String {
    let mut parts = vec![view.font_family.name().to_string(), view.font_size.to_string()];
    for (on, name) in [
        (view.style.bold, "bold"),
        (view.style.italic, "italic"),
        (view.style.underline, "underline"),
    ] {
        if on {
            parts.push(name.to_string());
        }
    }
    parts.join(", ")
}
