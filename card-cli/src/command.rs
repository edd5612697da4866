//! Line-oriented command language.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped, so script files can carry comments.

use std::path::PathBuf;

use card_core::{CardError, UiEvent};
use thiserror::Error;

/// Text printed by `help`.
pub const HELP: &str = "\
commands:
  create                  start a new card (Home)
  name <text>             recipient name
  message <text>          card message, \\n for a line break
  bold | italic | underline
  color <name|#hex>       white, light-pink, sky-blue, pale-green, plum, khaki
  font <family>           arial, courier-new, georgia, times-new-roman, verdana
  size <points>           12 14 16 18 20 24 28
  decorate <emoji|name>   party cake balloon gift sparkles
  image [path]            pick a photo; no path cancels the picker
  preview                 finish and preview the card
  back | show | help | quit";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the app.
    Event(UiEvent),
    /// Run the image picker; `None` means the user cancelled.
    PickImage(Option<PathBuf>),
    /// Redraw the current screen.
    Show,
    /// Print the command list.
    Help,
    /// Exit.
    Quit,
}

/// Errors that can occur while parsing a command line.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The verb is not part of the language.
    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    /// The verb needs an argument.
    #[error("Missing {0}")]
    MissingArgument(&'static str),

    /// The argument is not one of the offered options.
    #[error(transparent)]
    InvalidOption(#[from] CardError),
}

/// Parse one input line. Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown verbs, missing arguments, and
/// options outside their option set.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let required = |what: &'static str| {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(what))
        } else {
            Ok(rest)
        }
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "create" => Command::Event(UiEvent::CreateCard),
        "name" => Command::Event(UiEvent::RecipientNameChanged(rest.to_string())),
        "message" | "msg" => Command::Event(UiEvent::MessageChanged(unescape(rest))),
        "bold" => Command::Event(UiEvent::ToggleBold),
        "italic" => Command::Event(UiEvent::ToggleItalic),
        "underline" => Command::Event(UiEvent::ToggleUnderline),
        "color" | "colour" => {
            Command::Event(UiEvent::BackgroundSelected(required("color")?.parse()?))
        }
        "font" => Command::Event(UiEvent::FontFamilySelected(required("font family")?.parse()?)),
        "size" => Command::Event(UiEvent::FontSizeSelected(required("font size")?.parse()?)),
        "decorate" | "deco" => {
            Command::Event(UiEvent::DecorationAdded(required("decoration")?.parse()?))
        }
        "image" | "photo" => {
            Command::PickImage(Some(rest).filter(|p| !p.is_empty()).map(PathBuf::from))
        }
        "preview" | "confirm" => Command::Event(UiEvent::Confirm),
        "back" => Command::Event(UiEvent::Back),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::UnknownCommand(verb.to_string())),
    };
    Ok(Some(command))
}

/// Turn `\n` into a line break and `\\` into a backslash.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') | None => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_core::{BackgroundColor, Decoration, FontFamily, FontSize};

    fn event(line: &str) -> UiEvent {
        match parse(line) {
            Ok(Some(Command::Event(event))) => event,
            other => panic!("Expected event for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_skips_blank_and_comments() {
        assert!(parse("").expect("blank").is_none());
        assert!(parse("   # a comment").expect("comment").is_none());
    }

    #[test]
    fn test_text_fields_keep_inner_spaces() {
        assert_eq!(
            event("name  Sam  Smith "),
            UiEvent::RecipientNameChanged("Sam  Smith".to_string())
        );
        assert_eq!(event("name"), UiEvent::RecipientNameChanged(String::new()));
    }

    #[test]
    fn test_message_escapes() {
        assert_eq!(
            event(r"message Happy\nBirthday \\o/"),
            UiEvent::MessageChanged("Happy\nBirthday \\o/".to_string())
        );
    }

    #[test]
    fn test_option_commands() {
        assert_eq!(
            event("color plum"),
            UiEvent::BackgroundSelected(BackgroundColor::Plum)
        );
        assert_eq!(
            event("font times-new-roman"),
            UiEvent::FontFamilySelected(FontFamily::TimesNewRoman)
        );
        assert_eq!(
            event("size 20"),
            UiEvent::FontSizeSelected(FontSize::try_from(20u8).expect("listed size"))
        );
        assert_eq!(
            event("decorate 🎉"),
            UiEvent::DecorationAdded(Decoration::PartyPopper)
        );
    }

    #[test]
    fn test_rejects_unlisted_options() {
        assert!(matches!(parse("size 13"), Err(CommandError::InvalidOption(_))));
        assert!(matches!(parse("font Papyrus"), Err(CommandError::InvalidOption(_))));
        assert!(matches!(
            parse("color"),
            Err(CommandError::MissingArgument("color"))
        ));
    }

    #[test]
    fn test_image_with_and_without_path() {
        assert_eq!(
            parse("image /tmp/cat.png").expect("parses"),
            Some(Command::PickImage(Some(PathBuf::from("/tmp/cat.png"))))
        );
        assert_eq!(
            parse("image").expect("parses"),
            Some(Command::PickImage(None))
        );
    }

    #[test]
    fn test_unknown_verb() {
        assert!(matches!(
            parse("dance"),
            Err(CommandError::UnknownCommand(v)) if v == "dance"
        ));
    }
}
