//! Command dispatch table.
//!
//! Every control of the pad maps to one action identifier. Scripts (and any
//! UI front end) speak in [`Command`] values built from those identifiers;
//! [`crate::pad::Pad::execute`] dispatches each command to a core operation.

use crate::draw::{Color, ColorParseError};
use crate::input::Tool;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

/// All discrete actions the pad understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Tool selection
    SelectTool,
    AddText,

    // Style controls
    SetColor,
    SetBrushSize,
    SetFontSize,
    SetText,

    // Pointer events
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,

    // Image underlay
    Upload,
    AwaitUploads,
    RemoveImage,

    // Surface actions
    ClearDrawings,
    ClearAll,
    Grayscale,
    Save,
}

impl Action {
    /// Every action, in the order they are listed in help output.
    pub const ALL: [Action; 17] = [
        Action::SelectTool,
        Action::AddText,
        Action::SetColor,
        Action::SetBrushSize,
        Action::SetFontSize,
        Action::SetText,
        Action::PointerDown,
        Action::PointerMove,
        Action::PointerUp,
        Action::PointerLeave,
        Action::Upload,
        Action::AwaitUploads,
        Action::RemoveImage,
        Action::ClearDrawings,
        Action::ClearAll,
        Action::Grayscale,
        Action::Save,
    ];

    /// The identifier used in scripts.
    pub fn identifier(self) -> &'static str {
        match self {
            Action::SelectTool => "select_tool",
            Action::AddText => "add_text",
            Action::SetColor => "set_color",
            Action::SetBrushSize => "set_brush_size",
            Action::SetFontSize => "set_font_size",
            Action::SetText => "set_text",
            Action::PointerDown => "pointer_down",
            Action::PointerMove => "pointer_move",
            Action::PointerUp => "pointer_up",
            Action::PointerLeave => "pointer_leave",
            Action::Upload => "upload",
            Action::AwaitUploads => "await_uploads",
            Action::RemoveImage => "remove_image",
            Action::ClearDrawings => "clear_drawings",
            Action::ClearAll => "clear_all",
            Action::Grayscale => "grayscale",
            Action::Save => "save",
        }
    }

    /// Looks up an action by identifier.
    pub fn from_identifier(identifier: &str) -> Option<Action> {
        action_map().get(identifier).copied()
    }
}

/// Identifier → action lookup, built once.
fn action_map() -> &'static HashMap<&'static str, Action> {
    static MAP: OnceLock<HashMap<&'static str, Action>> = OnceLock::new();
    MAP.get_or_init(|| {
        Action::ALL
            .into_iter()
            .map(|action| (action.identifier(), action))
            .collect()
    })
}

/// An action together with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectTool(Tool),
    AddText,
    SetColor(Color),
    SetBrushSize(u32),
    SetFontSize(u32),
    SetText(String),
    PointerDown { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp,
    PointerLeave,
    Upload(PathBuf),
    AwaitUploads,
    RemoveImage,
    ClearDrawings,
    ClearAll,
    Grayscale,
    Save,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("'{action}' expects {expected}")]
    MissingArgument {
        action: &'static str,
        expected: &'static str,
    },

    #[error("'{action}' got unexpected argument '{argument}'")]
    UnexpectedArgument {
        action: &'static str,
        argument: String,
    },

    #[error("invalid {what} '{value}'")]
    InvalidNumber { what: &'static str, value: String },

    #[error("unknown tool '{0}' (expected pen, eraser or text)")]
    UnknownTool(String),

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<CommandError>,
    },
}

impl Command {
    /// The action this command dispatches to.
    pub fn action(&self) -> Action {
        match self {
            Command::SelectTool(_) => Action::SelectTool,
            Command::AddText => Action::AddText,
            Command::SetColor(_) => Action::SetColor,
            Command::SetBrushSize(_) => Action::SetBrushSize,
            Command::SetFontSize(_) => Action::SetFontSize,
            Command::SetText(_) => Action::SetText,
            Command::PointerDown { .. } => Action::PointerDown,
            Command::PointerMove { .. } => Action::PointerMove,
            Command::PointerUp => Action::PointerUp,
            Command::PointerLeave => Action::PointerLeave,
            Command::Upload(_) => Action::Upload,
            Command::AwaitUploads => Action::AwaitUploads,
            Command::RemoveImage => Action::RemoveImage,
            Command::ClearDrawings => Action::ClearDrawings,
            Command::ClearAll => Action::ClearAll,
            Command::Grayscale => Action::Grayscale,
            Command::Save => Action::Save,
        }
    }

    /// Parses one script line: an action identifier followed by its arguments.
    ///
    /// `set_text` and `upload` take the rest of the line verbatim (after the
    /// single separating space), so text may contain spaces.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim_start();
        let (identifier, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let action = Action::from_identifier(identifier)
            .ok_or_else(|| CommandError::UnknownAction(identifier.to_string()))?;
        let name = action.identifier();
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match action {
            Action::SelectTool => {
                let [tool] = exact_args(name, &args, "a tool name")?;
                Command::SelectTool(
                    Tool::from_name(tool).ok_or_else(|| CommandError::UnknownTool(tool.into()))?,
                )
            }
            Action::SetColor => {
                let [color] = exact_args(name, &args, "a color")?;
                Command::SetColor(Color::parse(color)?)
            }
            Action::SetBrushSize => {
                let [size] = exact_args(name, &args, "a size in pixels")?;
                Command::SetBrushSize(parse_size("brush size", size)?)
            }
            Action::SetFontSize => {
                let [size] = exact_args(name, &args, "a size in pixels")?;
                Command::SetFontSize(parse_size("font size", size)?)
            }
            Action::SetText => Command::SetText(rest.trim_end_matches(['\r', '\n']).to_string()),
            Action::PointerDown | Action::PointerMove => {
                let [x, y] = exact_args(name, &args, "x and y coordinates")?;
                let (x, y) = (parse_coord(x)?, parse_coord(y)?);
                if action == Action::PointerDown {
                    Command::PointerDown { x, y }
                } else {
                    Command::PointerMove { x, y }
                }
            }
            Action::Upload => {
                let path = rest.trim();
                if path.is_empty() {
                    return Err(CommandError::MissingArgument {
                        action: name,
                        expected: "a file path",
                    });
                }
                Command::Upload(PathBuf::from(path))
            }
            Action::AddText
            | Action::PointerUp
            | Action::PointerLeave
            | Action::AwaitUploads
            | Action::RemoveImage
            | Action::ClearDrawings
            | Action::ClearAll
            | Action::Grayscale
            | Action::Save => {
                if let Some(extra) = args.first() {
                    return Err(CommandError::UnexpectedArgument {
                        action: name,
                        argument: extra.to_string(),
                    });
                }
                match action {
                    Action::AddText => Command::AddText,
                    Action::PointerUp => Command::PointerUp,
                    Action::PointerLeave => Command::PointerLeave,
                    Action::AwaitUploads => Command::AwaitUploads,
                    Action::RemoveImage => Command::RemoveImage,
                    Action::ClearDrawings => Command::ClearDrawings,
                    Action::ClearAll => Command::ClearAll,
                    Action::Grayscale => Command::Grayscale,
                    _ => Command::Save,
                }
            }
        };

        Ok(command)
    }
}

/// Parses a whole script. Blank lines and `#` comments are skipped.
///
/// Errors carry the 1-based line number.
pub fn parse_script(source: &str) -> Result<Vec<Command>, CommandError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| {
            Command::parse(line).map_err(|err| CommandError::AtLine {
                line: idx + 1,
                source: Box::new(err),
            })
        })
        .collect()
}

fn exact_args<'a, const N: usize>(
    action: &'static str,
    args: &[&'a str],
    expected: &'static str,
) -> Result<[&'a str; N], CommandError> {
    if args.len() > N {
        return Err(CommandError::UnexpectedArgument {
            action,
            argument: args[N].to_string(),
        });
    }
    args.try_into()
        .map_err(|_| CommandError::MissingArgument { action, expected })
}

fn parse_size(what: &'static str, value: &str) -> Result<u32, CommandError> {
    match value.parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(CommandError::InvalidNumber {
            what,
            value: value.to_string(),
        }),
    }
}

fn parse_coord(value: &str) -> Result<i32, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        what: "coordinate",
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLACK;

    #[test]
    fn every_identifier_maps_back_to_its_action() {
        for action in Action::ALL {
            assert_eq!(Action::from_identifier(action.identifier()), Some(action));
        }
        assert_eq!(Action::from_identifier("explode"), None);
    }

    #[test]
    fn identifiers_match_serde_names() {
        for action in Action::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.identifier()));
        }
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            Command::parse("select_tool eraser").unwrap(),
            Command::SelectTool(Tool::Eraser)
        );
        assert_eq!(
            Command::parse("set_color #000000").unwrap(),
            Command::SetColor(BLACK)
        );
        assert_eq!(
            Command::parse("set_brush_size 5").unwrap(),
            Command::SetBrushSize(5)
        );
        assert_eq!(
            Command::parse("pointer_move 100 -3").unwrap(),
            Command::PointerMove { x: 100, y: -3 }
        );
        assert_eq!(
            Command::parse("upload /tmp/my photo.png").unwrap(),
            Command::Upload(PathBuf::from("/tmp/my photo.png"))
        );
        assert_eq!(Command::parse("  clear_all").unwrap(), Command::ClearAll);
    }

    #[test]
    fn set_text_keeps_inner_whitespace() {
        assert_eq!(
            Command::parse("set_text Hello  world ").unwrap(),
            Command::SetText("Hello  world ".into())
        );
        assert_eq!(
            Command::parse("set_text    ").unwrap(),
            Command::SetText("   ".into())
        );
        assert_eq!(Command::parse("set_text").unwrap(), Command::SetText("".into()));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(
            Command::parse("paint 1 2").unwrap_err(),
            CommandError::UnknownAction("paint".into())
        );
        assert!(matches!(
            Command::parse("pointer_down 10").unwrap_err(),
            CommandError::MissingArgument { .. }
        ));
        assert!(matches!(
            Command::parse("pointer_down 10 10 10").unwrap_err(),
            CommandError::UnexpectedArgument { .. }
        ));
        assert!(matches!(
            Command::parse("set_brush_size 0").unwrap_err(),
            CommandError::InvalidNumber { .. }
        ));
        assert!(matches!(
            Command::parse("set_font_size big").unwrap_err(),
            CommandError::InvalidNumber { .. }
        ));
        assert_eq!(
            Command::parse("select_tool brush").unwrap_err(),
            CommandError::UnknownTool("brush".into())
        );
        assert!(matches!(
            Command::parse("set_color #zzz").unwrap_err(),
            CommandError::InvalidColor(_)
        ));
        assert!(matches!(
            Command::parse("save now").unwrap_err(),
            CommandError::UnexpectedArgument { .. }
        ));
        assert!(matches!(
            Command::parse("upload").unwrap_err(),
            CommandError::MissingArgument { .. }
        ));
    }

    #[test]
    fn script_skips_comments_and_reports_line_numbers() {
        let script = "# draw a line\nselect_tool pen\n\npointer_down 1 1\n  # indented comment\npointer_up\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].action(), Action::SelectTool);

        let err = parse_script("pointer_up\nbogus\n").unwrap_err();
        assert!(matches!(err, CommandError::AtLine { line: 2, .. }));
        assert!(err.to_string().starts_with("line 2: unknown action 'bogus'"));
    }
}
