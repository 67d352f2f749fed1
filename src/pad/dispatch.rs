use crate::command::Command;
use crate::input::{PointerEvent, Tool};

use super::{Pad, PadError};

impl Pad {
    /// Dispatches one command to the operation it names.
    pub fn execute(&mut self, command: Command) -> Result<(), PadError> {
        log::debug!("Executing {}", command.action().identifier());

        match command {
            Command::SelectTool(tool) => self.select_tool(tool),
            Command::AddText => self.select_tool(Tool::Text),
            Command::SetColor(color) => self.set_color(color),
            Command::SetBrushSize(size) => self.set_brush_size(size),
            Command::SetFontSize(size) => self.set_font_size(size),
            Command::SetText(text) => self.set_text(text),
            Command::PointerDown { x, y } => self.pointer(PointerEvent::Down { x, y })?,
            Command::PointerMove { x, y } => self.pointer(PointerEvent::Move { x, y })?,
            Command::PointerUp => self.pointer(PointerEvent::Up)?,
            Command::PointerLeave => self.pointer(PointerEvent::Leave)?,
            Command::Upload(path) => {
                self.request_upload(&path)?;
            }
            Command::AwaitUploads => {
                self.wait_for_uploads()?;
            }
            Command::RemoveImage => self.remove_image()?,
            Command::ClearDrawings => self.clear_drawings()?,
            Command::ClearAll => self.clear_all()?,
            Command::Grayscale => self.apply_grayscale()?,
            Command::Save => {
                let path = self.save()?;
                log::info!("Saved {}", path.display());
            }
        }

        Ok(())
    }
}
