use crate::brush::BrushPreset;
use crate::commands::CmdResult;

pub fn run() -> CmdResult {
    CmdResult {
        brushes: BrushPreset::defaults(),
        ..Default::default()
    }
}
