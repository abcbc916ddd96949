/// Signals published after every mutation of the sketchpad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// The committed drawing changed: commit, extend, undo, redo or clear
    ContentChanged,
    /// Only transient state changed: cursor position or tool configuration
    PreviewChanged,
}
