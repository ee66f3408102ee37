use crate::ui::theme::Palette;
use ratatui::{
    layout::Alignment,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: String, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .title_style(palette.accent.add_modifier(Modifier::BOLD))
        .border_style(palette.accent)
        .style(palette.base)
}

/// Creates an input field block with a visual cursor
pub fn create_input_paragraph<'a>(input_buffer: &'a str, field_title: &str, palette: &Palette) -> Paragraph<'a> {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .border_style(palette.muted);

    Paragraph::new(Line::from(vec![
        Span::styled(input_buffer, palette.base),
        Span::styled("█", palette.accent),
    ]))
    .block(input_block)
}

/// Instruction shortcut definition: (key, description)
pub type InstructionShortcut = (&'static str, &'static str);

/// Creates a paragraph with highlighted instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], palette: &Palette) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in instructions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", palette.muted));
        }
        spans.push(Span::styled(*key, palette.accent));
        spans.push(Span::styled(*desc, palette.muted));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::InstructionShortcut;

    pub const ENTER_UPLOAD: InstructionShortcut = ("Enter", " subir");
    pub const ENTER_ACCEPT: InstructionShortcut = ("Enter", " aceptar");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", " cancelar");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", " cerrar");
    pub const SCROLL: InstructionShortcut = ("j/k", " desplazar");
}
