use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: impl Into<Line<'a>>, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field; the focused field shows a block cursor
pub fn create_input_paragraph(input_buffer: &str, field_title: &str, focused: bool) -> Paragraph<'static> {
    let input_display = if focused {
        format!("{input_buffer}█")
    } else {
        input_buffer.to_string()
    };
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {field_title} "))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Creates a selection field, drawn with arrows to hint that it cycles
pub fn create_selection_paragraph(value: &str, field_title: &str, focused: bool) -> Paragraph<'static> {
    let display = if focused { format!("◀ {value} ▶") } else { value.to_string() };
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {field_title} "))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(display).block(block).style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs and forms
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter", Color::Green, " Confirm");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_CYCLE: InstructionShortcut = ("←→", Color::Cyan, " Change option");
    pub const SPACE_TOGGLE: InstructionShortcut = ("Space", Color::Cyan, " Toggle");
    pub const CLEAR_ALL: InstructionShortcut = ("c", Color::Yellow, " Clear all");
}
