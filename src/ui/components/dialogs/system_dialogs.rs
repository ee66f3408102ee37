use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use super::scroll_behavior::DialogScroll;
use crate::constants::{DIALOG_TITLE_LOGS, DIALOG_TITLE_UPLOAD};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
BUSCADORDOC - Cliente de terminal
=================================

PESTAÑAS
--------
F2          Base interna
F3          Mis datos (Excel)
F4          Cambiar tema claro/oscuro

BÚSQUEDA
--------
Enter       Buscar en la pestaña activa
Esc         Pasar a los resultados

RESULTADOS
----------
←↓↑→ / hjkl Mover la selección
Enter/Space Voltear la tarjeta
Click       Voltear la tarjeta
/           Volver a la búsqueda
PgUp/PgDn   Desplazar la cuadrícula

DATOS
-----
Ctrl+U      Subir una hoja de cálculo (.xlsx, .xls, .csv)
Ctrl+L      Limpiar los datos subidos

GENERAL
-------
Ctrl+G      Ver registros
?           Esta ayuda
q           Salir (desde los resultados)
Ctrl+C      Salir

Esc o ? para cerrar
";

/// Path input standing in for a file picker
pub fn render_upload_dialog(f: &mut Frame, area: Rect, input_buffer: &str, palette: &Palette) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(DIALOG_TITLE_UPLOAD.to_string(), palette);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let [input_area, _, instructions_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    f.render_widget(create_input_paragraph(input_buffer, "Ruta del archivo", palette), input_area);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_UPLOAD, shortcuts::ESC_CANCEL], palette),
        instructions_area,
    );
}

/// Blocking message; must be acknowledged before anything else
pub fn render_alert_dialog(f: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Aviso ")
        .title_alignment(Alignment::Center)
        .border_style(palette.error)
        .style(palette.base);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let [message_area, instructions_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let message_paragraph = Paragraph::new(message)
        .style(palette.error)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message_paragraph, message_area);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_ACCEPT], palette),
        instructions_area,
    );
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll, palette: &Palette) {
    let lines: Vec<&str> = HELP_CONTENT.lines().collect();
    render_scrolled_text(f, area, " Ayuda ", &lines, scroll, palette);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut DialogScroll, palette: &Palette) {
    let lines: Vec<&str> = if logs.is_empty() {
        vec!["Sin registros todavía"]
    } else {
        logs.iter().map(String::as_str).collect()
    };
    render_scrolled_text(f, area, &format!(" {} ", DIALOG_TITLE_LOGS), &lines, scroll, palette);
}

fn render_scrolled_text(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[&str],
    scroll: &mut DialogScroll,
    palette: &Palette,
) {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        dialog_area.x + margin_x,
        dialog_area.y + margin_y,
        dialog_area.width.saturating_sub(margin_x * 2),
        dialog_area.height.saturating_sub(margin_y * 2),
    );

    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let max_scroll = total_lines.saturating_sub(visible_height);
    scroll.offset = scroll.offset.min(max_scroll);

    scroll.scrollbar = scroll
        .scrollbar
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(scroll.offset);

    let visible_text = lines
        .iter()
        .skip(scroll.offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center)
                .border_style(palette.accent),
        )
        .style(palette.base);
    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(palette.muted)
            .thumb_style(Style::from(palette.accent));
        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar);
    }
}
