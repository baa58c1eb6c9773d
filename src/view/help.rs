//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by
//! category. Triggered by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
///
/// The `scroll_offset` parameter controls which line is shown at the top,
/// so the overlay stays usable on short terminals.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Atalhos ")
                .borders(Borders::ALL)
                .border_style(palette.accent),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint over the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Esc ou ? fecha · j/k rola ",
        palette.dim.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let category_style = palette.accent.add_modifier(Modifier::BOLD);
    let key_style = palette.selected;
    let desc_style = palette.text;

    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<14}"), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    vec![
        Line::from(vec![Span::styled("Navegação", category_style)]),
        entry("j/↓", "Próximo versículo"),
        entry("k/↑", "Versículo anterior"),
        entry("Ctrl+d/PgDn", "Rola meia página para baixo"),
        entry("Ctrl+u/PgUp", "Rola meia página para cima"),
        entry("g/Home", "Início do capítulo"),
        entry("G/End", "Fim do capítulo"),
        entry(":/v", "Ir para o versículo (número)"),
        Line::default(),
        Line::from(vec![Span::styled("Painéis", category_style)]),
        entry("Tab", "Alterna o foco"),
        entry("b", "Mostra/oculta os livros"),
        entry("Enter", "Abre o livro/capítulo"),
        entry("Esc/h", "Recolhe/cancela"),
        Line::default(),
        Line::from(vec![Span::styled("Busca", category_style)]),
        entry("/", "Inicia a busca"),
        entry("Tab", "Muda o escopo (digitando)"),
        entry("Enter", "Executa a busca"),
        entry("n", "Próxima ocorrência"),
        entry("N", "Ocorrência anterior"),
        Line::default(),
        Line::from(vec![Span::styled("Compartilhar", category_style)]),
        entry("s", "Inicia a seleção"),
        entry("Espaço", "Marca/desmarca o versículo"),
        entry("y", "Copia a seleção"),
        entry("x", "Exporta o cartão de texto"),
        entry("Esc", "Cancela a seleção"),
        Line::default(),
        Line::from(vec![Span::styled("Preferências", category_style)]),
        entry("t", "Alterna a tradução"),
        entry("T", "Alterna o tema (salvo)"),
        Line::default(),
        Line::from(vec![Span::styled("Aplicação", category_style)]),
        entry("?", "Esta ajuda"),
        entry("q/Ctrl+c", "Sai"),
    ]
}

// ===== Tests =====
