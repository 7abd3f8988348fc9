//! TUI rendering for the bit collector.
//!
//! ┌──────────────────────────────────────────────┐
//! │  bitphrase · entropy input (128 bits)        │
//! ├──────────────────────────────────────────────┤
//! │  ████████████░░░░░░░░░░░░░░░░   96/128       │
//! ├──────────────────────────────────────────────┤
//! │  …10110100 11010010 01101100 1011            │
//! ├──────────────────────────────────────────────┤
//! │  ↑/1: one   ↓/0: zero   ⌫: undo   ⏎: done    │
//! └──────────────────────────────────────────────┘

use ratatui::{prelude::*, widgets::*};

use super::app::{Collector, Phase};

pub fn draw(f: &mut Frame, collector: &Collector) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // progress
            Constraint::Min(4),    // bits entered
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_title(f, rows[0], collector);
    draw_progress(f, rows[1], collector);
    draw_bits(f, rows[2], collector);
    draw_keys(f, rows[3], collector);
}

fn draw_title(f: &mut Frame, area: Rect, collector: &Collector) {
    let status = match collector.phase() {
        Phase::Collecting => Span::styled("collecting", Style::default().fg(Color::Yellow)),
        Phase::Complete => Span::styled("complete — press Enter", Style::default().fg(Color::Green).bold()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(" bitphrase ", Style::default().bold().fg(Color::Cyan)),
            Span::raw(format!(" entropy input · {} bits · ", collector.target())),
            status,
            Span::raw(" "),
        ]));

    f.render_widget(block, area);
}

fn draw_progress(f: &mut Frame, area: Rect, collector: &Collector) {
    let entered = collector.entered();
    let target = collector.target();
    let ratio = entered as f64 / target as f64;

    let color = if collector.phase() == Phase::Complete {
        Color::Green
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{entered}/{target}"));

    f.render_widget(gauge, area);
}

fn draw_bits(f: &mut Frame, area: Rect, collector: &Collector) {
    // Window the tail so long entries stay readable; group by byte.
    let visible = (area.width as usize).saturating_sub(4) * (area.height as usize).saturating_sub(2);
    let window = visible.min(collector.entered()) / 9 * 8; // 8 bits + 1 space per group
    let tail = collector.tail(window.max(64).min(collector.entered()));

    let grouped: String = tail
        .as_bytes()
        .chunks(8)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ");

    let prefix = if collector.entered() > tail.len() { "… " } else { "" };

    let para = Paragraph::new(format!("{prefix}{grouped}"))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" bits entered "),
        );

    f.render_widget(para, area);
}

fn draw_keys(f: &mut Frame, area: Rect, collector: &Collector) {
    let last = collector
        .last_key()
        .map(|k| format!("   last: {k}"))
        .unwrap_or_default();

    let keys = Line::from(vec![
        Span::styled(" ↑/1", Style::default().fg(Color::Cyan)),
        Span::raw(": one   "),
        Span::styled("↓/0", Style::default().fg(Color::Cyan)),
        Span::raw(": zero   "),
        Span::styled("⌫", Style::default().fg(Color::Cyan)),
        Span::raw(": undo   "),
        Span::styled("⏎", Style::default().fg(Color::Cyan)),
        Span::raw(": done   "),
        Span::styled("q/Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": cancel"),
        Span::styled(last, Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(Paragraph::new(keys), area);
}
