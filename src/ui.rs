use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, Screen};
use crate::chat::ChatRole;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area);

    match app.screen {
        Screen::Home => render_home_screen(app, frame, body_area),
        Screen::Quiz => render_quiz_screen(app, frame, body_area),
        Screen::Chat => render_chat_screen(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" নূর — ইসলামী শিক্ষা ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match app.screen {
        Screen::Home => " হোম ",
        Screen::Quiz => " কুইজ ",
        Screen::Chat => " এআই ",
    };

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hints: Vec<Span> = match (app.screen, app.input_mode) {
        (Screen::Home, _) => vec![
            Span::styled(" p ", key_style),
            Span::styled(" কুইজ ", label_style),
            Span::styled(" a ", key_style),
            Span::styled(" এআই আলিম ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" প্রস্থান ", label_style),
        ],
        (Screen::Quiz, _) => {
            if app.quiz.is_finished() {
                vec![
                    Span::styled(" r ", key_style),
                    Span::styled(" আবার খেলুন ", label_style),
                    Span::styled(" Esc ", key_style),
                    Span::styled(" হোম ", label_style),
                ]
            } else if app.quiz.selected().is_some() {
                vec![
                    Span::styled(" Enter ", key_style),
                    Span::styled(" পরবর্তী প্রশ্ন ", label_style),
                    Span::styled(" Esc ", key_style),
                    Span::styled(" হোম ", label_style),
                ]
            } else {
                vec![
                    Span::styled(" 1-4 ", key_style),
                    Span::styled(" উত্তর দিন ", label_style),
                    Span::styled(" Esc ", key_style),
                    Span::styled(" হোম ", label_style),
                ]
            }
        }
        (Screen::Chat, InputMode::Editing) => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" পাঠান ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" বন্ধ ", label_style),
        ],
        (Screen::Chat, InputMode::Normal) => vec![
            Span::styled(" i ", key_style),
            Span::styled(" লিখুন ", label_style),
            Span::styled(" j/k ", key_style),
            Span::styled(" স্ক্রল ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" হোম ", label_style),
        ],
    };

    let mut spans = vec![Span::styled(mode_text, mode_style), Span::raw(" ")];
    spans.extend(hints);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// Home: welcome banner, daily verse card, hadith card, menu

fn render_home_screen(app: &App, frame: &mut Frame, area: Rect) {
    let [welcome_area, verse_area, hadith_area, menu_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(5),
        Constraint::Length(4),
    ])
    .areas(area);

    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(
            "আসসালামু আলাইকুম!",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("আজকের দিনটি শুরু করুন ইসলামী জ্ঞান দিয়ে।"),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(welcome, welcome_area.inner(ratatui::layout::Margin::new(1, 0)));

    render_verse_card(app, frame, verse_area);
    render_hadith_card(app, frame, hadith_area);

    let menu = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" p ", Style::default().bg(Color::DarkGray).fg(Color::White)),
            Span::raw(" কুইজ মাস্টার — ইসলামিক কুইজ খেলুন"),
        ]),
        Line::from(vec![
            Span::styled(" a ", Style::default().bg(Color::DarkGray).fg(Color::White)),
            Span::raw(" এআই আলিম — যেকোনো প্রশ্ন করুন"),
        ]),
    ]);
    frame.render_widget(menu, menu_area.inner(ratatui::layout::Margin::new(1, 1)));
}

fn render_verse_card(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" আজকের আয়াত ")
        .title_style(Style::default().fg(Color::Yellow).bold());

    let text = match &app.daily_verse {
        Some(verse) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    verse.arabic.clone(),
                    Style::default().fg(Color::Green).bold(),
                ))
                .alignment(Alignment::Right),
                Line::default(),
                Line::from(Span::styled(
                    format!("\"{}\"", verse.bengali),
                    Style::default().italic(),
                )),
                Line::default(),
                Line::from(vec![
                    Span::styled(verse.reference.clone(), Style::default().fg(Color::Gray)),
                    Span::raw("  "),
                    Span::styled("✦ এআই দ্বারা সংগৃহীত", Style::default().fg(Color::Green)),
                ]),
            ];
            if !verse.explanation.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(verse.explanation.clone()));
            }
            Text::from(lines)
        }
        // Skeleton card: stays up for the whole session if the fetch failed
        None => {
            let dots = ".".repeat(app.animation_frame as usize + 1);
            Text::from(vec![
                Line::from(Span::styled(
                    "░░░░░░░░░░░░░░░░",
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Right),
                Line::default(),
                Line::from(Span::styled(
                    "░░░░░░░░░░░░░░░░░░░░░░░░░░░░",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::default(),
                Line::from(Span::styled(
                    format!("লোড হচ্ছে{dots}"),
                    Style::default().fg(Color::DarkGray).italic(),
                )),
            ])
        }
    };

    let card = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    frame.render_widget(card, area);
}

fn render_hadith_card(app: &App, frame: &mut Frame, area: Rect) {
    let hadith = app.bank.hadith();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" হাদিস অফ দ্য ডে ")
        .title_style(Style::default().fg(Color::Yellow));

    let text = Text::from(vec![
        Line::from(format!("\"{}\"", hadith.text)),
        Line::from(Span::styled(
            format!("— {}", hadith.source),
            Style::default().fg(Color::Gray),
        )),
    ]);

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

// Quiz: progress, question, options, explanation; or the finished view

fn render_quiz_screen(app: &App, frame: &mut Frame, area: Rect) {
    if app.quiz.is_finished() {
        render_quiz_finished(app, frame, area);
        return;
    }

    let Some(question) = app.quiz.current_question() else {
        return;
    };

    let [progress_area, question_area, options_area, explanation_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(question.options.len() as u16 + 2),
        Constraint::Min(4),
    ])
    .areas(area);

    let progress = Line::from(vec![
        Span::styled(
            format!(" প্রশ্ন {} / {} ", app.quiz.current_index() + 1, app.quiz.len()),
            Style::default().bg(Color::Green).fg(Color::Black),
        ),
        Span::raw(" "),
        Span::styled(
            format!("স্কোর: {}", app.quiz.score()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(progress), progress_area);

    let question_text = Paragraph::new(Line::from(Span::styled(
        question.prompt,
        Style::default().bold(),
    )))
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(
        question_text,
        question_area.inner(ratatui::layout::Margin::new(1, 1)),
    );

    let mut option_lines: Vec<Line> = Vec::new();
    for (idx, option) in question.options.iter().enumerate() {
        let (style, marker) = option_style(app.quiz.selected(), idx, question.correct_index);
        option_lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", idx + 1), style),
            Span::styled(*option, style),
            Span::styled(marker, style),
        ]));
    }
    let options = Paragraph::new(option_lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(options, options_area);

    if app.quiz.selected().is_some() {
        let explanation = Paragraph::new(Line::from(Span::styled(
            question.explanation,
            Style::default().fg(Color::Green).italic(),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" শিক্ষা ")
                .title_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
        frame.render_widget(explanation, explanation_area);
    }
}

/// Option styling after an answer: the correct option turns green, a wrong
/// pick turns red, everything else fades out.
fn option_style(selected: Option<usize>, idx: usize, correct_index: usize) -> (Style, &'static str) {
    match selected {
        None => (Style::default(), ""),
        Some(_) if idx == correct_index => (Style::default().fg(Color::Green).bold(), "  ✓"),
        Some(sel) if idx == sel => (Style::default().fg(Color::Red), "  ✗"),
        Some(_) => (Style::default().fg(Color::DarkGray), ""),
    }
}

fn render_quiz_finished(app: &App, frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::default(),
        Line::from(Span::styled(
            "মাশাআল্লাহ!",
            Style::default().fg(Color::Green).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from("আপনি সব প্রশ্নের উত্তর দিয়েছেন।").alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "আপনার স্কোর",
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            format!("{} / {}", app.quiz.score(), app.quiz.len()),
            Style::default().fg(Color::Green).bold(),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from("r — আবার খেলুন").alignment(Alignment::Center),
    ]);

    let card = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, area);
}

// Chat: message history above an input line

fn render_chat_screen(app: &mut App, frame: &mut Frame, area: Rect) {
    let [messages_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    render_chat_messages(app, frame, messages_area);
    render_chat_input(app, frame, input_area);
}

fn render_chat_messages(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" নূর এআই আলিম ")
        .title_style(Style::default().fg(Color::Cyan).bold());
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();

    if app.chat.turns().is_empty() && !app.chat.is_pending() {
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "আসসালামু আলাইকুম!",
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(
                "ইসলামী জ্ঞান সম্পর্কে যেকোনো প্রশ্ন করুন।",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
    }

    for turn in app.chat.turns() {
        match turn.role {
            ChatRole::User => lines.push(Line::from(Span::styled(
                "আপনি:",
                Style::default().fg(Color::Green).bold(),
            ))),
            ChatRole::Assistant => lines.push(Line::from(Span::styled(
                "নূর এআই:",
                Style::default().fg(Color::Cyan).bold(),
            ))),
        }
        for text_line in turn.text.lines() {
            lines.push(Line::from(text_line.to_string()));
        }
        lines.push(Line::default());
    }

    if app.chat.is_pending() {
        let dots = ".".repeat(app.animation_frame as usize + 1);
        lines.push(Line::from(Span::styled(
            "নূর এআই:",
            Style::default().fg(Color::Cyan).bold(),
        )));
        lines.push(Line::from(Span::styled(
            format!("চিন্তা করছি{dots}"),
            Style::default().fg(Color::Gray).italic(),
        )));
    }

    // Stick to the bottom unless the user has scrolled up
    let wrap_width = inner.width.max(1) as usize;
    let total_lines: u16 = lines
        .iter()
        .map(|line| wrapped_height(line, wrap_width))
        .sum();
    let max_scroll = total_lines.saturating_sub(inner.height);
    app.chat_scroll = app.chat_scroll.min(max_scroll);
    let scroll = max_scroll.saturating_sub(app.chat_scroll);

    let messages = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(messages, area);
}

/// Rows a line occupies after wrapping. Character count stands in for
/// display width, as close as it gets without a width table.
fn wrapped_height(line: &Line, width: usize) -> u16 {
    let chars: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
    if chars == 0 {
        1
    } else {
        ((chars - 1) / width + 1) as u16
    }
}

fn render_chat_input(app: &App, frame: &mut Frame, area: Rect) {
    let border_style = match app.input_mode {
        InputMode::Editing => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default(),
    };

    let placeholder = app.chat_input.is_empty() && app.input_mode == InputMode::Normal;
    let content = if placeholder {
        Span::styled("আপনার প্রশ্ন লিখুন...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.chat_input.as_str())
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if app.input_mode == InputMode::Editing {
        frame.set_cursor_position((
            area.x + 1 + app.chat_cursor.min(u16::MAX as usize) as u16,
            area.y + 1,
        ));
    }
}
