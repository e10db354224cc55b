//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module draws the UI
//! from AppState and only writes back where the dial ended up on screen,
//! which mouse handling needs to hit-test the pointer.

use careertrack::{DialSelector, Point, point_at_angle};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use tracing::trace;

use super::state::{AppState, DialGeometry, InteractionMode};
use crate::content::{Experience, Portfolio};
use crate::section::Section;

/// Palette
mod colors {
    use ratatui::style::Color;

    pub const ACCENT: Color = Color::Rgb(168, 85, 247); // Purple
    pub const ACCENT_SOFT: Color = Color::Rgb(129, 140, 248); // Indigo
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const ONLINE: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const DIM: Color = Color::DarkGray;
}

/// Dial radius as a share of the smaller half-extent of its area
const DIAL_RADIUS_RATIO: f64 = 0.8;

/// Main render function
pub fn render(state: &mut AppState, frame: &mut Frame) {
    trace!(?state.current_section, "render: called");
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    if state.current_section == Section::Experience {
        render_career_track(state, frame, chunks[1]);
    } else {
        state.dial_geometry = None;
        render_text_section(state, frame, chunks[1]);
    }

    render_footer(state, frame, chunks[2]);

    if state.interaction_mode == InteractionMode::Help {
        render_help_overlay(frame, frame.area());
    }
}

/// Header with the owner's name and section tabs
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_header: called");
    let mut spans = vec![Span::styled(
        format!(" {} ", state.portfolio.profile.name),
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
    )];
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == state.current_section {
            Style::default().fg(Color::Black).bg(colors::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} {} ", i + 1, section.label()), style));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn section_block(section: Section) -> Block<'static> {
    let title = match section.eyebrow() {
        Some(eyebrow) => format!(" {} · {} ", eyebrow.to_uppercase(), section.heading()),
        None => format!(" {} ", section.heading()),
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::DIM))
        .title(Span::styled(
            title,
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ))
}

fn render_text_section(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!(?state.current_section, "render_text_section: called");
    let portfolio = &state.portfolio;
    let lines = match state.current_section {
        Section::Hero => hero_lines(portfolio),
        Section::About => about_lines(portfolio),
        Section::Education => education_lines(portfolio),
        Section::Skills => skills_lines(portfolio),
        Section::Projects => projects_lines(portfolio),
        Section::Contact => contact_lines(portfolio),
        // Drawn by render_career_track
        Section::Experience => Vec::new(),
    };

    let paragraph = Paragraph::new(lines)
        .block(section_block(state.current_section))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn bold(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
}

fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(colors::DIM))
}

fn accent(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(colors::ACCENT))
}

fn hero_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let profile = &portfolio.profile;
    vec![
        Line::from(""),
        Line::from(accent(profile.greeting.to_uppercase())).centered(),
        Line::from(""),
        Line::from(bold(profile.name.clone())).centered(),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", profile.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .centered(),
        Line::from(""),
        Line::from(dim("Tab or 1-7 to jump between sections")).centered(),
    ]
}

fn about_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let profile = &portfolio.profile;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(colors::ONLINE)),
            dim(profile.location.to_uppercase()),
        ]),
        Line::from(""),
    ];
    for paragraph in &profile.about {
        lines.push(Line::from(paragraph.clone()));
        lines.push(Line::from(""));
    }
    lines
}

fn education_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(dim("── Formal Education")), Line::from("")];
    for edu in &portfolio.education {
        lines.push(Line::from(bold(edu.degree.clone())));
        lines.push(Line::from(edu.school.clone()));
        lines.push(Line::from(dim(edu.period.to_uppercase())));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(dim("── Training and Certifications")));
    lines.push(Line::from(""));
    for cert in &portfolio.certifications {
        lines.push(Line::from(vec![bold(cert.name.clone()), Span::raw("  "), dim(cert.date.clone())]));
        lines.push(Line::from(dim(cert.issuer.to_uppercase())));
        lines.push(Line::from(""));
    }
    lines
}

fn skills_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for category in &portfolio.skill_categories {
        lines.push(Line::from(vec![
            accent(format!("[{}] ", category.icon)),
            bold(category.title.clone()),
        ]));
        lines.push(Line::from(format!("  {}", category.skills.join(" · "))));
        lines.push(Line::from(""));
    }
    lines
}

fn projects_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for project in &portfolio.projects {
        lines.push(Line::from(bold(project.title.clone())));
        lines.push(Line::from(project.description.clone()));
        lines.push(Line::from(dim(project.tech.join(" · ").to_uppercase())));
        for url in [&project.github, &project.link].into_iter().flatten() {
            lines.push(Line::from(Span::styled(url.clone(), Style::default().fg(colors::HEADER))));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn contact_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let profile = &portfolio.profile;
    let eyebrow = Section::Contact.eyebrow().unwrap_or_default().to_uppercase();
    let mut lines = vec![Line::from(accent(eyebrow)), Line::from("")];
    if !profile.email.is_empty() {
        lines.push(Line::from(vec![dim("email     "), bold(profile.email.clone())]));
    }
    if let Some(linkedin) = &profile.linkedin {
        lines.push(Line::from(vec![dim("linkedin  "), Span::raw(linkedin.clone())]));
    }
    if let Some(github) = &profile.github {
        lines.push(Line::from(vec![dim("github    "), Span::raw(github.clone())]));
    }
    lines
}

/// Career track: one company with its role dial and details
fn render_career_track(state: &mut AppState, frame: &mut Frame, area: Rect) {
    trace!(selected = state.selected_company, "render_career_track: called");
    let block = section_block(Section::Experience);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Cloned so the dial geometry can be written back below
    let Some(exp) = state.current_experience().cloned() else {
        state.dial_geometry = None;
        frame.render_widget(Paragraph::new(dim("No experience listed")), inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    frame.render_widget(company_heading(state, &exp), rows[0]);
    render_details(state, &exp, frame, columns[1]);

    let dial_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if state.pointer_on_dial { colors::ACCENT } else { colors::DIM }))
        .title(" Role history ");
    let dial_area = dial_block.inner(columns[0]);
    frame.render_widget(dial_block, columns[0]);

    state.dial_geometry = match &state.dial {
        Some(dial) => {
            let roles: Vec<String> = exp.role_history.entries().iter().map(|e| e.role.clone()).collect();
            let tenure = exp
                .role_history
                .get(dial.active_index())
                .map(|entry| entry.tenure_at(state.today))
                .unwrap_or_default();
            render_dial(dial, &roles, &tenure, state.cell_aspect, frame, dial_area);
            Some(DialGeometry {
                area: dial_area,
                cell_aspect: state.cell_aspect,
            })
        }
        None => {
            frame.render_widget(Paragraph::new(dim("No role history")), dial_area);
            None
        }
    };
}

fn company_heading(state: &AppState, exp: &Experience) -> Paragraph<'static> {
    let badge = exp.tenure_at(state.today);
    let mut period = vec![accent(exp.period.to_uppercase())];
    if !badge.is_empty() {
        period.push(Span::raw("  "));
        period.push(Span::styled(
            format!(" {} ", badge),
            Style::default().fg(Color::Black).bg(colors::ACCENT_SOFT),
        ));
    }
    let count = state.portfolio.experiences.len();
    Paragraph::new(vec![
        Line::from(period),
        Line::from(vec![
            bold(exp.company.clone()),
            dim(format!("  {}", exp.location)),
            dim(format!("  ({}/{})", state.selected_company + 1, count)),
        ]),
        Line::from(Span::styled(
            exp.current_role().unwrap_or_default().to_uppercase(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
    ])
}

fn render_details(state: &AppState, exp: &Experience, frame: &mut Frame, area: Rect) {
    trace!("render_details: called");
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut lines = Vec::new();
    if let (Some(role), Some(dial)) = (state.active_role(), state.dial.as_ref()) {
        lines.push(Line::from(dim(format!("Role {} of {}", dial.active_index() + 1, dial.len()))));
        lines.push(Line::from(bold(role.role.clone())));
        let tenure = role.tenure_at(state.today);
        let mut period = vec![accent(role.period.clone())];
        if !tenure.is_empty() {
            period.push(dim(format!("  · {}", tenure)));
        }
        lines.push(Line::from(period));
        if let Some(total) = exp.aggregate_tenure_at(state.today).filter(|t| !t.is_empty())
            && dial.len() > 1
        {
            lines.push(Line::from(dim(format!("Total at {}: {}", exp.company, total))));
        }
        lines.push(Line::from(""));
    }
    for (i, item) in exp.description.iter().enumerate() {
        lines.push(Line::from(vec![accent(format!("{:02} ", i + 1)), Span::raw(item.clone())]));
    }
    if !exp.skills.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(dim(exp.skills.join(" · ").to_uppercase())));
    }

    let details = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(details, parts[0]);

    let ratio = state.dial.as_ref().map(|d| d.progress_fraction()).unwrap_or(0.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(colors::ACCENT))
        .ratio(ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, parts[1]);
}

/// Circular dial with one numbered marker per role and a hand on the active one
fn render_dial(dial: &DialSelector, roles: &[String], tenure: &str, aspect: f64, frame: &mut Frame, area: Rect) {
    trace!(len = dial.len(), "render_dial: called");
    // Square units: one unit per cell horizontally, `aspect` per row vertically
    let half_w = f64::from(area.width) / 2.0;
    let half_h = f64::from(area.height) * aspect / 2.0;
    let radius = half_w.min(half_h) * DIAL_RADIUS_RATIO;
    let origin = Point::new(0.0, 0.0);
    // Canvas y grows upward, dial angles assume y grows downward
    let to_canvas = |p: Point| (p.x, -p.y);

    let active = dial.active_index();
    let active_role = roles.get(active).cloned().unwrap_or_default();
    let tenure = tenure.to_string();

    let canvas = Canvas::default()
        .x_bounds([-half_w, half_w])
        .y_bounds([-half_h, half_h])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius,
                color: colors::DIM,
            });

            if dial.is_interactive() {
                // Ticks on arc boundaries
                for i in 0..dial.len() {
                    if let Some((start, _)) = dial.arc_range(i) {
                        let (x1, y1) = to_canvas(point_at_angle(origin, radius * 0.9, start));
                        let (x2, y2) = to_canvas(point_at_angle(origin, radius, start));
                        ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color: colors::DIM,
                        });
                    }
                }

                if let Some(angle) = dial.arc_midpoint(active) {
                    let (x2, y2) = to_canvas(point_at_angle(origin, radius * 0.45, angle));
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2,
                        y2,
                        color: colors::ACCENT,
                    });
                }
            }

            ctx.layer();
            for i in 0..dial.len() {
                let angle = dial.arc_midpoint(i).unwrap_or_default();
                let (x, y) = to_canvas(point_at_angle(origin, radius * 0.75, angle));
                let style = if i == active {
                    Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ctx.print(x, y, Span::styled(format!("{}", i + 1), style));
            }

            // Active role in the center
            let name_x = -(active_role.chars().count() as f64) / 2.0;
            ctx.print(
                name_x,
                aspect / 2.0,
                Span::styled(
                    active_role.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            );
            if !tenure.is_empty() {
                let tenure_x = -(tenure.chars().count() as f64) / 2.0;
                ctx.print(
                    tenure_x,
                    -aspect / 2.0,
                    Span::styled(tenure.clone(), Style::default().fg(colors::ACCENT_SOFT)),
                );
            }
        });
    frame.render_widget(canvas, area);
}

/// Render footer with keybinds
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_footer: called");
    let hints: &[(&str, &str)] = if state.current_section == Section::Experience {
        &[
            ("mouse", "hover dial"),
            ("j/k", "company"),
            ("Tab", "section"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        &[
            ("j/k", "scroll"),
            ("Tab", "section"),
            ("1-7", "jump"),
            ("?", "help"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(format!(" <{}> ", key), Style::default().fg(colors::KEYBIND)));
        spans.push(Span::raw(format!("{} ", desc)));
    }
    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    trace!("render_help_overlay: called");
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                .fg(colors::HEADER),
        )]),
        Line::from(""),
        key_line("Tab/S-Tab", "Next / previous section"),
        key_line("1-7", "Jump to section"),
        key_line("j/k", "Scroll, or switch company on the career track"),
        key_line("g", "Back to top"),
        key_line("?", "Toggle help"),
        key_line("q", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Career Track",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        key_line("mouse", "Move around the dial to pick a role"),
        key_line("", "Leave the dial to return to the latest role"),
        Line::from(""),
        Line::from(dim("Press any key to close")),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ACCENT))
            .title(" Help "),
    );
    frame.render_widget(help, popup_area);
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<12}", key), Style::default().fg(colors::KEYBIND)),
        Span::raw(desc),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
