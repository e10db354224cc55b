//! Plain-text rendering of the portfolio
//!
//! Produces the same sections as the interactive UI, top to bottom, for
//! `pf show`. Tenure badges are omitted when a period cannot be parsed.

use chrono::{Datelike, NaiveDate};
use colored::*;
use tracing::debug;

use crate::content::{Experience, Portfolio};
use crate::section::Section;

const RULE_WIDTH: usize = 60;

/// Render every section, or just `only`
pub fn render_portfolio(portfolio: &Portfolio, only: Option<Section>, today: NaiveDate) -> String {
    debug!(?only, %today, "render_portfolio: called");
    let sections: Vec<Section> = match only {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };

    let mut out = String::new();
    for section in sections {
        out.push_str(&render_section(portfolio, section, today));
        out.push('\n');
    }
    if only.is_none() {
        out.push_str(&footer(portfolio, today));
    }
    out
}

/// Render a single section
pub fn render_section(portfolio: &Portfolio, section: Section, today: NaiveDate) -> String {
    let mut out = section_header(section);
    let body = match section {
        Section::Hero => render_hero(portfolio),
        Section::About => render_about(portfolio),
        Section::Education => render_education(portfolio),
        Section::Skills => render_skills(portfolio),
        Section::Experience => render_experience(portfolio, today),
        Section::Projects => render_projects(portfolio),
        Section::Contact => render_contact(portfolio),
    };
    out.push_str(&body);
    out
}

/// `[2Y 10M]`, or nothing for an empty label
pub fn tenure_badge(label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!(" [{}]", label)
    }
}

fn section_header(section: Section) -> String {
    if section == Section::Hero {
        return String::new();
    }
    let mut out = String::new();
    if let Some(eyebrow) = section.eyebrow() {
        out.push_str(&format!("{}\n", eyebrow.to_uppercase().magenta()));
    }
    out.push_str(&format!("{}\n", section.heading().bold()));
    out.push_str(&format!("{}\n", "─".repeat(RULE_WIDTH).dimmed()));
    out
}

fn render_hero(portfolio: &Portfolio) -> String {
    let profile = &portfolio.profile;
    let mut out = String::new();
    if !profile.greeting.is_empty() {
        out.push_str(&format!("{}\n", profile.greeting.to_uppercase().magenta()));
    }
    out.push_str(&format!("{}\n", profile.name.bold()));
    if !profile.quote.is_empty() {
        out.push_str(&format!("\"{}\"\n", profile.quote.italic()));
    }
    let nav: Vec<String> = Section::ALL
        .iter()
        .skip(1)
        .map(|s| format!("#{}", s.anchor()))
        .collect();
    out.push_str(&format!("{}\n", nav.join("  ").dimmed()));
    out
}

fn render_about(portfolio: &Portfolio) -> String {
    let profile = &portfolio.profile;
    let mut out = String::new();
    if !profile.location.is_empty() {
        out.push_str(&format!("{} {}\n", "●".green(), profile.location.dimmed()));
    }
    for paragraph in &profile.about {
        out.push_str(&format!("{}\n", paragraph));
    }
    out
}

fn render_education(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Formal Education".dimmed()));
    for edu in &portfolio.education {
        out.push_str(&format!("  {}\n", edu.degree.bold()));
        out.push_str(&format!("  {}\n", edu.school));
        out.push_str(&format!("  {}\n", edu.period.to_uppercase().dimmed()));
    }
    out.push_str(&format!("{}\n", "Training and Certifications".dimmed()));
    for cert in &portfolio.certifications {
        out.push_str(&format!(
            "  {} {}\n  {}\n",
            cert.name.bold(),
            cert.date.dimmed(),
            cert.issuer.to_uppercase().dimmed()
        ));
    }
    out
}

fn render_skills(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    for category in &portfolio.skill_categories {
        out.push_str(&format!("{}\n", category.title.bold()));
        out.push_str(&format!("  {}\n", category.skills.join(" · ")));
    }
    out
}

fn render_experience(portfolio: &Portfolio, today: NaiveDate) -> String {
    let mut out = String::new();
    for exp in &portfolio.experiences {
        out.push_str(&render_timeline_item(exp, today));
    }
    out
}

/// One company on the career track
pub fn render_timeline_item(exp: &Experience, today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}{}\n",
        exp.period.to_uppercase().magenta(),
        tenure_badge(&exp.tenure_at(today)).cyan()
    ));
    out.push_str(&format!("{}\n", exp.company.bold()));
    if let Some(role) = exp.current_role() {
        out.push_str(&format!("{}\n", role.italic()));
    }

    if exp.role_history.len() > 1 {
        let total = exp.aggregate_tenure_at(today).unwrap_or_default();
        out.push_str(&format!("  {}{}\n", "Role history".dimmed(), tenure_badge(&total)));
        for entry in &exp.role_history {
            out.push_str(&format!(
                "  ◦ {}  {}{}\n",
                entry.role,
                entry.period.dimmed(),
                tenure_badge(&entry.tenure_at(today))
            ));
        }
    }

    for (i, line) in exp.description.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", format!("{:02}", i + 1).magenta(), line));
    }
    if !exp.skills.is_empty() {
        out.push_str(&format!("  {}\n", exp.skills.join(" · ").to_uppercase().dimmed()));
    }
    out.push('\n');
    out
}

fn render_projects(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    for project in &portfolio.projects {
        out.push_str(&format!("{}\n", project.title.bold()));
        out.push_str(&format!("  {}\n", project.description));
        if !project.tech.is_empty() {
            out.push_str(&format!("  {}\n", project.tech.join(" · ").to_uppercase().dimmed()));
        }
        for url in [&project.github, &project.link].into_iter().flatten() {
            out.push_str(&format!("  {}\n", url.cyan()));
        }
    }
    if let Some(github) = &portfolio.profile.github {
        out.push_str(&format!("Explore all: {}\n", github.cyan()));
    }
    out
}

fn render_contact(portfolio: &Portfolio) -> String {
    let profile = &portfolio.profile;
    let mut out = String::new();
    if !profile.email.is_empty() {
        out.push_str(&format!("  ✉  {}\n", profile.email));
    }
    if let Some(linkedin) = &profile.linkedin {
        out.push_str(&format!("  in {}\n", linkedin));
    }
    if let Some(github) = &profile.github {
        out.push_str(&format!("  gh {}\n", github));
    }
    out
}

fn footer(portfolio: &Portfolio, today: NaiveDate) -> String {
    format!(
        "{}\n",
        format!("© {} {}", today.year(), portfolio.profile.name).dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_tenure_badge() {
        assert_eq!(tenure_badge("2Y"), " [2Y]");
        assert_eq!(tenure_badge(""), "");
    }

    #[test]
    fn test_experience_section_shows_tenures() {
        plain();
        let portfolio = Portfolio::builtin().unwrap();
        let text = render_portfolio(&portfolio, Some(Section::Experience), today());
        assert!(text.contains("04. CAREER TRACK"));
        assert!(text.contains("FEB 2022 – NOV 2024 [2Y 10M]"));
        assert!(text.contains("JUNE 2025 – PRESENT [2M]"));
        assert!(text.contains("◦ Engineer  Feb 2023 – Dec 2023 [11M]"));
        assert!(text.contains("Role history [2Y 10M]"));
        assert!(text.contains("01 Led backend feature development"));
        assert!(!text.contains("Project Labs"));
    }

    #[test]
    fn test_unparseable_period_has_no_badge() {
        plain();
        let portfolio = Portfolio::from_yaml(
            "profile:\n  name: Test\nexperiences:\n  - company: Acme\n    period: a while\n    role: Dev\n",
        )
        .unwrap();
        let text = render_timeline_item(&portfolio.experiences[0], today());
        assert!(text.starts_with("A WHILE\n"));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_full_render_has_all_sections_and_footer() {
        plain();
        let portfolio = Portfolio::builtin().unwrap();
        let text = render_portfolio(&portfolio, None, today());
        for section in Section::ALL.iter().skip(1) {
            assert!(text.contains(section.heading()), "missing {}", section.heading());
        }
        assert!(text.contains(&format!("© 2025 {}", portfolio.profile.name)));
    }
}
