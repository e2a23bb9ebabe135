//! Option catalogs offered by the wizard and directory selectors
//!
//! Stored values stay free text; these lists only drive the choices a client
//! renders.

use serde::Serialize;

use crate::entities::{CalendarType, FounderType, HasIdea};

/// A selectable value with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const TIMEZONES: [SelectOption; 6] = [
    opt("pst", "PST (UTC-8)"),
    opt("mst", "MST (UTC-7)"),
    opt("cst", "CST (UTC-6)"),
    opt("est", "EST (UTC-5)"),
    opt("utc", "UTC (UTC+0)"),
    opt("cet", "CET (UTC+1)"),
];

pub const WEEKLY_HOURS: [SelectOption; 5] = [
    opt("0-10", "0-10 hours/week"),
    opt("10-20", "10-20 hours/week"),
    opt("20-30", "20-30 hours/week"),
    opt("30-40", "30-40 hours/week"),
    opt("40+", "40+ hours/week (Full-time)"),
];

pub const SKILLS: [&str; 14] = [
    "React",
    "Node.js",
    "Python",
    "AI/ML",
    "Mobile Dev",
    "DevOps",
    "UI/UX Design",
    "Product Management",
    "Marketing",
    "Sales",
    "Fundraising",
    "Operations",
    "Strategy",
    "Analytics",
];

/// Location choices of the directory filter
pub const DIRECTORY_LOCATIONS: [&str; 4] = ["San Francisco", "New York", "Austin", "Remote"];

/// Founder type choices with labels
pub fn founder_types() -> Vec<SelectOption> {
    FounderType::ALL
        .into_iter()
        .map(|ft| opt(ft.as_str(), ft.label()))
        .collect()
}

pub fn idea_statuses() -> Vec<SelectOption> {
    [
        (HasIdea::Yes, "Yes, I have an idea and need help building it"),
        (HasIdea::No, "No, I want to join someone else's idea"),
        (HasIdea::Both, "Both - I'm open to either"),
    ]
    .into_iter()
    .map(|(status, label)| opt(status.as_str(), label))
    .collect()
}

pub fn calendar_types() -> Vec<SelectOption> {
    CalendarType::ALL
        .into_iter()
        .map(|ct| opt(ct.as_str(), ct.label()))
        .collect()
}
