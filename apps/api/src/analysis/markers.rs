//! Content-marker scoring: five literal section keywords worth 20 points each.
//! Matching is case-sensitive substring search, so "Projects" inside
//! "SideProjects" counts.

use std::collections::BTreeMap;

use serde::Serialize;

pub const MARKER_POINTS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Objective,
    Declaration,
    Hobbies,
    Achievements,
    Projects,
}

impl Marker {
    pub const ALL: [Marker; 5] = [
        Marker::Objective,
        Marker::Declaration,
        Marker::Hobbies,
        Marker::Achievements,
        Marker::Projects,
    ];

    /// Any one of these literals satisfies the marker.
    fn needles(self) -> &'static [&'static str] {
        match self {
            Marker::Objective => &["Objective"],
            Marker::Declaration => &["Declaration"],
            Marker::Hobbies => &["Hobbies", "Interests"],
            Marker::Achievements => &["Achievements"],
            Marker::Projects => &["Projects"],
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Marker::Objective => "objective",
            Marker::Declaration => "declaration",
            Marker::Hobbies => "hobbies",
            Marker::Achievements => "achievements",
            Marker::Projects => "projects",
        }
    }

    fn tip(self, present: bool) -> &'static str {
        match (self, present) {
            (Marker::Objective, true) => "[+] Awesome! You have added Objective",
            (Marker::Objective, false) => {
                "[-] Add a career objective to give recruiters a clear idea of your goals."
            }
            (Marker::Declaration, true) => "[+] Awesome! You have added Declaration",
            (Marker::Declaration, false) => {
                "[-] Add a declaration to assure recruiters of the authenticity of your resume."
            }
            (Marker::Hobbies, true) => "[+] Awesome! You have added Hobbies",
            (Marker::Hobbies, false) => "[-] Add hobbies to showcase your personality.",
            (Marker::Achievements, true) => "[+] Awesome! You have added Achievements",
            (Marker::Achievements, false) => {
                "[-] Add achievements to highlight your accomplishments."
            }
            (Marker::Projects, true) => "[+] Awesome! You have added Projects",
            (Marker::Projects, false) => {
                "[-] Add projects to demonstrate your practical experience."
            }
        }
    }

    pub fn is_present_in(self, text: &str) -> bool {
        self.needles().iter().any(|needle| text.contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerCheck {
    pub marker: Marker,
    pub present: bool,
    pub tip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerReport {
    /// 0–100 in steps of 20.
    pub score: u32,
    pub checks: Vec<MarkerCheck>,
}

impl MarkerReport {
    pub fn presence(&self) -> BTreeMap<&'static str, bool> {
        self.checks
            .iter()
            .map(|c| (c.marker.key(), c.present))
            .collect()
    }
}

pub fn score(text: &str) -> MarkerReport {
    let checks: Vec<MarkerCheck> = Marker::ALL
        .iter()
        .map(|&marker| {
            let present = marker.is_present_in(text);
            MarkerCheck {
                marker,
                present,
                tip: marker.tip(present),
            }
        })
        .collect();
    let score = checks.iter().filter(|c| c.present).count() as u32 * MARKER_POINTS;
    MarkerReport { score, checks }
}
