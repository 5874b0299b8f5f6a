//! Static site content: the data the presentation sections and the terminal
//! commands render. Kept in one place so the terminal's `projects` output
//! always matches the projects section.

/// A portfolio project entry.
#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// A skill category with a 0–100 level per skill.
#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [(&'static str, u8)],
}

/// One experience entry for the timeline section.
#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const SITE_NAME: &str = "Jan Fischer";
pub const TAGLINE: &str = "software engineer — systems, web, and the odd easter egg";

pub const BIO: &str = "I build backend services and the occasional playful \
frontend. This site is my workshop window: poke around, open the terminal, \
and leave a note in the guestbook.";

pub const CONTACT_EMAIL: &str = "hello@janfischer.dev";
pub const GITHUB_USER: &str = "janfischer-dev";

pub const PROJECTS: &[Project] = &[
    Project {
        name: "relaygrid",
        description: "event-sourced job relay with at-least-once delivery",
        url: "https://github.com/janfischer-dev/relaygrid",
    },
    Project {
        name: "tidewatch",
        description: "coastal sensor dashboard with live WebSocket feeds",
        url: "https://github.com/janfischer-dev/tidewatch",
    },
    Project {
        name: "inkcell",
        description: "terminal spreadsheet with a tiny formula language",
        url: "https://github.com/janfischer-dev/inkcell",
    },
    Project {
        name: "this site",
        description: "the portfolio you are looking at, floating windows and all",
        url: "https://github.com/janfischer-dev/site",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "languages",
        skills: &[("Rust", 92), ("TypeScript", 84), ("SQL", 78), ("Go", 60)],
    },
    SkillGroup {
        category: "backend",
        skills: &[("axum / tokio", 90), ("Postgres", 82), ("message queues", 74)],
    },
    SkillGroup {
        category: "frontend",
        skills: &[("Leptos", 80), ("canvas / WebGL", 66), ("CSS", 58)],
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Senior Software Engineer",
        company: "Harborline",
        period: "2023 — present",
        summary: "Realtime logistics tracking; owns the ingestion pipeline and its failure drills.",
    },
    Experience {
        role: "Software Engineer",
        company: "Quellwerk",
        period: "2020 — 2023",
        summary: "Billing platform; migrated a monolith's reporting path to streaming aggregation.",
    },
    Experience {
        role: "Junior Developer",
        company: "Studio Nordlicht",
        period: "2018 — 2020",
        summary: "Client web apps, and far too many CMS plugins.",
    },
];
