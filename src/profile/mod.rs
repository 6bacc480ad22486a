//! # Profile Data
//!
//! The static biography behind every view: jobs, projects, skills and ways
//! to get in touch. Nothing here knows about rendering.

use chrono::{Datelike, NaiveDate};

pub const NAME: &str = "Josh Lisco";
pub const TITLE: &str = "Senior Software Engineer at IGS Energy Solar";
pub const HERITAGE: &str = "Japanese American";
pub const LOCATION: &str = "Columbus, Ohio";
pub const EDUCATION: &str =
    "BS in Computer Science & Engineering, The Ohio State University (2020)";

/// Year, month, day of birth.
const BIRTH_DATE: (i32, u32, u32) = (1997, 12, 25);

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub desc: &'static str,
    pub tech: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub title: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub company: &'static str,
    pub location: &'static str,
    pub tenure: &'static str,
    pub roles: &'static [Role],
    pub details: &'static [&'static str],
}

/// A contact method or external link.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub label: &'static str,
    /// Where the link points (`tel:`, `mailto:` or `https:`).
    pub target: &'static str,
    pub text: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "lisco-portfolio",
        desc: "This interactive terminal-style portfolio.",
        tech: &["Rust", "ratatui", "crossterm"],
    },
    Project {
        name: "Smart City Web Portal",
        desc: "OSU capstone. Proof-of-concept portal for a Smart City built on the Salesforce platform. Served as Scrum Master and UI developer.",
        tech: &["Salesforce", "JavaScript", "Agile/Scrum"],
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        items: &["C#", "JavaScript", "TypeScript", "Python", "Java", "SQL", "HTML", "CSS"],
    },
    SkillCategory {
        title: "Frameworks",
        items: &[".NET / EF Core", "React", "GraphQL"],
    },
    SkillCategory {
        title: "Infrastructure",
        items: &["Azure", "AWS", "SQL Server", "RabbitMQ"],
    },
    SkillCategory {
        title: "AI Tools",
        items: &["ChatGPT", "GitHub Copilot", "Claude", "Gemini", "Cursor"],
    },
    SkillCategory {
        title: "Practices",
        items: &["Git", "Agile", "Scrum"],
    },
];

pub const JOBS: &[Job] = &[
    Job {
        company: "IGS Energy",
        location: "Columbus, Ohio",
        tenure: "5+ years",
        roles: &[
            Role {
                title: "Senior Software Engineer",
                period: "Jul 2023 - Present",
            },
            Role {
                title: "Software Engineer",
                period: "Jul 2021 - Jun 2023",
            },
            Role {
                title: "Software Engineer",
                period: "Jun 2020 - Jun 2021",
            },
        ],
        details: &[
            "Built and maintained production applications for account management, billing configuration, and payment processing.",
            "Developed tools for monitoring and analyzing energy usage and cost trends over time.",
            "Worked across the full stack on customer-facing platforms managing energy services and account settings.",
        ],
    },
    Job {
        company: "NetJets",
        location: "Columbus, Ohio",
        tenure: "2 years",
        roles: &[Role {
            title: "IT Software Development Intern",
            period: "May 2018 - May 2020",
        }],
        details: &[
            "Developed web applications for international flight operations and flight schedule optimization.",
            "Built React/Redux components and AWS Lambdas for front-end and back-end services.",
        ],
    },
];

pub const CONTACTS: &[Contact] = &[
    Contact {
        label: "Phone",
        target: "tel:+16143594430",
        text: "(614) 359-4430",
    },
    Contact {
        label: "Email",
        target: "mailto:josh.y.lisco@gmail.com",
        text: "josh.y.lisco@gmail.com",
    },
    Contact {
        label: "LinkedIn",
        target: "https://www.linkedin.com/in/josh-lisco-b87a19164",
        text: "linkedin.com/in/josh-lisco",
    },
];

/// Link-in-bio list.
pub const LINKS: &[Contact] = &[
    Contact {
        label: "LinkedIn",
        target: "https://www.linkedin.com/in/josh-lisco-b87a19164",
        text: "LinkedIn",
    },
    Contact {
        label: "Email",
        target: "mailto:josh.y.lisco@gmail.com",
        text: "Email",
    },
];

/// Age in whole years on `today`.
pub fn age_on(today: NaiveDate) -> i32 {
    let (year, month, day) = BIRTH_DATE;
    let mut age = today.year() - year;
    if (today.month(), today.day()) < (month, day) {
        age -= 1;
    }
    age
}
