#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "skills", label: "Skills" },
    Section { id: "services", label: "Services" },
    Section { id: "portfolio", label: "Portfolio" },
    Section { id: "blog", label: "Blog" },
    Section { id: "contact", label: "Contact" },
];

pub const TYPED_PHRASES: &[&str] = &[
    "Full Stack Developer",
    "Interface Designer",
    "Open Source Tinkerer",
];

pub const HERO_GREETING: &str = "Hello, I'm";
pub const HERO_BLURB: &str = "I build fast, accessible web applications and the \
    tooling around them. Currently taking on freelance work and collaborations.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a developer and designer with six years of experience shipping products \
     for startups and agencies. I care about performance budgets, honest \
     interfaces, and software that stays maintainable after the launch party.",
    "When I'm not at the keyboard I'm usually out climbing, repairing old \
     synthesizers, or writing up what broke this month on the blog below.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatMetric {
    pub label: &'static str,
    pub value: u64,
    pub suffix: &'static str,
}

pub const STATS: &[StatMetric] = &[
    StatMetric { label: "Projects Completed", value: 120, suffix: "+" },
    StatMetric { label: "Happy Clients", value: 85, suffix: "+" },
    StatMetric { label: "Client Satisfaction", value: 98, suffix: "%" },
    StatMetric { label: "Years of Experience", value: 6, suffix: "+" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript & TypeScript", percent: 92 },
    Skill { name: "Rust & WebAssembly", percent: 86 },
    Skill { name: "React & Redux", percent: 88 },
    Skill { name: "Node.js & Express", percent: 84 },
    Skill { name: "PostgreSQL & Redis", percent: 78 },
    Skill { name: "UI Design & Figma", percent: 81 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "{ }",
        title: "Web Application Development",
        blurb: "Single-page apps and progressive web apps with a hard budget on \
                bundle size and time to interactive.",
    },
    Service {
        icon: "API",
        title: "API Design & Integration",
        blurb: "REST and streaming APIs that are a pleasure to consume, plus the \
                glue code to third-party services you'd rather not write.",
    },
    Service {
        icon: "UI",
        title: "Interface & UX Design",
        blurb: "From wireframe to working prototype. Design systems that \
                developers actually follow.",
    },
    Service {
        icon: "OPS",
        title: "Performance & Tooling",
        blurb: "Profiling, build pipelines, and the boring infrastructure that \
                keeps a product shippable every Friday.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub details: &'static str,
    pub tags: &'static [&'static str],
    pub image: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
    pub highlights: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Lindholmen Storefront",
        blurb: "Headless e-commerce frontend for a Gothenburg furniture maker.",
        details: "Product catalog, cart, and checkout flow rendered from a \
                  headless CMS. Ships under 90 KB of JavaScript and holds a \
                  perfect Lighthouse score on mid-range phones.",
        tags: &["TypeScript", "React", "Stripe"],
        image: Some("/assets/projects/storefront.svg"),
        repo_url: None,
        demo_url: Some("https://example.com/storefront"),
        highlights: &[
            "Checkout conversion up 23% after relaunch",
            "Full keyboard and screen-reader coverage",
            "Edge-cached product pages",
        ],
    },
    Project {
        title: "tidvis",
        blurb: "Terminal dashboard for Nordic electricity spot prices.",
        details: "A small Rust TUI that pulls hourly spot prices, renders them \
                  as sparklines, and nudges you when the cheap hours start. \
                  Packaged for Homebrew and the AUR.",
        tags: &["Rust", "TUI", "Open Source"],
        image: Some("/assets/projects/tidvis.svg"),
        repo_url: Some("https://github.com/arvidlund/tidvis"),
        demo_url: None,
        highlights: &[
            "Sub-second cold start",
            "Offline cache with graceful staleness",
            "1.2k GitHub stars",
        ],
    },
    Project {
        title: "Kartong Design System",
        blurb: "Component library and tokens for a fintech client.",
        details: "Forty-odd components, dark mode, and a token pipeline that \
                  feeds both the web app and native clients. Documented with \
                  live examples so nobody has to ask in Slack.",
        tags: &["Design Systems", "Figma", "Storybook"],
        image: Some("/assets/projects/kartong.svg"),
        repo_url: None,
        demo_url: None,
        highlights: &[
            "Adopted by three product teams",
            "Automated visual regression suite",
            "Tokens synced from Figma on merge",
        ],
    },
    Project {
        title: "Brunnsparken Live",
        blurb: "Real-time departures board for Gothenburg transit.",
        details: "WebSocket feed of tram and bus departures with offline \
                  fallback, installable as a PWA. Built as a weekend project, \
                  now has more daily users than my actual products.",
        tags: &["WebSocket", "PWA", "Maps"],
        image: None,
        repo_url: Some("https://github.com/arvidlund/brunnsparken-live"),
        demo_url: Some("https://example.com/brunnsparken"),
        highlights: &[
            "Updates within two seconds of the feed",
            "Works offline with last-known schedule",
            "Installable on home screens",
        ],
    },
    Project {
        title: "Ferrum Notes",
        blurb: "Local-first markdown notes with end-to-end encrypted sync.",
        details: "Notes live in SQLite on the device and sync through a dumb \
                  relay that never sees plaintext. Conflict resolution is CRDT \
                  based so two laptops on a train still merge cleanly.",
        tags: &["Rust", "CRDT", "Encryption"],
        image: Some("/assets/projects/ferrum.svg"),
        repo_url: Some("https://github.com/arvidlund/ferrum-notes"),
        demo_url: None,
        highlights: &[
            "Zero-knowledge relay server",
            "Merges without a central clock",
            "Import from Obsidian and Notable",
        ],
    },
    Project {
        title: "Studio Norrsken",
        blurb: "Brand site and booking flow for a photography studio.",
        details: "Marketing pages, availability calendar, and deposit payments \
                  for a two-person studio. The whole thing runs on static \
                  hosting plus one tiny booking endpoint.",
        tags: &["Branding", "Astro", "Payments"],
        image: None,
        repo_url: None,
        demo_url: Some("https://example.com/norrsken"),
        highlights: &[
            "Bookings doubled in the first quarter",
            "Static pages, dynamic calendar",
            "Art direction and build in one sprint",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostTeaser {
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    pub image: Option<&'static str>,
    pub url: Option<&'static str>,
}

pub const POSTS: &[PostTeaser] = &[
    PostTeaser {
        title: "What a 90 KB budget buys you",
        date: "2025-11-02",
        excerpt: "We gave a client storefront a hard JavaScript budget and kept \
                  it for a year. Here's what we cut, what we kept, and what the \
                  numbers did.",
        image: Some("/assets/projects/post-budget.svg"),
        url: None,
    },
    PostTeaser {
        title: "CRDTs without the whiteboard",
        date: "2025-08-17",
        excerpt: "You don't need the full academic treatment to sync notes \
                  between two laptops. A practical walk through the subset \
                  Ferrum Notes actually uses.",
        image: None,
        url: None,
    },
    PostTeaser {
        title: "Repairing a Juno-106, part 3",
        date: "2025-05-30",
        excerpt: "The voice chips are back from the dead. This month: why \
                  calibration trimmers and version control have more in common \
                  than you'd think.",
        image: Some("/assets/projects/post-juno.svg"),
        url: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn skills_stay_within_percent_scale() {
        for skill in SKILLS {
            assert!(skill.percent <= 100, "{} exceeds 100%", skill.name);
        }
    }

    #[test]
    fn every_project_has_tags_and_highlights() {
        for project in PROJECTS {
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
            assert!(
                !project.highlights.is_empty(),
                "{} has no highlights",
                project.title
            );
        }
    }

    #[test]
    fn typed_phrases_present() {
        assert!(!TYPED_PHRASES.is_empty());
        assert!(TYPED_PHRASES.iter().all(|p| !p.is_empty()));
    }
}
