//! Static site content
//!
//! All copy and link data lives here so the views stay pure markup
//! builders.

/// Hero name highlighted in the home title
pub const HERO_NAME: &str = "Kailen";

/// Logo text in the navigation bar
pub const LOGO_TEXT: &str = "Kailen.dev";

/// Home view introduction paragraph
pub const HERO_DESCRIPTION: &str = "I'm a university student with a growing passion for web \
development, networking, and security. I enjoy exploring technology, from coding to working \
with wires and circuit boards. When I'm not diving into tech, I love spending time with my \
kids and finding new ways to learn and grow.";

/// Contact view introduction paragraph
pub const CONTACT_DESCRIPTION: &str = "Have a project in mind or just want to chat? Feel free \
to reach out. I'm always open to discussing new projects, creative ideas, or opportunities to \
be part of your visions.";

/// Banner shown after a successful handoff
pub const CONTACT_SUCCESS_MESSAGE: &str = "Thanks for reaching out! I'll get back to you soon.";

/// Banner shown when the handoff fails
pub const CONTACT_ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";

/// Words cycled under the hero title
pub const SUBTITLE_WORDS: [&str; 10] = [
    "Developer",
    "UI/UX Enthusiast",
    "Problem Solver",
    "Tech Enthusiast",
    "Learner",
    "Creator",
    "Innovator",
    "Collaborator",
    "Student",
    "Gamer",
];

/// Dwell time per subtitle word, in milliseconds
pub const SUBTITLE_DWELL_MS: f64 = 2000.0;

/// A gallery project card
#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
}

/// The featured project set
pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Project One",
        description: "A full-stack web application built with React and Node.js, featuring \
real-time data synchronization and a modern user interface.",
        tech_stack: &["React", "Node.js", "MongoDB", "WebSocket"],
        github_url: "https://github.com/yourusername/project-one",
        live_url: "https://project-one.com",
    },
    Project {
        title: "Project Two",
        description: "An e-commerce platform with advanced filtering, search functionality, \
and secure payment processing.",
        tech_stack: &["Next.js", "Stripe", "PostgreSQL", "Tailwind"],
        github_url: "https://github.com/yourusername/project-two",
        live_url: "https://project-two.com",
    },
    Project {
        title: "Project Three",
        description: "A mobile-first progressive web app for task management with offline \
capabilities and cloud synchronization.",
        tech_stack: &["React Native", "Firebase", "Redux", "PWA"],
        github_url: "https://github.com/yourusername/project-three",
        live_url: "https://project-three.com",
    },
];

/// An external profile link, opened in a new browsing context
#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Profile links shown in the bar and the mobile menu
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", url: "https://github.com/kailen-howard" },
    SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/kailen-howard-0702041b7/" },
    SocialLink { label: "Twitter", url: "https://twitter.com" },
];

/// Rotating subtitle word sequence
///
/// Pure timer state; the shell ticks it from the frame loop and
/// re-renders the subtitle when the word advances.
#[derive(Clone, Copy, Debug)]
pub struct Rotation {
    index: usize,
    last_change_ms: f64,
}

impl Rotation {
    /// Start at the first word
    pub fn new(now_ms: f64) -> Self {
        Self { index: 0, last_change_ms: now_ms }
    }

    /// The word currently shown
    pub fn current(&self) -> &'static str {
        SUBTITLE_WORDS[self.index % SUBTITLE_WORDS.len()]
    }

    /// Advance if the dwell time elapsed; returns true when the word
    /// changed
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_change_ms < SUBTITLE_DWELL_MS {
            return false;
        }
        self.index = (self.index + 1) % SUBTITLE_WORDS.len();
        self.last_change_ms = now_ms;
        true
    }
}
