use chrono::DateTime;

pub const OWNER: &str = "Favour Bawa";
pub const EMAIL: &str = "hello@favourbawa.dev";

/// Static assets under `public/`, served from the site root.
pub const PORTRAIT_SRC: &str = "/placeholder.svg";
pub const FAVICON_SRC: &str = "/favicon.svg";

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub Profile",
        href: "https://github.com/favourbawa",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn Profile",
        href: "https://linkedin.com/in/favourbawa",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Upwork Profile",
        href: "https://www.upwork.com/freelancers/~01a6f25e401b07c37c",
        icon: "devicon-upwork-plain",
    },
];

/// Footer date for an RFC 3339 build stamp, e.g. "October 2026".
pub fn last_updated(build_time: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|dt| dt.format("%B %Y").to_string())
}

pub fn copyright(build_time: &str) -> String {
    let year = DateTime::parse_from_rfc3339(build_time)
        .map(|dt| dt.format("%Y").to_string())
        .unwrap_or_default();
    if year.is_empty() {
        format!("© {OWNER}")
    } else {
        format!("© {year} {OWNER}")
    }
}
