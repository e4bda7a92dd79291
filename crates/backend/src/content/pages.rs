/// English paths of the static/legal pages. Turkish counterparts come from
/// the URL mapping table.
pub static LEGAL_PAGES: &[&str] = &[
    "/about",
    "/contact",
    "/privacy-policy",
    "/terms-of-service",
];

/// English paths of the long-form guide pages
pub static GUIDE_PAGES: &[&str] = &[
    "/guides/choosing-a-mortgage",
    "/guides/understanding-gpa",
];
