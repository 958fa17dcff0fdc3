//! Static copy for the site's pages

use super::app_state::View;

pub const PRACTICE_NAME: &str = "Worlds Edge Wellness";
pub const TAGLINE: &str = "Counseling for individuals and couples in Western North Carolina";

pub const HOME_TEXT: &[&str] = &[
    "Welcome. Finding the right therapist matters, and reaching out is a brave first step.",
    "",
    "Worlds Edge Wellness offers a calm, confidential space to work through anxiety, \
     life transitions, grief, and relationship challenges.",
    "",
    "Sessions are available in person and through secure telehealth.",
    "",
    "Use the navigation above, or go straight to the Contact page to send a message.",
];

pub const ABOUT_TEXT: &[&str] = &[
    "Megan McCraw is a licensed therapist who believes healing happens in relationship.",
    "",
    "Her approach is collaborative and grounded in evidence-based practice, drawing on \
     person-centered, cognitive behavioral, and mindfulness-based methods.",
    "",
    "Outside the office you will find her on the trails of the Blue Ridge Mountains.",
];

pub const SERVICES_TEXT: &[&str] = &[
    "Individual therapy",
    "  50-minute sessions for adults navigating anxiety, depression, stress and change.",
    "",
    "Couples therapy",
    "  Support for partners who want to communicate better and reconnect.",
    "",
    "Consultation call",
    "  A free 15-minute call to see whether we are a good fit.",
    "",
    "Telehealth",
    "  Secure video sessions for clients anywhere in North Carolina.",
];

pub const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "Do you accept insurance?",
        "Sessions are private pay. A superbill can be provided for out-of-network reimbursement.",
    ),
    (
        "How long is a session?",
        "Individual sessions last 50 minutes. Couples sessions last 80 minutes.",
    ),
    (
        "Do you offer telehealth?",
        "Yes. Video sessions are available for clients located in North Carolina.",
    ),
    (
        "How do I get started?",
        "Send a message from the Contact page and you will hear back within 1-2 business days.",
    ),
    (
        "What is your cancellation policy?",
        "Please give at least 24 hours notice to avoid being charged for the session.",
    ),
];

/// Body copy of a text page; views without one fall back to Home
pub fn page_text(view: &View) -> &'static [&'static str] {
    match view {
        View::About => ABOUT_TEXT,
        View::Services => SERVICES_TEXT,
        _ => HOME_TEXT,
    }
}
