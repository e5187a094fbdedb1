//! Compiled-in site content. Everything here is static data; the logic that
//! consumes it lives in `catalog`, `form`, and the views.

pub mod experience;
pub mod profile;
pub mod projects;

pub use experience::{EXPERIENCES, Experience};
pub use profile::{
    AWARDS, Award, FAQS, Faq, HERO_CODE_LINES, SKILLS, SOCIAL_LINKS, SkillHighlight, SocialLink,
};
pub use projects::PROJECTS;
