//! About-section content: awards, skill highlights, FAQ entries, the hero
//! code snippet, and social links.

#[derive(Debug, Clone, Copy)]
pub struct SkillHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Award {
    pub number: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SKILLS: &[SkillHighlight] = &[
    SkillHighlight {
        title: "Frontend Development",
        description: "React.js, Next.js, TypeScript, Tailwind CSS",
    },
    SkillHighlight {
        title: "State Management",
        description: "Redux, Zustand, React Query, Context API",
    },
    SkillHighlight {
        title: "Backend & Database",
        description: "Node.js, Express, MongoDB, PostgreSQL",
    },
    SkillHighlight {
        title: "Tools & Deployment",
        description: "Git, Docker, Vercel, AWS, CI/CD",
    },
];

pub const AWARDS: &[Award] = &[
    Award { number: "1", text: "Hackerrank - JavaScript Gold Badge" },
    Award { number: "2", text: "GitHub - Arctic Code Vault Contributor" },
    Award { number: "3", text: "Dev.to - Top 7 React Developer 2024" },
    Award { number: "4", text: "freeCodeCamp - Full Stack Certification" },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What's your development approach?",
        answer: "I follow agile methodologies with a focus on clean code, component reusability, and user-centric design. I prioritize performance optimization and accessibility.",
    },
    Faq {
        question: "Project delivery time estimate?",
        answer: "Timelines vary based on project complexity. A typical landing page takes 1-2 weeks, while full-stack applications may take 4-8 weeks. I provide detailed timelines after requirement analysis.",
    },
    Faq {
        question: "What services do you offer?",
        answer: "I specialize in full-stack MERN development, focusing on React.js frontend development, RESTful API design, database architecture, and modern web application deployment.",
    },
    Faq {
        question: "Do you provide maintenance?",
        answer: "Yes! I offer ongoing maintenance packages including bug fixes, feature updates, performance monitoring, and technical support for all projects.",
    },
    Faq {
        question: "What's your tech stack?",
        answer: "Primary: React.js, Next.js, Node.js, Express, MongoDB. Secondary: TypeScript, Tailwind CSS, Redux, PostgreSQL, AWS, Docker.",
    },
];

/// Typed-out snippet shown in the hero banner.
pub const HERO_CODE_LINES: &[&str] = &[
    "import React from 'react';",
    "import { NextPage } from 'next';",
    "",
    "const Home: NextPage = () => {",
    "  return (",
    "    <main>",
    "      <h1 className='text-4xl font-bold '>Hello, Next.js 👋</h1>",
    "    </main>",
    "  );",
    "};",
    "",
    "export default Home;",
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", url: "https://www.facebook.com/md.al.amin.372196" },
    SocialLink { label: "GitHub", url: "https://github.com/Alamin-Coding" },
    SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/al-amin-coder" },
    SocialLink { label: "Email", url: "mailto:md.alamin.coding@gmail.com" },
];
