//! Work-history timeline entries, newest first.

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub id: u32,
    pub company: &'static str,
    pub position: &'static str,
    pub location: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub icon: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        id: 1,
        company: "Tech Innovators Inc.",
        position: "Senior Web Designer & Developer",
        location: "San Francisco, CA",
        start_date: "Jan 2021",
        end_date: "Present",
        description: "Leading the design and development of cutting-edge web applications for Fortune 500 clients. Managing a team of 5 designers and developers.",
        achievements: &[
            "Increased user engagement by 150% through redesign of main product",
            "Led successful migration to Next.js, improving performance by 60%",
            "Mentored 10+ junior developers and designers",
            "Won \"Best UI/UX Design\" award at Tech Summit 2023",
        ],
        skills: &["Next.js", "TypeScript", "Figma", "Team Leadership", "Agile"],
        icon: "🚀",
    },
    Experience {
        id: 2,
        company: "Creative Digital Studio",
        position: "Lead UI/UX Designer",
        location: "New York, NY",
        start_date: "Mar 2018",
        end_date: "Dec 2020",
        description: "Designed and developed user-centric digital experiences for startups and established brands. Collaborated with cross-functional teams to deliver exceptional products.",
        achievements: &[
            "Designed 30+ successful web and mobile applications",
            "Established design system used across 15+ projects",
            "Reduced development time by 40% through component library",
            "Achieved 95% client satisfaction rate",
        ],
        skills: &["React", "Vue.js", "Adobe XD", "Prototyping", "User Research"],
        icon: "🎨",
    },
    Experience {
        id: 3,
        company: "Web Solutions Agency",
        position: "Front-End Developer",
        location: "Austin, TX",
        start_date: "Jun 2016",
        end_date: "Feb 2018",
        description: "Developed responsive websites and web applications using modern technologies. Focused on performance optimization and accessibility.",
        achievements: &[
            "Built 50+ responsive websites with 99% uptime",
            "Improved page load speed by 70% on average",
            "Implemented accessibility standards (WCAG 2.1 AA)",
            "Trained team members on best coding practices",
        ],
        skills: &["JavaScript", "HTML/CSS", "WordPress", "Git", "Performance"],
        icon: "💻",
    },
    Experience {
        id: 4,
        company: "Design Startup",
        position: "Junior Designer",
        location: "Los Angeles, CA",
        start_date: "Aug 2014",
        end_date: "May 2016",
        description: "Started my professional journey creating visual designs and learning web development fundamentals. Contributed to various client projects.",
        achievements: &[
            "Assisted in designing 20+ client projects",
            "Learned modern web technologies and frameworks",
            "Contributed to company design guidelines",
            "Received \"Rising Star\" recognition",
        ],
        skills: &["Photoshop", "Illustrator", "HTML", "CSS", "jQuery"],
        icon: "🌟",
    },
];
