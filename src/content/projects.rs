//! The featured-projects catalog, in showcase order.

use crate::catalog::{Category, ProjectRecord};

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "E-Commerce Platform",
        category: Category::WebDesign,
        description: "A modern e-commerce platform with seamless shopping experience, built with Next.js and Stripe integration.",
        image: "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&h=600&fit=crop",
        tags: &["Next.js", "TypeScript", "Tailwind"],
        live_url: "#",
        github_url: "#",
        color: "from-cyan-500 to-blue-600",
    },
    ProjectRecord {
        id: 2,
        title: "Banking Dashboard",
        category: Category::UiUx,
        description: "Intuitive banking dashboard with real-time analytics and transaction management features.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
        tags: &["React", "Chart.js", "Redux"],
        live_url: "#",
        github_url: "#",
        color: "from-purple-500 to-pink-600",
    },
    ProjectRecord {
        id: 3,
        title: "Fitness Tracking App",
        category: Category::MobileApp,
        description: "Mobile-first fitness app with workout tracking, nutrition planning, and social features.",
        image: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?w=800&h=600&fit=crop",
        tags: &["React Native", "Firebase", "Redux"],
        live_url: "#",
        github_url: "#",
        color: "from-green-500 to-teal-600",
    },
    ProjectRecord {
        id: 4,
        title: "Brand Identity System",
        category: Category::Branding,
        description: "Complete brand identity system with logo design, color palette, and brand guidelines.",
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&h=600&fit=crop",
        tags: &["Figma", "Illustrator", "Photoshop"],
        live_url: "#",
        github_url: "#",
        color: "from-orange-500 to-red-600",
    },
    ProjectRecord {
        id: 5,
        title: "Real Estate Portal",
        category: Category::WebDesign,
        description: "Comprehensive real estate portal with property listings, virtual tours, and mortgage calculator.",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&h=600&fit=crop",
        tags: &["Vue.js", "Node.js", "MongoDB"],
        live_url: "#",
        github_url: "#",
        color: "from-blue-500 to-indigo-600",
    },
    ProjectRecord {
        id: 6,
        title: "Travel Booking Platform",
        category: Category::UiUx,
        description: "User-friendly travel booking platform with flight search, hotel reservations, and itinerary planning.",
        image: "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=800&h=600&fit=crop",
        tags: &["React", "Framer Motion", "API Integration"],
        live_url: "#",
        github_url: "#",
        color: "from-yellow-500 to-orange-600",
    },
];
