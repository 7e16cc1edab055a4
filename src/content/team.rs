//! The team roster.
//!
//! This is the only team list in the crate. The about page grid and the
//! `/team/{id}` detail pages both read from it.

use super::TeamMember;

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        id: "fionn-hourican",
        name: "Fíonn Hourican",
        role: "Software Engineer",
        image: Some("/images/team/fionn-hourican.jpg"),
        initials: "FH",
        bio: "Experienced software engineer specializing in full-stack development and modern web technologies.",
        email: "fionn.hourican@mail.dcu.ie",
        linkedin: Some("https://www.linkedin.com/in/fionnhourican"),
        experience: &[
            "3+ years in full-stack web development",
            "React, TypeScript, and Node.js expertise",
            "Experience with cloud platforms and DevOps",
        ],
        skills: &["React", "TypeScript", "Node.js", "Python", "AWS", "Docker", "Git"],
        education: &[
            "Computer Science Degree - Dublin City University",
            "Various online certifications in modern web development",
        ],
        certifications: &[],
    },
    TeamMember {
        id: "dylan-murtagh",
        name: "Dylan Murtagh",
        role: "Software Engineer",
        image: None,
        initials: "DM",
        bio: "Full-stack developer with expertise in modern web technologies and system architecture.",
        email: "dylan.murtagh@publicsectoritsolutions.ie",
        linkedin: None,
        experience: &[
            "4+ years in software development",
            "Specializes in backend systems and APIs",
            "Experience with microservices architecture",
        ],
        skills: &["Java", "Spring Boot", "React", "PostgreSQL", "Docker", "Kubernetes"],
        education: &["Software Engineering Degree"],
        certifications: &["AWS Certified Solutions Architect"],
    },
    TeamMember {
        id: "olan-healy",
        name: "Olan Healy",
        role: "Software Engineer",
        image: None,
        initials: "OH",
        bio: "Frontend specialist with a passion for user experience and modern web technologies.",
        email: "olan.healy@publicsectoritsolutions.ie",
        linkedin: None,
        experience: &[
            "3+ years in frontend development",
            "UI/UX design experience",
            "Mobile-first responsive design",
        ],
        skills: &["React", "Vue.js", "CSS", "JavaScript", "Figma", "Tailwind CSS"],
        education: &["Computer Science Degree"],
        certifications: &["UX Design Certification"],
    },
    TeamMember {
        id: "kevin-collins",
        name: "Kevin Collins",
        role: "Software Engineer",
        image: None,
        initials: "KC",
        bio: "Backend engineer focused on scalable systems and data architecture.",
        email: "kevin.collins@publicsectoritsolutions.ie",
        linkedin: None,
        experience: &[
            "5+ years in backend development",
            "Database design and optimization",
            "Cloud infrastructure management",
        ],
        skills: &["Python", "Django", "PostgreSQL", "Redis", "AWS", "Terraform"],
        education: &["Computer Engineering Degree"],
        certifications: &["Google Cloud Professional Architect"],
    },
];

/// Look up a team member by route id.
pub fn find_member(id: &str) -> Option<&'static TeamMember> {
    TEAM.iter().find(|m| m.id == id)
}
