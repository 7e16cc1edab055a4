//! Demonstration projects shown on the portfolio page.

use super::Project;
use super::images::project_image;

pub const PORTFOLIO_NOTE: &str = "The following projects are demonstration systems created to showcase our \
technical capabilities. While they are fully functional prototypes, they represent the types of solutions \
we can deliver for government clients.";

pub const PROJECTS: &[Project] = &[
    Project {
        id: "messaging-demo",
        title: "Bulk Email & SMS Messaging Demo System",
        category: "Messaging Platform",
        image: project_image(
            "/images/project-messaging.jpg",
            "Bulk Email & SMS Messaging Demo System",
        ),
        problem: "Government departments need reliable ways to communicate with citizens at scale while \
maintaining GDPR compliance and tracking delivery metrics.",
        solution: "Developed a demonstration messaging platform with template management, scheduling, \
analytics dashboard, and full audit logging capabilities.",
        technologies: &["React", "Node.js", "PostgreSQL", "Azure", "SendGrid API"],
        outcome: "Showcases ability to handle high-volume communications with enterprise-grade reliability \
and compliance features.",
    },
    Project {
        id: "admin-dashboard",
        title: "Internal Admin Dashboard Prototype",
        category: "Web Application",
        image: project_image(
            "/images/project-admin.jpg",
            "Internal Admin Dashboard Prototype",
        ),
        problem: "Public sector organisations require secure internal tools for managing operations, users, \
and workflows with role-based access controls.",
        solution: "Created a comprehensive admin dashboard prototype featuring user management, data \
visualization, audit trails, and granular permission systems.",
        technologies: &["TypeScript", "React", "Tailwind CSS", "Express", "PostgreSQL"],
        outcome: "Demonstrates capability to build secure, accessible internal tools meeting government \
accessibility standards (WCAG 2.1).",
    },
    Project {
        id: "cloud-migration",
        title: "Cloud Migration Sample Project",
        category: "Infrastructure",
        image: project_image("/images/project-cloud.jpg", "Cloud Migration Sample Project"),
        problem: "Many government systems need migration from on-premises infrastructure to cloud platforms \
while maintaining security and compliance.",
        solution: "Executed a demonstration cloud migration project showing the complete process from \
assessment through deployment with infrastructure-as-code.",
        technologies: &["Azure", "Docker", "Terraform", "CI/CD", "Monitoring"],
        outcome: "Illustrates expertise in cloud architecture, security configuration, and automated \
deployment pipelines.",
    },
    Project {
        id: "document-portal",
        title: "Secure Document Upload Portal Demo",
        category: "Web Application",
        image: project_image(
            "/images/project-documents.jpg",
            "Secure Document Upload Portal Demo",
        ),
        problem: "Government services need secure portals for citizens to submit documents with encryption, \
virus scanning, and audit capabilities.",
        solution: "Built a demonstration secure upload system with drag-and-drop interface, automatic virus \
scanning, encryption at rest, and comprehensive logging.",
        technologies: &["React", "AWS S3", "Lambda", "API Gateway", "CloudWatch"],
        outcome: "Demonstrates understanding of security requirements for handling sensitive citizen data in \
compliance with data protection regulations.",
    },
];

pub const CAPABILITIES: &[&str] = &[
    "Modern web application development",
    "Cloud infrastructure (Azure & AWS)",
    "Security and compliance implementation",
    "API development and integration",
    "Database design and management",
    "CI/CD and automated deployment",
    "Responsive, accessible interfaces",
    "Comprehensive documentation",
];
