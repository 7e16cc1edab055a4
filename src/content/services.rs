//! Service offerings shown on the services page.

use super::{Highlight, ProcessStep, Service};

pub const SERVICES: &[Service] = &[
    Service {
        id: "software-development",
        title: "Software Development & Integration",
        description: "Custom application development tailored to public sector requirements",
        features: &[
            "Web applications with modern, accessible interfaces",
            "Internal tools and workflow automation systems",
            "API development and third-party system integration",
            "Legacy system modernisation and migration",
            "Compliance with accessibility standards (WCAG 2.1)",
        ],
    },
    Service {
        id: "cloud-infrastructure",
        title: "Cloud & Infrastructure Support",
        description: "Secure, scalable cloud solutions on trusted platforms",
        features: &[
            "Azure and AWS infrastructure setup and configuration",
            "Cloud migration planning and execution",
            "Infrastructure monitoring and optimisation",
            "Disaster recovery and backup solutions",
            "Cost management and resource optimisation",
        ],
    },
    Service {
        id: "maintenance-support",
        title: "System Maintenance & Technical Support",
        description: "Reliable ongoing support ensuring continuous operation",
        features: &[
            "24/7 system monitoring and alerting",
            "Regular security patches and updates",
            "Performance tuning and optimisation",
            "Service Level Agreement (SLA) guarantees",
            "Incident response and resolution",
        ],
    },
    Service {
        id: "messaging-systems",
        title: "Messaging Systems (Email / SMS)",
        description: "Robust communication platforms for citizen engagement",
        features: &[
            "Bulk email solutions with tracking and analytics",
            "SMS notification systems for urgent communications",
            "Integration with existing CRM and database systems",
            "Template management and personalisation",
            "Compliance with data protection regulations",
        ],
    },
];

pub const WHY_CHOOSE_US: &[Highlight] = &[
    Highlight {
        title: "Government-Ready",
        description: "Deep understanding of public sector requirements including procurement processes, \
compliance standards, and accessibility requirements.",
    },
    Highlight {
        title: "Modern Expertise",
        description: "Current knowledge of contemporary technologies and development practices, \
bringing efficient solutions to government challenges.",
    },
    Highlight {
        title: "Security First",
        description: "Commitment to secure development practices, data protection compliance, \
and robust security protocols in all our solutions.",
    },
    Highlight {
        title: "Reliable Support",
        description: "Dedicated technical support with clear SLAs, ensuring your systems \
remain operational and responsive to your needs.",
    },
];

pub const APPROACH: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Discovery & Analysis",
        description: "Understanding your requirements, constraints, and compliance needs",
    },
    ProcessStep {
        step: "02",
        title: "Solution Design",
        description: "Creating detailed technical plans aligned with government standards",
    },
    ProcessStep {
        step: "03",
        title: "Development & Testing",
        description: "Building and rigorously testing solutions to ensure reliability",
    },
    ProcessStep {
        step: "04",
        title: "Deployment & Support",
        description: "Smooth rollout with comprehensive documentation and ongoing support",
    },
];
