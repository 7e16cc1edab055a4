//! Company identity and the copy for the home, about and contact pages.

use super::{Address, CompanyInfo, Highlight, SocialLinks, Stat};

pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "Public Sector IT Solutions",
    tagline: "Transforming Government Through Technology",
    description: "Leading provider of IT solutions and digital transformation services for the Irish public sector",
    email: "info@publicsectoritsolutions.ie",
    phone: "+353 1 234 5678",
    phone_intl: "+353-1-234-5678",
    address: Address {
        street: "123 Government Quarter",
        city: "Dublin",
        county: "Dublin",
        postcode: "D02 XY12",
        country: "Ireland",
        country_code: "IE",
    },
    social: SocialLinks {
        linkedin: "https://linkedin.com/company/public-sector-it-solutions",
        twitter: "https://twitter.com/publicsectorit",
        website: "https://publicsectoritsolutions.ie",
    },
    registration: "Company Registration No: 123456, Registered in Ireland",
    founded: "2018",
    logo: "/images/logo.png",
};

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub const HERO_HEADING: &str = "Reliable IT Services for Public and Private Sector Organisations";
pub const HERO_SUBHEADING: &str = "We are a dedicated team of software engineers delivering secure, efficient and compliant digital solutions.";

pub const TRUST_INDICATORS: &[&str] = &[
    "Registered eTenders Supplier",
    "GDPR Compliant",
    "Cloud-Ready Solutions",
];

pub const CORE_SERVICES: &[Highlight] = &[
    Highlight {
        title: "Software Development",
        description: "Custom applications and integrations for public sector needs",
    },
    Highlight {
        title: "Cloud Infrastructure",
        description: "Secure Azure and AWS solutions with full compliance",
    },
    Highlight {
        title: "Technical Support",
        description: "Reliable maintenance and monitoring with SLA guarantees",
    },
    Highlight {
        title: "Messaging Systems",
        description: "Email and SMS solutions for citizen communication",
    },
];

pub const VALUE_PROPOSITION: &str = "As a graduate-led company, we bring fresh expertise in modern technologies combined with \
a deep commitment to the reliability, security, and compliance that public sector organisations require. \
We understand government procurement processes and deliver solutions that meet stringent standards.";

pub const STATS: &[Stat] = &[
    Stat {
        value: "100%",
        label: "Project Delivery",
    },
    Stat {
        value: "24/7",
        label: "Technical Support",
    },
    Stat {
        value: "GDPR",
        label: "Fully Compliant",
    },
];

pub const AVAILABILITY: &str =
    "Available for public sector tenders, framework agreements, and partnership opportunities.";

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

/// Markdown; rendered with pulldown-cmark.
pub const STORY: &str = "\
We were founded by a team of software engineering graduates who recognised the opportunity \
to bring modern technical expertise to Ireland's public sector.

While we are a young company, our team brings strong technical skills developed through \
rigorous academic training and practical experience with contemporary technologies including \
**cloud platforms**, **modern web frameworks**, and **secure development practices**.

We understand that government organisations require partners who can demonstrate reliability, \
compliance knowledge, and commitment to long-term service excellence. These principles guide \
every project we undertake.
";

pub const MISSION: &str = "To deliver modern, efficient and accessible digital services that help Irish public bodies \
serve citizens better. We are committed to bringing contemporary technical expertise while \
maintaining the rigorous standards of reliability, security, and compliance that government \
organisations require.";

pub const VALUES: &[Highlight] = &[
    Highlight {
        title: "Reliability",
        description: "Delivering consistent, dependable solutions that public sector organisations can trust",
    },
    Highlight {
        title: "Transparency",
        description: "Clear communication and honest reporting throughout every project",
    },
    Highlight {
        title: "Accountability",
        description: "Taking ownership of outcomes and maintaining the highest professional standards",
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Microsoft Azure Fundamentals (AZ-900)",
    "AWS Cloud Practitioner",
    "GDPR Compliance Certification",
    "ISO 27001 Knowledge",
];

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

pub const BUSINESS_HOURS: &[&str] = &["Monday - Friday: 9:00 AM - 6:00 PM", "Emergency Support: 24/7"];

/// Markdown; rendered with pulldown-cmark.
pub const PROCUREMENT: &str = "\
We are registered on the **eTenders** platform and available to participate in government \
procurement processes. We can provide detailed responses to Requests for Tender (RFTs) and \
are open to framework agreement opportunities.
";
