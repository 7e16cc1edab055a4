//! Page templates.
//!
//! One renderer per [`Route`] plus the `404.html` page. Each renderer
//! resolves its SEO metadata, mounts it into a fresh [`Head`] for the
//! duration of the render, and wraps its content in
//! [`layout::base_document`].
//!
//! Long-form copy is stored as Markdown in [`crate::content`] and converted
//! here with pulldown-cmark.

use crate::content::company::{self, COMPANY};
use crate::content::images::{HERO, TEAM_WORKING};
use crate::content::projects::{CAPABILITIES, PORTFOLIO_NOTE, PROJECTS};
use crate::content::services::{APPROACH, SERVICES, WHY_CHOOSE_US};
use crate::content::team::TEAM;
use crate::content::{Project, TeamMember};
use crate::head::Head;
use crate::layout::{self, Chrome, PageShell};
use crate::responsive::{Placeholder, PreloadedImage, ResponsiveImage};
use crate::routes::{Route, TEAM_PREFIX, UNKNOWN_MEMBER_REDIRECT};
use crate::seo::{self, EntitySummary, PageOverrides, StructuredDataKind};
use crate::types::BreadcrumbItem;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Site-wide inputs shared by every page render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub chrome: Chrome<'a>,
    /// Absolute origin used for canonical URLs, without a trailing slash.
    pub base_url: &'a str,
    /// Critical images confirmed by the preload check. Home page only.
    pub preloads: &'a [PreloadedImage],
    /// Loading placeholder for portfolio project images.
    pub project_placeholder: Placeholder,
}

pub fn render_route(route: Route, ctx: &PageContext<'_>) -> Markup {
    match route {
        Route::Home => render_home(ctx),
        Route::About => render_about(ctx),
        Route::Services => render_services(ctx),
        Route::Portfolio => render_portfolio(ctx),
        Route::Contact => render_contact(ctx),
        Route::TeamMember(member) => render_team_member(member, ctx),
    }
}

/// Convert Markdown copy to HTML.
pub fn markdown(source: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    PreEscaped(out)
}

struct PageSpec<'a> {
    path: String,
    /// `false` for pages that must not declare a canonical URL.
    canonical: bool,
    seo_key: &'a str,
    overrides: PageOverrides,
    structured: Option<StructuredDataKind>,
    preloads: &'a [PreloadedImage],
}

fn page(ctx: &PageContext<'_>, spec: PageSpec<'_>, content: Markup) -> Markup {
    let overrides = if spec.canonical {
        spec.overrides.url(format!("{}{}", ctx.base_url, spec.path))
    } else {
        spec.overrides
    };
    let meta = seo::resolve(spec.seo_key, Some(&overrides));
    let data = spec
        .structured
        .map(|kind| kind.build(&EntitySummary::from(&meta)));

    let mut head = Head::new();
    let mounted = head.mount(&meta, data.as_ref());
    layout::base_document(
        &ctx.chrome,
        PageShell {
            current_path: &spec.path,
            head: mounted.render(),
            canonical: meta.url.as_deref(),
            preloads: spec.preloads,
            content,
        },
    )
}

fn top_level<'a>(route: Route) -> PageSpec<'a> {
    PageSpec {
        path: route.path(),
        canonical: true,
        seo_key: route.seo_key().unwrap_or_default(),
        overrides: PageOverrides::default(),
        structured: route.structured_data(),
        preloads: &[],
    }
}

fn page_hero(title: &str, lead: &str) -> Markup {
    html! {
        section.page-hero {
            div.container.narrow.center {
                h1 { (title) }
                p.lead { (lead) }
            }
        }
    }
}

// ============================================================================
// Home
// ============================================================================

pub fn render_home(ctx: &PageContext<'_>) -> Markup {
    let content = html! {
        section.hero {
            div.hero-background {
                (ResponsiveImage::new(HERO).with_class("cover").render())
            }
            div.container.hero-content {
                h1 { (company::HERO_HEADING) }
                p.lead { (company::HERO_SUBHEADING) }
                div.actions {
                    a.button.secondary href="/portfolio" { "View Our Work" }
                    a.button.outline.inverse href="/contact" { "Contact Us" }
                }
            }
        }
        section.trust-bar {
            ul.container.trust-list {
                @for indicator in company::TRUST_INDICATORS {
                    li { (indicator) }
                }
            }
        }
        section.section.services-overview {
            div.container {
                div.section-heading {
                    h2 { "Our Core Services" }
                    p { "Comprehensive IT solutions designed specifically for Irish government and public sector requirements" }
                }
                div.card-grid.four {
                    @for service in company::CORE_SERVICES {
                        article.card {
                            h3 { (service.title) }
                            p { (service.description) }
                        }
                    }
                }
                div.actions.center {
                    a.button.outline href="/services" { "View All Services" }
                }
            }
        }
        section.section {
            div.container.narrow.center {
                h2 { "Modern Solutions. Government Standards." }
                p.lead { (company::VALUE_PROPOSITION) }
                dl.stats {
                    @for stat in company::STATS {
                        div.stat {
                            dt { (stat.value) }
                            dd { (stat.label) }
                        }
                    }
                }
            }
        }
        (call_to_action("Ready to Work Together?", company::AVAILABILITY, "Get in Touch"))
    };

    let mut spec = top_level(Route::Home);
    spec.preloads = ctx.preloads;
    page(ctx, spec, content)
}

fn call_to_action(heading: &str, body: &str, label: &str) -> Markup {
    html! {
        section.section.cta {
            div.container.narrow.center {
                h2 { (heading) }
                p.lead { (body) }
                a.button.secondary href="/contact" { (label) }
            }
        }
    }
}

// ============================================================================
// About
// ============================================================================

pub fn render_about(ctx: &PageContext<'_>) -> Markup {
    let content = html! {
        (page_hero(
            &format!("About {}", COMPANY.name),
            "A new generation of IT professionals committed to excellence in public sector service delivery",
        ))
        section.section {
            div.container.split {
                div.prose {
                    h2 { "Our Story" }
                    (markdown(company::STORY))
                }
                (ResponsiveImage::new(TEAM_WORKING).with_class("rounded").render())
            }
        }
        section.section.tinted {
            div.container.narrow.center {
                h2 { "Our Mission" }
                p.lead { (company::MISSION) }
            }
        }
        section.section {
            div.container {
                div.section-heading {
                    h2 { "Our Values" }
                    p { "The principles that guide our work with public sector clients" }
                }
                div.card-grid.three {
                    @for value in company::VALUES {
                        article.card.center {
                            h3 { (value.title) }
                            p { (value.description) }
                        }
                    }
                }
            }
        }
        section.section.muted id="team" {
            div.container {
                div.section-heading {
                    h2 { "Our Team" }
                    p {
                        "Software engineering graduates with expertise in modern development practices, "
                        "cloud technologies, and secure system design"
                    }
                }
                div.card-grid.four {
                    @for member in TEAM {
                        (team_card(member))
                    }
                }
            }
        }
        section.section {
            div.container.narrow {
                div.section-heading {
                    h2 { "Certifications & Standards" }
                }
                ul.badge-list {
                    @for cert in company::CERTIFICATIONS {
                        li.badge { (cert) }
                    }
                }
            }
        }
    };

    page(ctx, top_level(Route::About), content)
}

fn team_card(member: &TeamMember) -> Markup {
    html! {
        a.card.center.team-card href={ (TEAM_PREFIX) (member.id) } {
            (avatar(member, "avatar"))
            h3 { (member.name) }
            p.muted { (member.role) }
        }
    }
}

/// Portrait if the member has one, otherwise their initials.
fn avatar(member: &TeamMember, class: &str) -> Markup {
    html! {
        div class=(class) {
            @match member.image {
                Some(src) => {
                    img src=(src) alt=(member.name) loading="lazy" decoding="async";
                }
                None => {
                    span.initials aria-hidden="true" { (member.initials) }
                }
            }
        }
    }
}

// ============================================================================
// Services
// ============================================================================

pub fn render_services(ctx: &PageContext<'_>) -> Markup {
    let content = html! {
        (page_hero(
            "Our Services",
            "Comprehensive IT solutions designed for Irish government and public sector organisations",
        ))
        section.section {
            div.container.stack {
                @for service in SERVICES {
                    article.card.service id=(service.id) {
                        h2 { (service.title) }
                        p.muted { (service.description) }
                        ul.check-list {
                            @for feature in service.features {
                                li { (feature) }
                            }
                        }
                    }
                }
            }
        }
        section.section.tinted {
            div.container {
                div.section-heading {
                    h2 { "Why Choose " (COMPANY.name) }
                }
                div.card-grid.four {
                    @for reason in WHY_CHOOSE_US {
                        article.card {
                            h3 { (reason.title) }
                            p { (reason.description) }
                        }
                    }
                }
            }
        }
        section.section {
            div.container {
                div.section-heading {
                    h2 { "Our Approach" }
                }
                ol.steps {
                    @for phase in APPROACH {
                        li.step {
                            span.step-number { (phase.step) }
                            h3 { (phase.title) }
                            p { (phase.description) }
                        }
                    }
                }
            }
        }
    };

    page(ctx, top_level(Route::Services), content)
}

// ============================================================================
// Portfolio
// ============================================================================

pub fn render_portfolio(ctx: &PageContext<'_>) -> Markup {
    let content = html! {
        (page_hero(
            "Portfolio",
            "Demonstration projects showcasing our technical capabilities and approach to public sector IT challenges",
        ))
        section.section {
            div.container {
                aside.notice { strong { "Note: " } (PORTFOLIO_NOTE) }
                div.stack {
                    @for project in PROJECTS {
                        (project_card(project, ctx.project_placeholder))
                    }
                }
            }
        }
        section.section.tinted {
            div.container {
                div.section-heading {
                    h2 { "Demonstrated Capabilities" }
                }
                ul.check-list.columns {
                    @for capability in CAPABILITIES {
                        li { (capability) }
                    }
                }
            }
        }
        (call_to_action(
            "Available for Public Sector Tenders & Framework Agreements",
            "We're available to discuss how we can bring similar solutions to your organisation's challenges",
            "Get in Touch",
        ))
    };

    page(ctx, top_level(Route::Portfolio), content)
}

fn project_card(project: &Project, placeholder: Placeholder) -> Markup {
    let image = project.image.with_placeholder(placeholder);
    html! {
        article.card.project id=(project.id) {
            div.project-media {
                (ResponsiveImage::new(image).render())
            }
            div.project-body {
                span.badge { (project.category) }
                h2 { (project.title) }
                h3 { "Problem" }
                p { (project.problem) }
                h3 { "Solution" }
                p { (project.solution) }
                h3 { "Technologies Used" }
                ul.badge-list {
                    @for tech in project.technologies {
                        li.badge { (tech) }
                    }
                }
                h3 { "Outcome" }
                p { (project.outcome) }
            }
        }
    }
}

// ============================================================================
// Contact
// ============================================================================

pub fn render_contact(ctx: &PageContext<'_>) -> Markup {
    let address = &COMPANY.address;
    let content = html! {
        (page_hero("Contact Us", "We're here to discuss how we can support your organisation's IT requirements."))
        section.section {
            div.container.split {
                div.stack {
                    article.card {
                        h2 { "Get in Touch" }
                        h3 { "Email" }
                        p { a href={ "mailto:" (COMPANY.email) } { (COMPANY.email) } }
                        h3 { "Phone" }
                        p { a href={ "tel:" (COMPANY.phone_intl) } { (COMPANY.phone) } }
                        h3 { "Registered Address" }
                        address {
                            (address.street) br;
                            (address.city) ", " (address.postcode) br;
                            (address.country)
                        }
                    }
                    article.card {
                        h3 { "Business Hours" }
                        @for line in company::BUSINESS_HOURS {
                            p { (line) }
                        }
                    }
                }
                article.card {
                    h2 { "Send Us a Message" }
                    (contact_form())
                }
            }
        }
        section.section.tinted {
            div.container.narrow.center.prose {
                h2 { "Procurement Information" }
                (markdown(company::PROCUREMENT))
                div.actions.center {
                    button.button.outline type="button" { "Download Company Profile (PDF)" }
                    button.button.outline type="button" { "View Certifications" }
                }
            }
        }
    };

    page(ctx, top_level(Route::Contact), content)
}

/// Static form. There is no submission backend.
fn contact_form() -> Markup {
    html! {
        form.contact-form action={ "mailto:" (COMPANY.email) } method="post" enctype="text/plain" {
            div.form-row {
                (field("name", "Full Name *", "text", "John Doe", true))
                (field("email", "Email Address *", "email", "john.doe@example.ie", true))
            }
            div.form-row {
                (field("organization", "Organisation", "text", "Government Department or Agency", false))
                (field("phone", "Phone Number", "tel", COMPANY.phone, false))
            }
            (field("subject", "Subject *", "text", "Tender Inquiry / Partnership Opportunity", true))
            div.field {
                label for="message" { "Message *" }
                textarea id="message" name="message" rows="6" required
                    placeholder="Please provide details about your inquiry or project requirements..." {}
            }
            div.field.consent {
                input id="consent" name="consent" type="checkbox" required;
                label for="consent" {
                    "I consent to " (COMPANY.name) " processing my data in accordance with the "
                    "Privacy Policy for the purpose of responding to my inquiry."
                }
            }
            button.button.primary type="submit" { "Send Message" }
        }
    }
}

fn field(name: &str, label: &str, kind: &str, placeholder: &str, required: bool) -> Markup {
    html! {
        div.field {
            label for=(name) { (label) }
            input id=(name) name=(name) type=(kind) placeholder=(placeholder) required[required];
        }
    }
}

// ============================================================================
// Team member
// ============================================================================

pub fn render_team_member(member: &'static TeamMember, ctx: &PageContext<'_>) -> Markup {
    let breadcrumb = [
        BreadcrumbItem::link("Home", "/"),
        BreadcrumbItem::link("Our Team", "/about#team"),
        BreadcrumbItem::current(member.name),
    ];

    let content = html! {
        div.container.narrow.member-page {
            (layout::render_breadcrumb(&breadcrumb))
            header.member-header {
                (avatar(member, "avatar large"))
                div {
                    h1 { (member.name) }
                    p.role { (member.role) }
                    p { (member.bio) }
                    p.member-links {
                        a href={ "mailto:" (member.email) } { (member.email) }
                        @if let Some(linkedin) = member.linkedin {
                            " · "
                            a href=(linkedin) target="_blank" rel="noopener noreferrer" { "LinkedIn" }
                        }
                    }
                }
            }
            (detail_list("Experience", member.experience))
            section.card {
                h2 { "Skills" }
                ul.badge-list {
                    @for skill in member.skills {
                        li.badge { (skill) }
                    }
                }
            }
            (detail_list("Education", member.education))
            @if !member.certifications.is_empty() {
                (detail_list("Certifications", member.certifications))
            }
        }
    };

    let spec = PageSpec {
        path: Route::TeamMember(member).path(),
        canonical: true,
        seo_key: "team",
        overrides: PageOverrides::default()
            .title(format!("{} - {} | {}", member.name, member.role, COMPANY.name))
            .description(member.bio),
        structured: None,
        preloads: &[],
    };
    page(ctx, spec, content)
}

fn detail_list(heading: &str, items: &[&str]) -> Markup {
    html! {
        section.card {
            h2 { (heading) }
            ul.check-list {
                @for item in items {
                    li { (item) }
                }
            }
        }
    }
}

// ============================================================================
// Not found
// ============================================================================

/// `404.html`. Unknown `/team/{id}` paths are sent to the about page by
/// `site.js`, driven by the data attributes on `main`'s first child.
pub fn render_not_found(ctx: &PageContext<'_>) -> Markup {
    let content = html! {
        section.page-hero.not-found
            data-redirect-prefix=(TEAM_PREFIX)
            data-redirect-to=(UNKNOWN_MEMBER_REDIRECT) {
            div.container.narrow.center {
                h1 { "Page Not Found" }
                p.lead { "The page you are looking for does not exist or has moved." }
                a.button.primary href="/" { "Back to Home" }
            }
        }
    };

    let spec = PageSpec {
        path: "/404".to_string(),
        canonical: false,
        seo_key: "not-found",
        overrides: PageOverrides::default().title(format!("Page Not Found | {}", COMPANY.name)),
        structured: None,
        preloads: &[],
    };
    page(ctx, spec, content)
}

// ============================================================================
// Tests
// ============================================================================
