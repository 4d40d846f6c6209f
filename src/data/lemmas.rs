//! Variant -> lemma rewrites applied by the normalizer.
//!
//! Lemmas are the word forms the skill patterns are written against, so a
//! lemma must never appear on the left-hand side.

pub const LEMMAS: &[(&str, &str)] = &[
    // sourcing
    ("sourcer", "sourcing"),
    ("sourcers", "sourcing"),
    ("sourced", "sourcing"),
    // recruiting
    ("recruiter", "recruiting"),
    ("recruiters", "recruiting"),
    ("recruited", "recruiting"),
    ("recruitment", "recruiting"),
    // managing people and projects
    ("managed", "manage"),
    ("manages", "manage"),
    ("managing", "manage"),
    ("led", "lead"),
    ("leads", "lead"),
    ("leaders", "leader"),
    ("mentor", "mentoring"),
    ("mentors", "mentoring"),
    ("mentored", "mentoring"),
    ("coached", "coaching"),
    ("stakeholders", "stakeholder"),
    // hiring process
    ("interviewed", "interviewing"),
    ("interviews", "interviewing"),
    ("interviewer", "interviewing"),
    ("interviewers", "interviewing"),
    ("negotiated", "negotiation"),
    ("negotiating", "negotiation"),
    ("negotiations", "negotiation"),
    ("onboarded", "onboarding"),
    ("hired", "hiring"),
    // engineering vocabulary
    ("developed", "develop"),
    ("develops", "develop"),
    ("apis", "api"),
    ("microservice", "microservices"),
    ("databases", "database"),
    ("pipelines", "pipeline"),
    ("containerized", "containerization"),
    ("containerised", "containerization"),
    // spelling variants
    ("analysed", "analyzed"),
    ("organisation", "organization"),
    ("programme", "program"),
    ("modelling", "modeling"),
];
