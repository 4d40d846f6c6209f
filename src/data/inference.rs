//! Inference rules and role archetypes.

use crate::processing::inference::{ArchetypeDef, InferenceRuleDef};
use crate::processing::lexicon::SkillCategory;

macro_rules! rule {
    ($trigger:expr, $skill:expr, $weight:expr, $confidence:expr, $category:ident) => {
        InferenceRuleDef {
            trigger: $trigger,
            skill: $skill,
            weight: $weight,
            confidence: $confidence,
            category: SkillCategory::$category,
        }
    };
}

pub const INFERENCE_RULES: &[InferenceRuleDef] = &[
    // people leadership phrasing
    rule!(r"\b(?:manage|lead|built|grew|scaled) (?:a |the )?team of \d+", "Leadership", 8, 0.7, Leadership),
    rule!(r"\b(?:manage|lead) (?:a |the )?(?:team|group|department)\b", "People Management", 7, 0.6, Leadership),
    rule!(r"\b\d+ direct reports?\b", "People Management", 8, 0.8, Leadership),
    rule!(r"\b(?:mentoring|coaching) (?:junior|new|team)", "Mentoring", 6, 0.6, Leadership),
    // recruiting tools and practices
    rule!(r"\b(?:greenhouse|lever|icims|taleo|workable|jobvite|smartrecruiters|ashby)\b", "Applicant Tracking Systems", 7, 0.8, Recruiting),
    rule!(r"\blinkedin (?:recruiting|recruiter|sourcing)\b", "Sourcing", 7, 0.8, Recruiting),
    rule!(r"\bboolean (?:search|strings?)\b", "Sourcing", 7, 0.7, Recruiting),
    rule!(r"\bhiring managers?\b", "Stakeholder Management", 6, 0.6, Leadership),
    rule!(r"\b(?:fill|filled|close|closed|hiring|hire) (?:\d+|over \d+|more than \d+)\+? (?:roles|positions|requisitions|reqs|hires)\b", "Full-Cycle Recruiting", 7, 0.6, Recruiting),
    rule!(r"\brecruiting (?:software|backend|frontend|data|ml|machine learning|devops|sre) engineers?\b", "Technical Recruiting", 8, 0.7, Recruiting),
    rule!(r"\b(?:c-suite|vp-level|executive) (?:hires|hiring|searches|placements)\b", "Executive Recruiting", 7, 0.7, Recruiting),
    // people operations tools
    rule!(r"\b(?:workday|bamboohr|adp|successfactors|rippling|hibob)\b", "HRIS", 6, 0.7, PeopleOps),
    // engineering tools
    rule!(r"\b(?:pytorch|tensorflow|scikit-learn|sklearn|keras|xgboost)\b", "Machine Learning", 8, 0.7, Data),
    rule!(r"\b(?:pandas|numpy|jupyter)\b", "Python", 7, 0.6, Language),
    rule!(r"\b(?:kubectl|helm|eks|gke|aks)\b", "Kubernetes", 7, 0.7, Cloud),
    rule!(r"\b(?:ec2|s3|lambda|cloudformation|dynamodb)\b", "AWS", 7, 0.7, Cloud),
    rule!(r"\b(?:github actions|jenkins|circleci|gitlab ci|travis)\b", "CI/CD", 6, 0.7, Cloud),
    rule!(r"\b(?:vue|vue\.js|next\.js|jquery)\b|\breact\b", "JavaScript", 7, 0.6, Language),
    rule!(r"\bdjango\b|\bflask\b|\bfastapi\b", "Python", 7, 0.7, Language),
    rule!(r"\ba/b test(?:s|ing)?\b|\bhypothesis testing\b|\bregression analysis\b", "Statistics", 6, 0.6, Data),
    // communication
    rule!(r"\bpresent(?:ed|ing)? (?:to|for) (?:executives|leadership|the board|c-suite)\b", "Communication", 5, 0.6, Soft),
];

pub const ARCHETYPES: &[ArchetypeDef] = &[
    ArchetypeDef {
        name: "Technical Recruiting",
        title_pattern: r"\b(?:technical|tech|engineering) (?:recruiting|sourcing|talent partner)\b",
        implied: &[
            ("Technical Recruiting", 0.9, SkillCategory::Recruiting),
            ("Recruiting", 0.8, SkillCategory::Recruiting),
            ("Sourcing", 0.7, SkillCategory::Recruiting),
            ("Interviewing", 0.6, SkillCategory::Recruiting),
            ("Applicant Tracking Systems", 0.5, SkillCategory::Recruiting),
        ],
    },
    ArchetypeDef {
        name: "Executive Recruiting",
        title_pattern: r"\bexecutive (?:recruiting|search)\b",
        implied: &[
            ("Executive Recruiting", 0.9, SkillCategory::Recruiting),
            ("Recruiting", 0.8, SkillCategory::Recruiting),
            ("Stakeholder Management", 0.7, SkillCategory::Leadership),
            ("Offer Negotiation", 0.6, SkillCategory::Recruiting),
            ("Sourcing", 0.6, SkillCategory::Recruiting),
        ],
    },
    ArchetypeDef {
        name: "HR Leadership",
        title_pattern: r"\b(?:hr|human resources|people) (?:director|manager|lead|business partner|operations manager)\b|\b(?:head|vp|director) of (?:hr|human resources|people)\b|\bchief people officer\b",
        implied: &[
            ("Human Resources", 0.9, SkillCategory::PeopleOps),
            ("Employee Relations", 0.7, SkillCategory::PeopleOps),
            ("Performance Management", 0.6, SkillCategory::PeopleOps),
            ("Leadership", 0.6, SkillCategory::Leadership),
            ("Employment Law", 0.5, SkillCategory::PeopleOps),
        ],
    },
    ArchetypeDef {
        name: "Software Engineering",
        title_pattern: r"\b(?:software|backend|back-end|frontend|front-end|full[- ]stack|platform) (?:engineer|developer)\b",
        implied: &[
            ("Software Engineering", 0.9, SkillCategory::Engineering),
            ("Git", 0.6, SkillCategory::Engineering),
            ("Code Review", 0.5, SkillCategory::Engineering),
            ("Problem Solving", 0.5, SkillCategory::Soft),
        ],
    },
    ArchetypeDef {
        name: "Data Science",
        title_pattern: r"\b(?:data scientist|machine learning engineer|ml engineer|data science (?:manager|lead))\b",
        implied: &[
            ("Data Science", 0.9, SkillCategory::Data),
            ("Machine Learning", 0.7, SkillCategory::Data),
            ("Statistics", 0.7, SkillCategory::Data),
            ("Python", 0.6, SkillCategory::Language),
            ("SQL", 0.5, SkillCategory::Language),
        ],
    },
    ArchetypeDef {
        name: "Engineering Management",
        title_pattern: r"\b(?:engineering manager|director of engineering|head of engineering|vp (?:of )?engineering|cto)\b",
        implied: &[
            ("Leadership", 0.8, SkillCategory::Leadership),
            ("People Management", 0.8, SkillCategory::Leadership),
            ("Software Engineering", 0.7, SkillCategory::Engineering),
            ("Mentoring", 0.6, SkillCategory::Leadership),
            ("Stakeholder Management", 0.6, SkillCategory::Leadership),
        ],
    },
];
