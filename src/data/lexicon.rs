//! Literal skill patterns.
//!
//! Patterns run against normalized text, so they are written in lower case
//! against lemma forms ("recruiting" also covers "recruiters").

use crate::processing::lexicon::{PatternDef, SkillCategory};

macro_rules! pattern {
    ($re:expr, $skill:expr, $weight:expr, $category:ident) => {
        PatternDef {
            pattern: $re,
            skill: $skill,
            weight: $weight,
            category: SkillCategory::$category,
        }
    };
}

pub const SKILL_PATTERNS: &[PatternDef] = &[
    // Languages
    pattern!(r"\bpython\b", "Python", 10, Language),
    pattern!(r"\bjavascript\b|\bes6\b", "JavaScript", 10, Language),
    pattern!(r"\btypescript\b", "TypeScript", 9, Language),
    pattern!(r"\bjava\b", "Java", 10, Language),
    pattern!(r"\bkotlin\b", "Kotlin", 8, Language),
    pattern!(r"\bscala\b", "Scala", 8, Language),
    pattern!(r"\bgolang\b|\bgo (?:developer|engineer|programming|services)\b", "Go", 9, Language),
    pattern!(r"\brust\b", "Rust", 9, Language),
    pattern!(r"\bc\+\+", "C++", 9, Language),
    pattern!(r"\bc#|\bc sharp\b|\.net\b", "C#", 9, Language),
    pattern!(r"\bruby\b", "Ruby", 8, Language),
    pattern!(r"\bsql\b", "SQL", 8, Language),
    // Frameworks
    pattern!(r"\breact(?:\.js|js)\b|\breact(?: native| hooks| redux|,|/)", "React", 8, Framework),
    pattern!(r"\bnode(?:\.js|js)\b", "Node.js", 8, Framework),
    pattern!(r"\bangular(?:js)?\b", "Angular", 8, Framework),
    pattern!(r"\bdjango\b", "Django", 8, Framework),
    pattern!(r"\bspring (?:boot|framework|mvc|cloud)\b", "Spring", 8, Framework),
    // Cloud & infrastructure
    pattern!(r"\baws\b|\bamazon web services\b", "AWS", 9, Cloud),
    pattern!(r"\bgcp\b|\bgoogle cloud\b", "GCP", 9, Cloud),
    pattern!(r"\bazure\b", "Azure", 9, Cloud),
    pattern!(r"\bcloud (?:computing|infrastructure|platforms?|services)\b", "Cloud Computing", 7, Cloud),
    pattern!(r"\bdocker\b", "Docker", 8, Cloud),
    pattern!(r"\bcontainerization\b", "Containerization", 6, Cloud),
    pattern!(r"\bkubernetes\b|\bk8s\b", "Kubernetes", 8, Cloud),
    pattern!(r"\bterraform\b", "Terraform", 7, Cloud),
    pattern!(r"\binfrastructure as code\b", "Infrastructure as Code", 6, Cloud),
    pattern!(r"\bci/cd\b|\bcontinuous (?:integration|delivery|deployment)\b", "CI/CD", 7, Cloud),
    pattern!(r"\blinux\b|\bunix\b", "Linux", 6, Cloud),
    // Data & ML
    pattern!(r"\bmachine learning\b", "Machine Learning", 9, Data),
    pattern!(r"\bai/ml\b", "AI/ML", 8, Data),
    pattern!(r"\bml (?:engineer|engineering|models?|pipeline|ops)\b", "ML", 7, Data),
    pattern!(r"\bdeep learning\b|\bneural networks?\b", "Deep Learning", 8, Data),
    pattern!(r"\bdata scien(?:ce|tists?)\b", "Data Science", 8, Data),
    pattern!(r"\bdata analy(?:sis|tics)\b", "Data Analysis", 7, Data),
    pattern!(r"\bstatistic(?:s|al)\b", "Statistics", 7, Data),
    pattern!(r"\bpostgres(?:ql)?\b", "PostgreSQL", 7, Data),
    pattern!(r"\bmysql\b|\bmariadb\b", "MySQL", 7, Data),
    pattern!(r"\bpyspark\b|\bspark\b", "Spark", 7, Data),
    // Engineering practice
    pattern!(r"\bsoftware (?:engineering|development|engineers?)\b", "Software Engineering", 8, Engineering),
    pattern!(r"\bmicroservices\b", "Microservices", 7, Engineering),
    pattern!(r"\brest(?:ful)? api\b", "REST APIs", 7, Engineering),
    pattern!(r"\bdistributed systems?\b", "Distributed Systems", 8, Engineering),
    pattern!(r"\bsystems? design\b", "System Design", 7, Engineering),
    pattern!(r"\bcode reviews?\b", "Code Review", 6, Engineering),
    pattern!(r"\bgit\b|\bgithub\b|\bgitlab\b", "Git", 5, Engineering),
    pattern!(r"\bagile\b|\bscrum\b|\bkanban\b", "Agile", 6, Engineering),
    // Recruiting
    pattern!(r"\brecruiting\b", "Recruiting", 9, Recruiting),
    pattern!(r"\btalent acquisition\b", "Talent Acquisition", 9, Recruiting),
    pattern!(r"\b(?:technical|tech|engineering) recruiting\b", "Technical Recruiting", 9, Recruiting),
    pattern!(r"\bexecutive (?:recruiting|search)\b", "Executive Recruiting", 9, Recruiting),
    pattern!(r"\b(?:campus|university|college) recruiting\b", "Campus Recruiting", 8, Recruiting),
    pattern!(r"\bdiversity (?:recruiting|hiring|sourcing)\b", "Diversity Recruiting", 8, Recruiting),
    pattern!(r"\b(?:full-cycle|full cycle|end-to-end|360) recruiting\b", "Full-Cycle Recruiting", 8, Recruiting),
    pattern!(r"\bsourcing\b", "Sourcing", 8, Recruiting),
    pattern!(r"\bapplicant tracking(?: systems?)?\b|\bats\b", "Applicant Tracking Systems", 7, Recruiting),
    pattern!(r"\binterviewing\b", "Interviewing", 7, Recruiting),
    pattern!(r"\boffer negotiation\b|\bnegotiation (?:of )?offers?\b", "Offer Negotiation", 7, Recruiting),
    pattern!(r"\bnegotiation\b", "Negotiation", 6, Business),
    pattern!(r"\bemployer brand(?:ing)?\b", "Employer Branding", 7, Recruiting),
    pattern!(r"\bcandidate experience\b", "Candidate Experience", 6, Recruiting),
    pattern!(r"\bdei\b|\bd&i\b|\bdiversity,? equity,? (?:and|&) inclusion\b", "DEI", 6, Recruiting),
    // People operations
    pattern!(r"\bhuman resources\b|\bhr\b|\bpeople operations\b", "Human Resources", 8, PeopleOps),
    pattern!(r"\bemployee relations\b", "Employee Relations", 7, PeopleOps),
    pattern!(r"\bperformance (?:management|reviews?)\b", "Performance Management", 7, PeopleOps),
    pattern!(r"\bcompensation\b|\btotal rewards\b", "Compensation", 6, PeopleOps),
    pattern!(r"\bonboarding\b", "Onboarding", 6, PeopleOps),
    pattern!(r"\bhris\b", "HRIS", 7, PeopleOps),
    pattern!(r"\btalent management\b|\bsuccession planning\b", "Talent Management", 7, PeopleOps),
    pattern!(r"\b(?:employment|labou?r) law\b", "Employment Law", 7, PeopleOps),
    // Leadership & business
    pattern!(r"\bleadership\b", "Leadership", 8, Leadership),
    pattern!(r"\b(?:people|team) management\b|\bdirect reports\b", "People Management", 8, Leadership),
    pattern!(r"\bmentoring\b|\bcoaching\b", "Mentoring", 6, Leadership),
    pattern!(r"\bstakeholder (?:management|engagement|relationships?)\b", "Stakeholder Management", 7, Leadership),
    pattern!(r"\bproject management\b|\bpmp\b", "Project Management", 7, Business),
    pattern!(r"\bstrateg(?:ic|y) planning\b", "Strategic Planning", 6, Business),
    pattern!(r"\bbudget(?:ing| management)\b", "Budgeting", 5, Business),
    // Soft skills
    pattern!(r"\bcommunication skills?\b|\b(?:written|verbal) communication\b", "Communication", 5, Soft),
    pattern!(r"\bproblem[- ]solving\b", "Problem Solving", 5, Soft),
    pattern!(r"\bcross-functional collaboration\b|\bcollaboration\b|\bteamwork\b", "Collaboration", 4, Soft),
];
