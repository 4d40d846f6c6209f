//! Canonical skill graph.
//!
//! Parent credit: how well the broader skill satisfies this narrower one.
//! Child credit: how well the narrower skill satisfies this broader one.
//! Edges are one hop and need not be declared on both ends.

use crate::processing::ontology::NodeDef;

pub const SKILL_ONTOLOGY: &[NodeDef] = &[
    // Languages
    NodeDef {
        id: "Python",
        aliases: &["python3", "python 3"],
        children: &[("Django", 0.8)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "JavaScript",
        aliases: &["js", "ecmascript", "es6"],
        children: &[("React", 0.8), ("Node.js", 0.8), ("Angular", 0.8)],
        related: &[("TypeScript", 0.8)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "TypeScript",
        aliases: &["ts"],
        related: &[("JavaScript", 0.9)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Java",
        aliases: &["jvm"],
        children: &[("Spring", 0.7)],
        related: &[("Kotlin", 0.6), ("Scala", 0.5), ("C#", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Kotlin",
        related: &[("Java", 0.7)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Scala",
        related: &[("Java", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Go",
        aliases: &["golang"],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Rust",
        aliases: &["rust lang"],
        related: &[("C++", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "C++",
        aliases: &["cpp"],
        related: &[("Rust", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "C#",
        aliases: &["csharp", "c sharp", ".net", "dotnet"],
        related: &[("Java", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Ruby",
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "SQL",
        children: &[("PostgreSQL", 0.8), ("MySQL", 0.8)],
        ..NodeDef::LEAF
    },
    // Frameworks
    NodeDef {
        id: "React",
        aliases: &["reactjs", "react.js"],
        parents: &[("JavaScript", 0.5)],
        related: &[("Angular", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Node.js",
        aliases: &["nodejs", "node"],
        parents: &[("JavaScript", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Angular",
        aliases: &["angularjs"],
        parents: &[("JavaScript", 0.5)],
        related: &[("React", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Django",
        parents: &[("Python", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Spring",
        aliases: &["spring boot", "spring framework"],
        parents: &[("Java", 0.5)],
        ..NodeDef::LEAF
    },
    // Cloud & infrastructure
    NodeDef {
        id: "Cloud Computing",
        aliases: &["cloud", "cloud infrastructure"],
        children: &[("AWS", 0.7), ("GCP", 0.7), ("Azure", 0.7)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "AWS",
        aliases: &["amazon web services"],
        parents: &[("Cloud Computing", 0.5)],
        related: &[("GCP", 0.6), ("Azure", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "GCP",
        aliases: &["google cloud", "google cloud platform"],
        parents: &[("Cloud Computing", 0.5)],
        related: &[("AWS", 0.6), ("Azure", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Azure",
        aliases: &["microsoft azure"],
        parents: &[("Cloud Computing", 0.5)],
        related: &[("AWS", 0.6), ("GCP", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Docker",
        aliases: &["containerization", "containers"],
        related: &[("Kubernetes", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Kubernetes",
        aliases: &["k8s"],
        related: &[("Docker", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Terraform",
        aliases: &["infrastructure as code", "iac"],
        related: &[("Cloud Computing", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "CI/CD",
        aliases: &["continuous integration", "continuous delivery", "continuous deployment"],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Linux",
        aliases: &["unix"],
        ..NodeDef::LEAF
    },
    // Data & ML
    NodeDef {
        id: "Machine Learning",
        aliases: &["ml", "ai/ml", "artificial intelligence"],
        children: &[("Deep Learning", 0.7)],
        related: &[("Data Science", 0.8), ("Statistics", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Deep Learning",
        aliases: &["neural networks"],
        parents: &[("Machine Learning", 0.8)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Data Science",
        children: &[("Machine Learning", 0.7), ("Statistics", 0.6), ("Data Analysis", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Data Analysis",
        aliases: &["data analytics", "analytics"],
        parents: &[("Data Science", 1.0)],
        related: &[("Statistics", 0.6), ("SQL", 0.4)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Statistics",
        aliases: &["statistical analysis"],
        parents: &[("Data Science", 0.8)],
        related: &[("Data Analysis", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "PostgreSQL",
        aliases: &["postgres"],
        parents: &[("SQL", 0.7)],
        related: &[("MySQL", 0.7)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "MySQL",
        aliases: &["mariadb"],
        parents: &[("SQL", 0.7)],
        related: &[("PostgreSQL", 0.7)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Spark",
        aliases: &["apache spark", "pyspark"],
        ..NodeDef::LEAF
    },
    // Engineering practice
    NodeDef {
        id: "Software Engineering",
        aliases: &["software development"],
        children: &[("System Design", 0.6), ("Code Review", 0.5), ("Microservices", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Microservices",
        parents: &[("Software Engineering", 0.5)],
        related: &[("Distributed Systems", 0.7), ("REST APIs", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "REST APIs",
        aliases: &["rest api", "restful api", "rest"],
        related: &[("Microservices", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Distributed Systems",
        related: &[("Microservices", 0.6), ("System Design", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "System Design",
        aliases: &["systems design"],
        parents: &[("Software Engineering", 0.5)],
        related: &[("Distributed Systems", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Code Review",
        parents: &[("Software Engineering", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Git",
        aliases: &["github", "gitlab", "version control"],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Agile",
        aliases: &["scrum", "kanban"],
        related: &[("Project Management", 0.5)],
        ..NodeDef::LEAF
    },
    // Recruiting
    NodeDef {
        id: "Recruiting",
        aliases: &["talent acquisition", "recruitment", "recruiter"],
        children: &[
            ("Technical Recruiting", 0.6),
            ("Executive Recruiting", 0.6),
            ("Campus Recruiting", 0.6),
            ("Diversity Recruiting", 0.6),
            ("Full-Cycle Recruiting", 0.8),
        ],
        related: &[("Sourcing", 0.7), ("Interviewing", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Technical Recruiting",
        aliases: &["tech recruiting", "engineering recruiting"],
        parents: &[("Recruiting", 1.0)],
        related: &[("Sourcing", 0.7)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Executive Recruiting",
        aliases: &["executive search"],
        parents: &[("Recruiting", 1.0)],
        related: &[("Stakeholder Management", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Campus Recruiting",
        aliases: &["university recruiting"],
        parents: &[("Recruiting", 1.0)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Diversity Recruiting",
        aliases: &["diversity hiring"],
        parents: &[("Recruiting", 1.0)],
        related: &[("DEI", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Full-Cycle Recruiting",
        aliases: &["full cycle recruiting", "end-to-end recruiting", "360 recruiting"],
        parents: &[("Recruiting", 1.0)],
        related: &[("Sourcing", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Sourcing",
        aliases: &["candidate sourcing", "talent sourcing"],
        related: &[("Recruiting", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Applicant Tracking Systems",
        aliases: &["ats", "applicant tracking"],
        related: &[("HRIS", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Interviewing",
        aliases: &["structured interviewing"],
        related: &[("Recruiting", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Negotiation",
        children: &[("Offer Negotiation", 0.7)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Offer Negotiation",
        aliases: &["closing candidates"],
        parents: &[("Negotiation", 0.8)],
        related: &[("Recruiting", 0.4)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Employer Branding",
        aliases: &["employer brand"],
        related: &[("Recruiting", 0.4)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Candidate Experience",
        related: &[("Recruiting", 0.4)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "DEI",
        aliases: &["diversity equity and inclusion", "diversity and inclusion"],
        related: &[("Diversity Recruiting", 0.6)],
        ..NodeDef::LEAF
    },
    // People operations
    NodeDef {
        id: "Human Resources",
        aliases: &["hr", "people operations", "people ops"],
        children: &[
            ("Employee Relations", 0.6),
            ("Performance Management", 0.6),
            ("Compensation", 0.6),
            ("Onboarding", 0.5),
            ("HRIS", 0.5),
            ("Talent Management", 0.6),
            ("Employment Law", 0.5),
        ],
        related: &[("Recruiting", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Employee Relations",
        parents: &[("Human Resources", 1.0)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Performance Management",
        aliases: &["performance reviews"],
        parents: &[("Human Resources", 1.0)],
        related: &[("People Management", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Compensation",
        aliases: &["total rewards", "compensation and benefits"],
        parents: &[("Human Resources", 1.0)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Onboarding",
        parents: &[("Human Resources", 1.0)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "HRIS",
        aliases: &["human resources information systems"],
        parents: &[("Human Resources", 0.8)],
        related: &[("Applicant Tracking Systems", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Talent Management",
        aliases: &["succession planning"],
        parents: &[("Human Resources", 1.0)],
        related: &[("Performance Management", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Employment Law",
        aliases: &["labor law", "labour law"],
        parents: &[("Human Resources", 0.8)],
        ..NodeDef::LEAF
    },
    // Leadership
    NodeDef {
        id: "Leadership",
        children: &[("People Management", 0.8), ("Mentoring", 0.6)],
        related: &[("Stakeholder Management", 0.5), ("Strategic Planning", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "People Management",
        aliases: &["team management"],
        parents: &[("Leadership", 1.0)],
        related: &[("Performance Management", 0.6)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Mentoring",
        aliases: &["coaching"],
        parents: &[("Leadership", 0.8)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Stakeholder Management",
        aliases: &["stakeholder engagement"],
        related: &[("Communication", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Project Management",
        aliases: &["pmp"],
        related: &[("Agile", 0.5), ("Stakeholder Management", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Strategic Planning",
        related: &[("Leadership", 0.5)],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Budgeting",
        aliases: &["budget management"],
        ..NodeDef::LEAF
    },
    // Soft skills
    NodeDef {
        id: "Communication",
        aliases: &["communication skills"],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Problem Solving",
        aliases: &["problem-solving"],
        ..NodeDef::LEAF
    },
    NodeDef {
        id: "Collaboration",
        aliases: &["teamwork", "cross-functional collaboration"],
        ..NodeDef::LEAF
    },
];
