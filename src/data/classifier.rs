//! Section headings and inline markers used to tier job-description skills.
//!
//! Heading patterns are matched against a normalized heading with trailing
//! punctuation stripped. Markers are matched as whole words.

pub const PREFERRED_HEADINGS: &[&str] = &[
    r"^(?:preferred|desired|desirable|bonus|additional|nice[- ]to[- ]have|optional)\b",
    r"^(?:it'?s )?a plus\b",
    r"^(?:bonus points|extra credit|pluses)\b",
];

pub const REQUIRED_HEADINGS: &[&str] = &[
    r"^(?:minimum|basic|required|must[- ]have|mandatory|essential)\b",
    r"^(?:requirements|qualifications|what you(?:'ll| will)? need|what we(?:'re| are)? looking for|who you are|you have|you will have|your skills)\b",
];

pub const NEUTRAL_HEADINGS: &[&str] = &[
    r"^(?:responsibilities|key responsibilities|what you(?:'ll| will)? do|your role|the role|about\b|who we are|benefits|perks|compensation|why join|our (?:team|company|mission)|overview|job description|location|salary|equal opportunity)",
];

pub const REQUIRED_MARKERS: &[&str] = &[
    "required",
    "requires",
    "require",
    "must",
    "must have",
    "must-have",
    "mandatory",
    "essential",
    "minimum",
    "at least",
    "need to have",
    "needs to have",
    "necessary",
];

pub const PREFERRED_MARKERS: &[&str] = &[
    "preferred",
    "prefer",
    "preferably",
    "nice to have",
    "nice-to-have",
    "a plus",
    "is a plus",
    "big plus",
    "bonus",
    "desired",
    "desirable",
    "ideally",
    "would be ideal",
    "advantageous",
    "not required",
    "not necessary",
    "optional",
    "would be great",
];
