//! Fixed template tables for mock data generation

/// Named survey archetypes: (display name, topic context for the LLM path)
pub const SURVEY_ARCHETYPES: &[(&str, &str)] = &[
    (
        "Customer Satisfaction Survey",
        "customer feedback about services",
    ),
    (
        "Employee Engagement Survey",
        "employee satisfaction and workplace feedback",
    ),
    (
        "Product Feedback Survey",
        "user feedback about a software product",
    ),
    (
        "Market Research Survey",
        "consumer preferences and market trends",
    ),
    (
        "Website Usability Survey",
        "user experience on a website",
    ),
];

pub struct RatingTemplate {
    pub headline: &'static str,
    pub required: bool,
    pub range: u32,
    pub left: &'static str,
    pub right: &'static str,
}

pub const RATING_TEMPLATES: &[RatingTemplate] = &[
    RatingTemplate {
        headline: "How satisfied are you with our service?",
        required: true,
        range: 5,
        left: "Very Dissatisfied",
        right: "Very Satisfied",
    },
    RatingTemplate {
        headline: "How likely are you to recommend us to others?",
        required: true,
        range: 10,
        left: "Not at all likely",
        right: "Extremely likely",
    },
    RatingTemplate {
        headline: "Rate the quality of our product",
        required: true,
        range: 7,
        left: "Poor",
        right: "Excellent",
    },
];

pub struct ChoiceTemplate {
    pub headline: &'static str,
    pub required: bool,
    pub choices: &'static [&'static str],
}

pub const CHOICE_TEMPLATES: &[ChoiceTemplate] = &[
    ChoiceTemplate {
        headline: "Which features do you use most often?",
        required: false,
        choices: &["Feature A", "Feature B", "Feature C", "Feature D"],
    },
    ChoiceTemplate {
        headline: "How did you hear about us?",
        required: false,
        choices: &[
            "Social Media",
            "Search Engine",
            "Friend/Colleague",
            "Advertisement",
            "Other",
        ],
    },
    ChoiceTemplate {
        headline: "What is your primary role?",
        required: true,
        choices: &[
            "Individual Contributor",
            "Manager",
            "Director",
            "Executive",
        ],
    },
];

/// Open-text templates: (headline, placeholder)
pub const OPEN_TEXT_TEMPLATES: &[(&str, &str)] = &[
    (
        "What do you like most about our service?",
        "Your thoughts...",
    ),
    ("What can we improve?", "Your suggestions..."),
    ("Additional comments or feedback?", "Any other feedback..."),
];

/// Thank-you card variants: (headline, subheader)
pub const THANK_YOU_VARIANTS: &[(&str, &str)] = &[
    ("Thank You!", "Your feedback helps us improve."),
    ("Survey Complete", "We appreciate you taking the time."),
    (
        "Thanks for your feedback!",
        "Your responses are valuable to us.",
    ),
];

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Quinn", "Avery", "Skyler", "Dakota",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

pub const COMPANIES: &[&str] = &[
    "TechCorp",
    "InnovateInc",
    "DigitalSolutions",
    "FutureLabs",
    "CloudSystems",
];

pub const DOMAINS: &[&str] = &["com", "io", "co", "ai", "dev"];

/// Canned free-text answers
pub const OPEN_TEXT_ANSWERS: &[&str] = &[
    "Great service, very satisfied with the overall experience.",
    "Could use some improvement in response time, but generally good.",
    "Excellent product, easy to use and intuitive interface.",
    "The interface could be more intuitive, but functionality is solid.",
    "Very helpful customer support team, very responsive.",
    "Some features are missing that would be really useful.",
    "Overall good experience, would recommend to colleagues.",
    "The product meets our needs effectively, good value for money.",
    "There's a learning curve but once you get used to it, it's powerful.",
    "Reliable service with good uptime and performance.",
];
