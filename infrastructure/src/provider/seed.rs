//! Built-in FAQ dataset

use faq_domain::Faq;

const SEED: [(u32, &str, &str, u32); 8] = [
    (
        1,
        "What is the registration deadline?",
        "The registration deadline is October 15th, 2025. Make sure to complete all required forms before this date.",
        156,
    ),
    (
        2,
        "How many team members can participate?",
        "Teams can have between 2-4 members. Solo participants are also welcome but encouraged to join teams.",
        142,
    ),
    (
        3,
        "Are there any prerequisites for participation?",
        "No specific prerequisites are required. Participants of all skill levels are welcome to join.",
        89,
    ),
    (
        4,
        "Will there be food provided?",
        "Yes, meals and snacks will be provided throughout the event. Please let us know about any dietary restrictions.",
        201,
    ),
    (
        5,
        "What should I bring to the hackathon?",
        "Please bring your laptop, charger, and any other devices you might need. Consider bringing a water bottle and comfortable clothes.",
        178,
    ),
    (
        6,
        "Is there a dress code?",
        "Casual attire is recommended. Wear comfortable clothes as you'll be sitting for extended periods.",
        58,
    ),
    (
        7,
        "What are the prizes?",
        "Prizes include cash rewards, tech gadgets, and opportunities for internships with our sponsors.",
        225,
    ),
    (
        8,
        "Will there be mentors available?",
        "Yes, industry professionals will be available throughout the event to provide guidance and support.",
        104,
    ),
];

/// The built-in dataset in insertion order (not sorted)
pub fn seed_faqs() -> Vec<Faq> {
    SEED.iter()
        .filter_map(|(id, question, answer, frequency)| {
            Faq::new(*id, *question, *answer, *frequency).ok()
        })
        .collect()
}
