//! Built-in deck table used when no deck file is given.

use super::deck::{Deck, DeckTable};
use crate::core::{DeckLevel, Result};

const WARM_UP: &[&str] = &[
    "What is the best thing that happened to you this week?",
    "Which song could you listen to on repeat for a month?",
    "What did you want to be when you grew up?",
    "Describe your perfect lazy Sunday.",
    "What is a food you loved as a kid and still eat?",
    "Which place would you visit tomorrow if travel were free?",
    "What small habit makes your day better?",
    "What was the last thing that made you laugh out loud?",
    "Which book, film or show do you recommend most often?",
    "Are you a morning person or a night person, and why?",
    "What is a skill you picked up recently?",
    "What is the most useful thing you own?",
];

const GETTING_CLOSER: &[&str] = &[
    "Who has influenced the way you see the world the most?",
    "What is something people often misunderstand about you?",
    "When do you feel most like yourself?",
    "What is a risk you are glad you took?",
    "Which friendship has changed you the most?",
    "What do you wish you had more time for?",
    "What does a good day at work look like for you?",
    "What is a belief you held strongly and later changed?",
    "How do you usually recharge after a hard week?",
    "What compliment has stuck with you for years?",
    "What tradition from your family would you keep forever?",
    "What are you quietly proud of?",
];

const DEEPER: &[&str] = &[
    "What is a fear you have never said out loud?",
    "When did you last cry, and what caused it?",
    "What part of your childhood still shapes you today?",
    "What does love look like to you in everyday life?",
    "Is there a decision you keep second-guessing?",
    "What do you need from the people closest to you?",
    "What is a conversation you keep putting off?",
    "How do you act when you feel hurt?",
    "What would you like to forgive yourself for?",
    "Which version of yourself are you still growing into?",
];

const DEEPEST: &[&str] = &[
    "What do you hope people remember about you?",
    "What would you regret not having done if today were your last day?",
    "What is the loneliest you have ever felt?",
    "What do you think I don't know about you yet?",
    "What is something you have never asked me, but want to?",
    "When have you felt truly understood by someone?",
    "What does a meaningful life mean to you right now?",
    "What did this conversation show you about yourself?",
];

fn deck(level: u8, label: &str, cards: &[&str]) -> Result<Deck> {
    Deck::new(DeckLevel::ALL[level as usize], label, cards.iter().copied())
}

/// The default four decks, from small talk to the deepest questions.
pub fn table() -> Result<DeckTable> {
    Ok(DeckTable::new([
        deck(0, "Level 0 - Warm Up", WARM_UP)?,
        deck(1, "Level 1 - Getting Closer", GETTING_CLOSER)?,
        deck(2, "Level 2 - Deeper", DEEPER)?,
        deck(3, "Level 3 - Heart to Heart", DEEPEST)?,
    ]))
}
