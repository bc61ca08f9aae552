use serde::Serialize;

use super::ArchetypeKey;

/// One forced-choice question; each option votes for one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub number: u8,
    pub prompt: &'static str,
    pub options: [QuestionOption; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub label: ArchetypeKey,
    pub text: &'static str,
}

const fn options(texts: [&'static str; 4]) -> [QuestionOption; 4] {
    [
        QuestionOption {
            label: ArchetypeKey::A,
            text: texts[0],
        },
        QuestionOption {
            label: ArchetypeKey::B,
            text: texts[1],
        },
        QuestionOption {
            label: ArchetypeKey::C,
            text: texts[2],
        },
        QuestionOption {
            label: ArchetypeKey::D,
            text: texts[3],
        },
    ]
}

pub static QUESTIONS: [Question; super::QUESTION_COUNT] = [
    Question {
        number: 1,
        prompt: "What is more attractive to you?",
        options: options([
            "Real memories",
            "Unlimited imagination",
            "Clear logic",
            "Strong emotions",
        ]),
    },
    Question {
        number: 2,
        prompt: "Your life story is more like a?",
        options: options([
            "Family photo album",
            "Science fiction novel",
            "Autobiography",
            "Art film",
        ]),
    },
    Question {
        number: 3,
        prompt: "Which would you rather relive?",
        options: options([
            "The moment of your first love",
            "An unfulfilled ambition",
            "A great success in your career",
            "The most beautiful sunset you've ever seen",
        ]),
    },
    Question {
        number: 4,
        prompt: "What is the most cherished item of clothing in your closet?",
        options: options([
            "An old sweater with special sentimental value",
            "A dream outfit you've never worn",
            "A perfect custom-made suit/formal dress",
            "A unique, artistic piece of clothing",
        ]),
    },
    Question {
        number: 5,
        prompt: "What sound is more calming to you?",
        options: options([
            "The laughter of loved ones",
            "The silence of outer space",
            "The applause of a crowd",
            "The sound of waves crashing on the shore",
        ]),
    },
    Question {
        number: 6,
        prompt: "If life is a book, what do you care about more?",
        options: options([
            "The heartwarming illustrations in the book",
            "The unwritten sequel to the book",
            "Whether the book's conclusion is well-structured",
            "Whether the book's cover design is exquisite",
        ]),
    },
    Question {
        number: 7,
        prompt: "A perfect room must have?",
        options: options([
            "Old photos full of memories",
            "A window with a view of the starry sky",
            "A neat and orderly desk",
            "A sculpture of extraordinary taste",
        ]),
    },
    Question {
        number: 8,
        prompt: "Your \"regret\" is more inclined to be?",
        options: options([
            "Not being able to spend more time with someone",
            "Not being able to explore the unknown world",
            "A certain project could have been more perfect",
            "Not being able to experience a certain kind of ultimate beauty",
        ]),
    },
    Question {
        number: 9,
        prompt: "How would you prefer to be described?",
        options: options([
            "A warm person",
            "A person with dreams",
            "An accomplished person",
            "An interesting person",
        ]),
    },
    Question {
        number: 10,
        prompt: "What feeling do you hope to have at the last moment?",
        options: options([
            "Nostalgia",
            "Freedom",
            "Fulfillment",
            "Sublimation",
        ]),
    },
    Question {
        number: 11,
        prompt: "If you had to choose a color to represent your farewell?",
        options: options([
            "Warm beige",
            "Deep blue",
            "Solemn black",
            "Dreamy purple",
        ]),
    },
    Question {
        number: 12,
        prompt: "What do you believe in more?",
        options: options([
            "Experience",
            "Possibility",
            "Facts",
            "Intuition",
        ]),
    },
    Question {
        number: 13,
        prompt: "How do you handle old belongings?",
        options: options([
            "Treasure them carefully",
            "Imagine new uses for them",
            "Categorize and file them neatly",
            "They are a part of me and cannot be discarded",
        ]),
    },
    Question {
        number: 14,
        prompt: "For an ideal afternoon, you would choose to?",
        options: options([
            "Look through old photos with family",
            "Read a novel about the future",
            "Plan the next ten years of your life",
            "Go to an art exhibition",
        ]),
    },
    Question {
        number: 15,
        prompt: "What makes you feel more \"alive\"?",
        options: options([
            "To love and be loved",
            "Exploration and discovery",
            "Building and completing",
            "Feeling and creating",
        ]),
    },
    Question {
        number: 16,
        prompt: "What \"legacy\" do you hope to leave behind?",
        options: options([
            "Fond memories in the hearts of your family",
            "An unfinished idea that inspires future generations",
            "A clear and respected life record",
            "A beautiful and mysterious legend",
        ]),
    },
    Question {
        number: 17,
        prompt: "What is your attitude towards the \"unknown\"?",
        options: options([
            "I prefer the sense of security that comes from the known",
            "It is the ultimate destination of adventure",
            "It needs to be analyzed and understood",
            "It is another form of beauty",
        ]),
    },
    Question {
        number: 18,
        prompt: "Where does your \"perfect day\" end?",
        options: options([
            "On your favorite sofa in your familiar home",
            "Under the dome of a moon base",
            "At a celebration dinner held in your honor",
            "At a concert that never ends",
        ]),
    },
    Question {
        number: 19,
        prompt: "What does \"control\" mean to you?",
        options: options([
            "Being able to choose which memory to relive",
            "Being able to break free from the constraints of reality",
            "Being able to decide the ending of your own story",
            "It's not important; I prefer to let things be",
        ]),
    },
    Question {
        number: 20,
        prompt: "Finally, how do you wish your farewell to be described?",
        options: options([
            "\"He/She has gone home.\"",
            "\"He/She has begun a new adventure.\"",
            "\"An era has ended.\"",
            "\"He/She became a poem.\"",
        ]),
    },
];

/// Looks up a question by its 1-based number.
pub fn question(number: u8) -> Option<&'static Question> {
    QUESTIONS.get(usize::from(number).checked_sub(1)?)
}
