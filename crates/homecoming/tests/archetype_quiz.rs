use homecoming::quiz::{
    classify, lookup_archetype, ArchetypeKey, QuizAnswers, QuizError, QuizSession, QuizState,
    QUESTION_COUNT,
};

fn answers_from(letters: &str) -> QuizAnswers {
    let mut answers = QuizAnswers::new();
    for (index, letter) in letters.chars().enumerate() {
        let label = ArchetypeKey::from_letter(letter).expect("valid letter");
        answers
            .record_answer(index as u8 + 1, label)
            .expect("question in range");
    }
    answers
}

#[test]
fn plurality_picks_the_archetype() {
    let answers = answers_from("BBBBBBBBAACCDDABCDBB");
    let key = classify(&answers).expect("complete");

    assert_eq!(key, ArchetypeKey::B);
    let descriptor = lookup_archetype(key);
    assert_eq!(descriptor.name, "Future Explorer");
    assert_eq!(descriptor.service, "Utopia");
}

#[test]
fn even_split_resolves_to_first_label() {
    let answers = answers_from("AAAAABBBBBCCCCCDDDDD");
    assert_eq!(classify(&answers), Ok(ArchetypeKey::A));

    let answers = answers_from("DDDDDCCCCCCBBBBAAAAA");
    assert_eq!(classify(&answers), Ok(ArchetypeKey::C));
}

#[test]
fn eighteen_answers_are_not_enough() {
    let answers = answers_from("ABCDABCDABCDABCDAB");
    assert_eq!(
        classify(&answers),
        Err(QuizError::Incomplete {
            missing: vec![19, 20]
        })
    );
}

#[test]
fn session_walks_to_completion_and_retakes() {
    let mut session = QuizSession::new();
    session.start().expect("fresh session starts");

    for _ in 0..QUESTION_COUNT {
        session.select(ArchetypeKey::D).expect("in progress");
        session.next().expect("answer recorded");
    }

    assert_eq!(
        session.state(),
        QuizState::Completed {
            result: ArchetypeKey::D
        }
    );
    let result = session.result().expect("completed result");
    assert_eq!(result.archetype.name, "Romantic Poet");
    assert_eq!(result.tally.count(ArchetypeKey::D), 20);

    session.retake().expect("retake from completed");
    assert_eq!(session.state(), QuizState::NotStarted);
    assert_eq!(session.answers().answered(), 0);
    assert!(session.result().is_none());
}
