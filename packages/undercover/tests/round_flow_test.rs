use rand::rngs::StdRng;
use rand::SeedableRng;
use undercover::scoreboard::standings;
use undercover::{
    Event, GameError, Gender, Phase, PlayerEntry, Role, Session, SetupForm, Team, WordPair,
    WHITE_PLACEHOLDER,
};

const NAMES: [&str; 8] = ["Ana", "Bor", "Cene", "Dana", "Eva", "Filip", "Gal", "Hana"];

fn setup(players: usize, spies: usize, whites: usize) -> SetupForm {
    let mut form = SetupForm::default();
    form.set_player_count(players);
    form.set_spy_count(spies);
    form.set_white_count(whites);
    for (i, entry) in form.entries.iter_mut().enumerate() {
        *entry = PlayerEntry::new(NAMES[i], Gender::Female);
    }
    assert_eq!((form.spy_count, form.white_count), (spies, whites));
    form
}

fn started(form: &SetupForm, double_agent: bool, seed: u64) -> (Session, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = Session::new();
    session
        .start_round(form, double_agent, WordPair::new("apple", "pear"), &mut rng)
        .expect("round starts");
    (session, rng)
}

fn reveal_all(session: &mut Session, rng: &mut StdRng) {
    for i in 0..session.players.len() {
        session.reveal_word_to(i, rng).expect("reveal");
    }
    assert_eq!(session.phase(), Some(Phase::Discussion));
}

fn seats_with(session: &Session, role: Role) -> Vec<usize> {
    session
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.role == role)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn test_round_starts_in_word_reveal() {
    let form = setup(6, 1, 1);
    let (session, _) = started(&form, false, 1);

    let round = session.round().unwrap();
    assert_eq!(round.phase, Phase::WordReveal);
    assert_eq!(round.round_number, 0);
    assert_eq!(round.double_agent, None);
    assert_eq!(seats_with(&session, Role::Villager).len(), 4);
    assert_eq!(seats_with(&session, Role::Spy).len(), 1);
    assert_eq!(seats_with(&session, Role::White).len(), 1);
    assert!(session.players.iter().all(|p| p.active && !p.has_seen_word));
}

#[test]
fn test_duplicate_names_block_the_start() {
    let mut form = setup(4, 1, 0);
    form.entries[2].name = " ana".to_string();
    let mut session = Session::new();
    let result = session.start_round(
        &form,
        false,
        WordPair::new("apple", "pear"),
        &mut StdRng::seed_from_u64(0),
    );

    assert_eq!(
        result.err(),
        Some(GameError::DuplicateName {
            name: "ana".to_string()
        })
    );
    assert!(session.round().is_none());
    assert!(session.players.is_empty());
}

#[test]
fn test_no_spy_word_without_spies() {
    let form = setup(4, 0, 1);
    let (session, _) = started(&form, false, 2);
    assert_eq!(session.round().unwrap().spy_word, None);
}

#[test]
fn test_reveal_is_idempotent() {
    let form = setup(6, 1, 1);
    let (mut session, mut rng) = started(&form, false, 3);

    let (first, events) = session.reveal_word_to(0, &mut rng).unwrap();
    assert_eq!(events, vec![Event::WordSeen { player: 0 }]);
    let (second, events) = session.reveal_word_to(0, &mut rng).unwrap();
    assert_eq!(first, second);
    assert!(events.is_empty());
    assert_eq!(session.phase(), Some(Phase::WordReveal));
    assert_eq!(session.players.iter().filter(|p| p.has_seen_word).count(), 1);
}

#[test]
fn test_last_player_can_look_again_after_discussion_starts() {
    let form = setup(3, 1, 0);
    let (mut session, mut rng) = started(&form, false, 3);

    let mut first_looks = Vec::new();
    for i in 0..3 {
        first_looks.push(session.reveal_word_to(i, &mut rng).unwrap().0);
    }
    assert_eq!(session.phase(), Some(Phase::Discussion));
    let first_clue = session.round().unwrap().first_clue;

    let (again, events) = session.reveal_word_to(2, &mut rng).unwrap();
    assert_eq!(again, first_looks[2]);
    assert!(events.is_empty());
    assert_eq!(session.phase(), Some(Phase::Discussion));
    assert_eq!(session.round().unwrap().first_clue, first_clue);
}

#[test]
fn test_each_role_sees_its_own_word() {
    let form = setup(6, 1, 1);
    let (mut session, mut rng) = started(&form, false, 4);

    let spy = seats_with(&session, Role::Spy)[0];
    let white = seats_with(&session, Role::White)[0];
    let villager = seats_with(&session, Role::Villager)[0];

    assert_eq!(session.reveal_word_to(spy, &mut rng).unwrap().0.word, "pear");
    assert_eq!(
        session.reveal_word_to(white, &mut rng).unwrap().0.word,
        WHITE_PLACEHOLDER
    );
    assert_eq!(
        session.reveal_word_to(villager, &mut rng).unwrap().0.word,
        "apple"
    );
}

#[test]
fn test_first_clue_never_goes_to_white_in_first_round() {
    let form = setup(4, 0, 2);
    for seed in 0..40 {
        let (mut session, mut rng) = started(&form, false, seed);
        reveal_all(&mut session, &mut rng);
        let first = session.round().unwrap().first_clue.expect("someone starts");
        assert_ne!(session.players[first].role, Role::White, "seed {}", seed);
    }
}

#[test]
fn test_elimination_needs_discussion() {
    let form = setup(6, 1, 1);
    let (mut session, _) = started(&form, false, 5);
    assert_eq!(
        session.eliminate(0),
        Err(GameError::WrongPhase {
            expected: Phase::Discussion,
            actual: Phase::WordReveal,
        })
    );
}

#[test]
fn test_white_guesses_right_and_scores() {
    let form = setup(6, 1, 1);
    let (mut session, mut rng) = started(&form, false, 6);
    reveal_all(&mut session, &mut rng);

    let white = seats_with(&session, Role::White)[0];
    let events = session.eliminate(white).unwrap();
    assert_eq!(session.phase(), Some(Phase::WhiteGuessing));
    assert_eq!(session.round().unwrap().pending_white_guesser, Some(white));
    assert!(events.contains(&Event::WhiteGuessing { player: white }));

    let events = session.guess_white_word("  APPLE ").unwrap();
    assert!(events.contains(&Event::WhiteGuessed {
        player: white,
        correct: true
    }));
    assert_eq!(session.phase(), Some(Phase::RoundOver));
    assert!(session.players[white].active);
    assert_eq!(session.players[white].score, 7);
    assert_eq!(session.round().unwrap().outcome.as_ref().unwrap().winners, Team::White);
    let others: u32 = session
        .players
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != white)
        .map(|(_, p)| p.score)
        .sum();
    assert_eq!(others, 0);
}

#[test]
fn test_double_agent_white_guess_scores_nine() {
    let form = setup(6, 1, 1);
    // find a seed where the double agent drew the White seat
    for seed in 0..500 {
        let (mut session, mut rng) = started(&form, true, seed);
        let white = seats_with(&session, Role::White)[0];
        if session.round().unwrap().double_agent != Some(white) {
            continue;
        }
        reveal_all(&mut session, &mut rng);
        session.eliminate(white).unwrap();
        let events = session.guess_white_word("apple").unwrap();
        assert_eq!(session.players[white].score, 9);
        assert!(events.iter().any(|e| matches!(
            e,
            Event::RoundOver(outcome) if outcome.double_agent_won
        )));
        return;
    }
    panic!("no seed put the double agent on the White seat");
}

#[test]
fn test_missed_guess_with_no_spies_left_ends_round_for_villagers() {
    let form = setup(4, 0, 1);
    let (mut session, mut rng) = started(&form, false, 7);
    reveal_all(&mut session, &mut rng);

    let white = seats_with(&session, Role::White)[0];
    session.eliminate(white).unwrap();
    let events = session.guess_white_word("banana").unwrap();

    assert_eq!(session.phase(), Some(Phase::RoundOver));
    assert!(!session.players[white].active);
    assert!(events.iter().any(|e| matches!(
        e,
        Event::RoundOver(outcome) if outcome.winners == Team::Villagers
    )));
    for villager in seats_with(&session, Role::Villager) {
        assert_eq!(session.players[villager].score, 2);
    }
    assert_eq!(session.players[white].score, 0);
}

#[test]
fn test_missed_guess_pauses_then_resumes_discussion() {
    let form = setup(6, 1, 1);
    let (mut session, mut rng) = started(&form, false, 8);
    reveal_all(&mut session, &mut rng);

    let white = seats_with(&session, Role::White)[0];
    session.eliminate(white).unwrap();
    session.guess_white_word("banana").unwrap();
    assert_eq!(session.phase(), Some(Phase::WhiteGuessedWrong));
    assert!(matches!(
        session.eliminate(0),
        Err(GameError::WrongPhase { .. })
    ));

    let round_id = session.round().unwrap().id;
    let events = session.resume_after_missed_guess(round_id);
    assert_eq!(events, vec![Event::DiscussionResumed { round_number: 1 }]);
    assert_eq!(session.phase(), Some(Phase::Discussion));
    assert!(!session.players[white].active);

    // a second timer for the same pause does nothing
    assert!(session.resume_after_missed_guess(round_id).is_empty());
}

#[test]
fn test_stale_resume_is_ignored_after_new_round() {
    let form = setup(6, 1, 1);
    let (mut session, mut rng) = started(&form, false, 9);
    reveal_all(&mut session, &mut rng);

    let white = seats_with(&session, Role::White)[0];
    session.eliminate(white).unwrap();
    session.guess_white_word("banana").unwrap();
    let stale_id = session.round().unwrap().id;

    session
        .start_round(&form, false, WordPair::new("sun", "moon"), &mut rng)
        .unwrap();
    assert!(session.resume_after_missed_guess(stale_id).is_empty());
    assert_eq!(session.phase(), Some(Phase::WordReveal));
}

#[test]
fn test_last_villager_loses_the_round() {
    let form = setup(6, 1, 1);
    let (mut session, mut rng) = started(&form, false, 10);
    reveal_all(&mut session, &mut rng);

    let villagers = seats_with(&session, Role::Villager);
    session.eliminate(villagers[0]).unwrap();
    assert_eq!(session.phase(), Some(Phase::Discussion));
    assert_eq!(session.round().unwrap().round_number, 1);
    session.eliminate(villagers[1]).unwrap();
    assert_eq!(session.phase(), Some(Phase::Discussion));
    session.eliminate(villagers[2]).unwrap();

    assert_eq!(session.phase(), Some(Phase::RoundOver));
    let spy = seats_with(&session, Role::Spy)[0];
    let white = seats_with(&session, Role::White)[0];
    assert_eq!(session.players[spy].score, 5);
    assert_eq!(session.players[white].score, 7);
    assert_eq!(session.players[villagers[3]].score, 0);
    assert!(matches!(
        session.eliminate(spy),
        Err(GameError::WrongPhase { .. })
    ));
}

#[test]
fn test_double_agent_white_scores_nine_when_villagers_fall() {
    let form = setup(4, 1, 1);
    // find a seed where the double agent drew the White seat
    for seed in 0..500 {
        let (mut session, mut rng) = started(&form, true, seed);
        let white = seats_with(&session, Role::White)[0];
        if session.round().unwrap().double_agent != Some(white) {
            continue;
        }
        reveal_all(&mut session, &mut rng);
        let villagers = seats_with(&session, Role::Villager);
        let events = session.eliminate(villagers[0]).unwrap();

        assert_eq!(session.phase(), Some(Phase::RoundOver));
        let spy = seats_with(&session, Role::Spy)[0];
        assert_eq!(session.players[white].score, 9);
        assert_eq!(session.players[spy].score, 5);
        assert_eq!(session.players[villagers[1]].score, 0);
        assert!(events.iter().any(|e| matches!(
            e,
            Event::RoundOver(outcome)
                if outcome.winners == Team::Infiltrators && outcome.double_agent_won
        )));
        return;
    }
    panic!("no seed put the double agent on the White seat");
}

#[test]
fn test_eliminating_twice_is_rejected() {
    let form = setup(8, 1, 1);
    let (mut session, mut rng) = started(&form, false, 11);
    reveal_all(&mut session, &mut rng);

    let villager = seats_with(&session, Role::Villager)[0];
    session.eliminate(villager).unwrap();
    assert_eq!(
        session.eliminate(villager),
        Err(GameError::AlreadyEliminated(
            session.players[villager].name.clone()
        ))
    );
    assert_eq!(session.eliminate(42), Err(GameError::UnknownPlayer(42)));
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let form = setup(4, 1, 0);
    let mut rng = StdRng::seed_from_u64(12);
    let mut session = Session::new();

    for round in 0..3 {
        let before: Vec<u32> = session.players.iter().map(|p| p.score).collect();
        session
            .start_round(&form, false, WordPair::new("apple", "pear"), &mut rng)
            .unwrap();
        reveal_all(&mut session, &mut rng);

        let spy = seats_with(&session, Role::Spy)[0];
        session.eliminate(spy).unwrap();
        assert_eq!(session.phase(), Some(Phase::RoundOver), "round {}", round);

        for (i, player) in session.players.iter().enumerate() {
            let previous = before.get(i).copied().unwrap_or(0);
            assert_eq!(player.score, previous + player.round_score_delta);
        }
    }

    let total: u32 = session.players.iter().map(|p| p.score).sum();
    assert_eq!(total, 3 * 3 * 2);

    let board = standings(&session);
    assert_eq!(board.rows.len(), 4);
    assert!(board.words.is_some());

    session.return_to_setup();
    assert!(session.players.is_empty());
    assert!(session.round().is_none());
}
