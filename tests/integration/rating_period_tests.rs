use crate::common::init_test_env;
use approx::assert_abs_diff_eq;
use glicko2_rater::{
    model::{
        structures::{match_result::MatchResult, outcome::Outcome, player_state::PlayerState},
        Glicko2Config, RatingError, RatingUpdater
    },
    utils::test_utils::{generate_player, generate_results, glickman_results, split_results}
};

#[test]
fn test_glickman_example_through_rate_period() {
    init_test_env();

    let mut player = generate_player(1500.0, 200.0, 0.06);
    player.rate_period(&glickman_results()).unwrap();

    assert_abs_diff_eq!(player.get_rating(), 1464.05, epsilon = 0.01);
    assert_abs_diff_eq!(player.get_rd(), 151.52, epsilon = 0.01);
    assert_abs_diff_eq!(player.vol(), 0.05999, epsilon = 0.00001);
}

#[test]
fn test_inactive_periods_grow_rd_monotonically() {
    init_test_env();

    let mut player = generate_player(1720.0, 60.0, 0.06);
    let mut previous = player.get_rd();

    for _ in 0..12 {
        player.rate_period(&[]).unwrap();

        assert!(player.get_rd() > previous);
        assert_abs_diff_eq!(player.get_rating(), 1720.0, epsilon = 1e-9);
        assert_eq!(player.vol(), 0.06);
        previous = player.get_rd();
    }
}

#[test]
fn test_many_periods_stay_finite() {
    init_test_env();

    let mut player = RatingUpdater::default();

    for period in 0..50 {
        let results = generate_results(1 + period % 7, player.get_rating(), period as u64);
        player.rate_period(&results).unwrap();

        assert!(player.get_rating().is_finite());
        assert!(player.get_rd().is_finite() && player.get_rd() > 0.0);
        assert!(player.vol() > 0.0);
    }
}

#[test]
fn test_active_periods_shrink_rd_for_new_player() {
    init_test_env();

    let mut player = RatingUpdater::default();
    let mut previous = player.get_rd();

    for seed in 0..5 {
        player.rate_period(&generate_results(10, 1500.0, seed)).unwrap();

        assert!(player.get_rd() < previous);
        previous = player.get_rd();
    }
}

#[test]
fn test_persisted_state_continues_identically() {
    init_test_env();

    let mut original = RatingUpdater::default();
    original.rate_period(&generate_results(8, 1500.0, 1)).unwrap();

    let json = serde_json::to_string(&original.state()).unwrap();
    let state: PlayerState = serde_json::from_str(&json).unwrap();
    let mut restored = RatingUpdater::from_state(&state).unwrap();

    let next = generate_results(8, 1500.0, 2);
    original.rate_period(&next).unwrap();
    restored.rate_period(&next).unwrap();

    assert_abs_diff_eq!(original.get_rating(), restored.get_rating(), epsilon = 1e-6);
    assert_abs_diff_eq!(original.get_rd(), restored.get_rd(), epsilon = 1e-6);
    assert_abs_diff_eq!(original.vol(), restored.vol(), epsilon = 1e-9);
}

#[test]
fn test_players_update_independently_across_threads() {
    init_test_env();

    let results = glickman_results();
    let handles = (0..4)
        .map(|_| {
            let results = results.clone();
            std::thread::spawn(move || {
                let mut player = RatingUpdater::default();
                player.rate_period(&results).unwrap();
                player.state()
            })
        })
        .collect::<Vec<_>>();

    let states = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect::<Vec<_>>();

    assert!(states.windows(2).all(|w| w[0] == w[1]));
    assert_abs_diff_eq!(states[0].rating, 1441.53, epsilon = 0.01);
}

#[test]
fn test_larger_tau_allows_larger_volatility_change() {
    init_test_env();

    // A heavy upset: a 1200 player beating three 1900 players
    let upset = vec![MatchResult::new(1900.0, 50.0, Outcome::Win); 3];

    let mut low = RatingUpdater::with_config(1200.0, 50.0, 0.06, Glicko2Config::with_tau(0.3)).unwrap();
    let mut high = RatingUpdater::with_config(1200.0, 50.0, 0.06, Glicko2Config::with_tau(1.2)).unwrap();

    low.update_with_results(&upset).unwrap();
    high.update_with_results(&upset).unwrap();

    assert!(low.vol() > 0.06);
    assert!(high.vol() > low.vol());
}

#[test]
fn test_invalid_input_is_rejected() {
    init_test_env();

    let mut player = RatingUpdater::default();
    let (ratings, rds, outcomes) = split_results(&glickman_results());

    assert!(matches!(
        player.update(&ratings, &rds, &outcomes[..1]),
        Err(RatingError::MismatchedLengths { .. })
    ));
    assert!(matches!(
        player.update(&[f64::NAN], &[30.0], &[1.0]),
        Err(RatingError::InvalidRating(_))
    ));
    assert_eq!(player, RatingUpdater::default());
}
