//! Integration tests for strength scoring and pairwise balance reports.

use team_balance_web::{
    compare, roster_strength, strength_of, tier_points, Player, TeamSide, Tier, BALANCE_THRESHOLD,
};

const EPS: f64 = 1e-9;

fn player(name: &str, tier: Tier, league_points: u32) -> Player {
    Player::new(format!("{name}-id"), name, tier, league_points)
}

#[test]
fn tier_points_follow_tier_order() {
    for (i, tier) in Tier::ALL.iter().enumerate() {
        assert_eq!(usize::from(tier_points(*tier)), i);
    }
    assert_eq!(tier_points(Tier::Unranked), 0);
    assert_eq!(tier_points(Tier::Challenger), 10);
}

#[test]
fn single_player_strength() {
    // GOLD = 4 points, 500 LP = 0.5 points
    assert!((strength_of(&player("p", Tier::Gold, 500)) - 4.5).abs() < EPS);
}

#[test]
fn strength_is_monotonic_in_tier_and_league_points() {
    for lp in [0, 50, 100, 999, 2500] {
        for pair in Tier::ALL.windows(2) {
            let lower = strength_of(&player("a", pair[0], lp));
            let higher = strength_of(&player("b", pair[1], lp));
            assert!(lower <= higher, "{:?} vs {:?} at {lp} LP", pair[0], pair[1]);
        }
    }
    for tier in Tier::ALL {
        let mut prev = strength_of(&player("a", tier, 0));
        for lp in (100..=3000).step_by(100) {
            let cur = strength_of(&player("a", tier, lp));
            assert!(prev <= cur);
            prev = cur;
        }
    }
}

#[test]
fn roster_strength_sums_players() {
    let players = [
        player("Player1", Tier::Diamond, 1000), // 7 + 1 = 8
        player("Player2", Tier::Gold, 500),     // 4 + 0.5 = 4.5
        player("Player3", Tier::Silver, 0),     // 3
    ];
    assert!((roster_strength(&players) - 15.5).abs() < EPS);
}

#[test]
fn empty_roster_strength_is_positive_zero() {
    let strength = roster_strength(&[]);
    assert_eq!(strength, 0.0);
    assert!(!strength.is_sign_negative());

    let report = compare(&[], &[]);
    assert!(!report.red_strength.is_sign_negative());
    assert!(!report.difference.is_sign_negative());
    let json = serde_json::to_string(&report).unwrap();
    assert!(!json.contains("-0"), "{json}");
}

#[test]
fn unranked_counts_as_zero() {
    let players = [player("U", Tier::Unranked, 0), player("G", Tier::Gold, 0)];
    assert!((roster_strength(&players) - 4.0).abs() < EPS);
}

#[test]
fn league_point_bonus_is_not_capped() {
    // 500 LP -> +0.5, 1500 LP -> +1.5 (no clamp at 1 point)
    let players = [player("A", Tier::Gold, 500), player("B", Tier::Gold, 1500)];
    assert!((strength_of(&players[1]) - 5.5).abs() < EPS);
    assert!((roster_strength(&players) - 10.0).abs() < EPS);
}

#[test]
fn compare_equal_teams() {
    let red = [player("Red1", Tier::Gold, 500), player("Red2", Tier::Silver, 0)];
    let blue = [player("Blue1", Tier::Platinum, 0), player("Blue2", Tier::Bronze, 500)];
    let report = compare(&red, &blue);
    assert!((report.red_strength - 7.5).abs() < EPS);
    assert!((report.blue_strength - 7.5).abs() < EPS);
    assert!(report.difference.abs() < EPS);
    assert!(report.is_balanced);
    assert_eq!(report.advantage(), None);
}

#[test]
fn gold_vs_platinum_is_balanced() {
    let report = compare(&[player("G", Tier::Gold, 0)], &[player("P", Tier::Platinum, 0)]);
    assert!((report.difference - 1.0).abs() < EPS);
    assert!(report.is_balanced);
}

#[test]
fn threshold_is_inclusive() {
    let report = compare(&[player("G", Tier::Gold, 0)], &[player("E", Tier::Emerald, 0)]);
    assert!((report.difference - BALANCE_THRESHOLD).abs() < EPS);
    assert!(report.is_balanced);
}

#[test]
fn iron_vs_gold_is_unbalanced() {
    let report = compare(&[player("I", Tier::Iron, 0)], &[player("G", Tier::Gold, 0)]);
    assert!((report.difference - 3.0).abs() < EPS);
    assert!(!report.is_balanced);
    assert_eq!(report.advantage(), Some(TeamSide::Blue));
}

#[test]
fn difference_is_absolute_and_symmetric() {
    let a = [player("D", Tier::Diamond, 0)];
    let b = [player("G", Tier::Gold, 0)];
    let ab = compare(&a, &b);
    let ba = compare(&b, &a);
    assert!((ab.difference - 3.0).abs() < EPS);
    assert_eq!(ab.difference, ba.difference);
    assert!(ab.red_strength > ab.blue_strength);
    assert_eq!(ab.advantage(), Some(TeamSide::Red));
}

#[test]
fn compare_handles_empty_and_uneven_teams() {
    let report = compare(&[], &[player("S", Tier::Silver, 0)]);
    assert_eq!(report.red_strength, 0.0);
    assert!((report.difference - 3.0).abs() < EPS);
    assert!(!report.is_balanced);

    let report = compare(&[], &[]);
    assert_eq!(report.difference, 0.0);
    assert!(report.is_balanced);
}
