use statsnap_engine::core::{RawIdRow, RawRosterRow, RawSeasonRow, RawTotals, RawWeekRow};
use statsnap_engine::query::StatGroup;
use statsnap_engine::{
    Dataset, EngineOptions, ErrorKind, Pool, RawTables, Side, StatEngine, StatEngineError,
    StatKey, Winner,
};

fn id(gsis: &str, name: &str, position: &str) -> RawIdRow {
    RawIdRow {
        gsis_id: Some(gsis.to_string()),
        name: Some(name.to_string()),
        position: Some(position.to_string()),
    }
}

struct Line {
    pass_yds: f64,
    pass_td: f64,
    rush_yds: f64,
    rush_td: f64,
    rec: f64,
    rec_yds: f64,
    rec_td: f64,
    fpts: f64,
}

const EMPTY: Line = Line {
    pass_yds: 0.0,
    pass_td: 0.0,
    rush_yds: 0.0,
    rush_td: 0.0,
    rec: 0.0,
    rec_yds: 0.0,
    rec_td: 0.0,
    fpts: 0.0,
};

fn totals(line: &Line) -> RawTotals {
    RawTotals {
        passing_yards: Some(line.pass_yds),
        passing_tds: Some(line.pass_td),
        rushing_yards: Some(line.rush_yds),
        rushing_tds: Some(line.rush_td),
        receiving_yards: Some(line.rec_yds),
        receiving_tds: Some(line.rec_td),
        receptions: Some(line.rec),
        fantasy_points_ppr: Some(line.fpts),
    }
}

fn season(gsis: &str, games: f64, line: Line) -> RawSeasonRow {
    RawSeasonRow {
        player_id: Some(gsis.to_string()),
        season: Some(2024.0),
        games: Some(games),
        totals: totals(&line),
        ..Default::default()
    }
}

fn week(gsis: &str, week: f64, opponent: &str, line: Line) -> RawWeekRow {
    RawWeekRow {
        player_id: Some(gsis.to_string()),
        season: Some(2024.0),
        week: Some(week),
        opponent_team: Some(opponent.to_string()),
        totals: totals(&line),
        ..Default::default()
    }
}

fn roster(gsis: &str, team: &str, position: &str) -> RawRosterRow {
    RawRosterRow {
        player_id: Some(gsis.to_string()),
        season: Some(2024.0),
        team: Some(team.to_string()),
        position: Some(position.to_string()),
    }
}

fn fixture() -> RawTables {
    RawTables {
        ids: vec![
            id("00-ALLEN", "Josh Allen", "QB"),
            id("00-MAHOMES", "Patrick Mahomes", "QB"),
            id("00-LAMAR", "Lamar Jackson", "QB"),
            id("00-SAQUON", "Saquon Barkley", "RB"),
            id("00-HENRY", "Derrick Henry", "RB"),
            id("00-BIJAN", "Bijan Robinson", "RB"),
            id("00-JONES", "Aaron Jones", "RB"),
            id("00-KELCE", "Travis Kelce", "TE"),
            id("00-CHASE", "Ja'Marr Chase", "WR"),
            id("00-JJETAS", "Justin Jefferson", "WR"),
            id("00-JALLEN", "Josh Allen", "LB"),
            id("00-DANIELS", "Jayden Daniels", "QB"),
            id("00-BUTKER", "Harrison Butker", "K"),
        ],
        seasons: Some(vec![
            season("00-ALLEN", 17.0, Line { pass_yds: 3731.0, pass_td: 28.0, rush_yds: 531.0, rush_td: 12.0, fpts: 385.0, ..EMPTY }),
            season("00-MAHOMES", 16.0, Line { pass_yds: 3928.0, pass_td: 26.0, rush_yds: 307.0, rush_td: 2.0, fpts: 283.6, ..EMPTY }),
            season("00-LAMAR", 17.0, Line { pass_yds: 4172.0, pass_td: 41.0, rush_yds: 915.0, rush_td: 4.0, fpts: 430.4, ..EMPTY }),
            season("00-SAQUON", 16.0, Line { rush_yds: 2005.0, rush_td: 13.0, rec: 33.0, rec_yds: 278.0, rec_td: 2.0, fpts: 355.3, ..EMPTY }),
            season("00-HENRY", 17.0, Line { rush_yds: 1921.0, rush_td: 16.0, rec: 19.0, rec_yds: 193.0, rec_td: 2.0, fpts: 326.4, ..EMPTY }),
            season("00-BIJAN", 17.0, Line { rush_yds: 1456.0, rush_td: 14.0, rec: 61.0, rec_yds: 431.0, rec_td: 1.0, fpts: 322.4, ..EMPTY }),
            season("00-JONES", 5.0, Line { rush_yds: 450.0, rush_td: 2.0, fpts: 70.0, ..EMPTY }),
            season("00-KELCE", 16.0, Line { rec: 97.0, rec_yds: 823.0, rec_td: 3.0, fpts: 218.3, ..EMPTY }),
            season("00-CHASE", 17.0, Line { rec: 127.0, rec_yds: 1708.0, rec_td: 17.0, rush_yds: 32.0, fpts: 403.0, ..EMPTY }),
            season("00-JJETAS", 17.0, Line { rec: 103.0, rec_yds: 1533.0, rec_td: 10.0, fpts: 311.3, ..EMPTY }),
            season("00-JALLEN", 17.0, EMPTY),
            season("00-NONAME", 17.0, Line { rush_yds: 3000.0, ..EMPTY }),
        ]),
        weeks: Some(vec![
            week("00-ALLEN", 1.0, "ari", Line { pass_yds: 232.0, pass_td: 2.0, rush_yds: 39.0, rush_td: 2.0, fpts: 34.18, ..EMPTY }),
            week("00-ALLEN", 2.0, "MIA", Line { pass_yds: 47.0, pass_td: 1.0, rush_yds: 2.0, fpts: 5.9, ..EMPTY }),
            week("00-DANIELS", 1.0, "TB", Line { pass_yds: 184.0, rush_yds: 88.0, rush_td: 2.0, fpts: 27.16, ..EMPTY }),
        ]),
        rosters: Some(vec![
            roster("00-MAHOMES", "KC", "QB"),
            roster("00-KELCE", "KC", "TE"),
            roster("00-BUTKER", "KC", "K"),
            roster("00-UNKNOWN", "KC", "WR"),
            roster("00-ALLEN", "BUF", "QB"),
            roster("00-GHOST1", "NYJ", "WR"),
            roster("00-GHOST2", "NYJ", "DB"),
        ]),
    }
}

fn engine() -> StatEngine {
    let engine = StatEngine::new(EngineOptions::default());
    engine.load(&fixture()).unwrap();
    engine
}

#[test]
fn test_season_stats() {
    let engine = engine();

    let result = engine.season_stats("Mahomes").unwrap();
    assert_eq!(result.player.name, "Patrick Mahomes");
    assert_eq!(result.player.position.as_str(), "QB");
    assert!(result.score >= 60.0);
    assert_eq!(result.stats.games, 16);
    assert_eq!(result.stats.passing_ypg, 245.5);
    assert_eq!(result.featured.last(), Some(&StatKey::FantasyPpg));
    assert_eq!(result.featured[0], StatKey::PassingYpg);

    let result = engine.season_stats("Saquon Barkly").unwrap();
    assert_eq!(result.player.name, "Saquon Barkley");
    assert_eq!(result.stats.rushing_ypg, 125.31);
    assert_eq!(result.stats.total_td_pg, 0.94);
}

#[test]
fn test_season_stats_exact_name() {
    let engine = engine();
    let result = engine.season_stats("Lamar Jackson").unwrap();
    assert_eq!(result.score, 100.0);
    assert_eq!(result.stats.fantasy_ppg, 25.32);
}

#[test]
fn test_best_candidate_below_threshold() {
    let engine = engine();
    // "Travis Kelce" is the closest name but scores under 60
    let err = engine.season_stats("Kelce").unwrap_err();
    assert!(matches!(err, StatEngineError::NotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_insufficient_games_is_distinct() {
    let engine = engine();
    let err = engine.season_stats("Aaron Jones").unwrap_err();
    match err {
        StatEngineError::InsufficientGames { ref player, games, required } => {
            assert_eq!(player, "Aaron Jones");
            assert_eq!(games, 5);
            assert_eq!(required, 6);
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::InsufficientGames);
}

#[test]
fn test_duplicate_names_resolve_to_first_row() {
    let engine = engine();
    let matched = engine.resolve_player("Josh Allen", Pool::Seasons).unwrap();
    assert_eq!(matched.player_id.as_str(), "00-ALLEN");
}

#[test]
fn test_pools_differ_in_membership() {
    let engine = engine();

    // Only in the weekly table
    let matched = engine.resolve_player("Jayden Daniels", Pool::Weeks).unwrap();
    assert_eq!(matched.score, 100.0);
    assert!(matches!(
        engine.resolve_player("Jayden Daniels", Pool::Seasons),
        Err(StatEngineError::NotFound { .. })
    ));
}

#[test]
fn test_week_stats() {
    let engine = engine();

    let result = engine.week_stats("josh allen", 1).unwrap();
    assert_eq!(result.player.name, "Josh Allen");
    assert_eq!(result.opponent, "ARI");
    assert_eq!(result.totals.passing_yards, 232.0);
    assert_eq!(result.fantasy_points, 34.18);

    let err = engine.week_stats("josh allen", 5).unwrap_err();
    assert!(matches!(err, StatEngineError::NoWeekData { week: 5, .. }));
}

#[test]
fn test_filter_by_stat() {
    let engine = engine();

    let result = engine.filter_by_stat("rb", "rushing_ypg", 80.0).unwrap();
    let names: Vec<&str> = result.rows.iter().map(|r| r.name.as_str()).collect();
    // Aaron Jones (90 ypg, 5 games) is under the games floor
    assert_eq!(names, vec!["Saquon Barkley", "Derrick Henry", "Bijan Robinson"]);
    assert_eq!(result.rows[0].value, 125.31);
    assert_eq!(result.rows[0].games, 16);
    assert!(!result.truncated);

    for pair in result.rows.windows(2) {
        assert!(pair[0].value >= pair[1].value);
    }

    let result = engine.filter_by_stat("RB", "Rushing YPG", 120.0).unwrap();
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].name, "Saquon Barkley");
}

#[test]
fn test_filter_excludes_nameless_rows() {
    let engine = engine();
    let result = engine.filter_by_stat("N/A", "rushing_ypg", 0.0);
    // The only N/A-position row has no name
    assert!(matches!(result, Err(StatEngineError::NoPlayersAtPosition { .. })));
}

#[test]
fn test_filter_errors() {
    let engine = engine();

    let err = engine.filter_by_stat("XX", "fppg", 10.0).unwrap_err();
    assert!(matches!(err, StatEngineError::NoPlayersAtPosition { .. }));
    assert_eq!(err.kind(), ErrorKind::NoMatch);

    let err = engine.filter_by_stat("WR", "sacks", 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownStat);

    let err = engine.filter_by_stat("WR", "fppg", 99.0).unwrap_err();
    assert!(matches!(err, StatEngineError::NoMatch { .. }));
}

#[test]
fn test_filter_truncates_at_fifteen() {
    let ids: Vec<RawIdRow> = (0..16)
        .map(|i| id(&format!("00-{i}"), &format!("Receiver Number {i}"), "WR"))
        .collect();
    let seasons: Vec<RawSeasonRow> = (0..16)
        .map(|i| season(&format!("00-{i}"), 10.0, Line { rec_yds: 500.0 + f64::from(i), ..EMPTY }))
        .collect();
    let engine = StatEngine::default();
    engine
        .load(&RawTables {
            ids,
            seasons: Some(seasons),
            ..Default::default()
        })
        .unwrap();

    let result = engine.filter_by_stat("WR", "receiving_ypg", 50.0).unwrap();
    assert_eq!(result.rows.len(), 15);
    assert_eq!(result.total_matches, 16);
    assert!(result.truncated);
    assert_eq!(result.rows[0].name, "Receiver Number 15");
    assert_eq!(result.rows[0].value, 51.5);
}

#[test]
fn test_filter_stable_on_ties() {
    let ids = vec![id("00-B", "Bravo Back", "RB"), id("00-A", "Alpha Back", "RB")];
    let seasons = vec![
        season("00-B", 10.0, Line { rush_yds: 800.0, ..EMPTY }),
        season("00-A", 10.0, Line { rush_yds: 800.0, ..EMPTY }),
    ];
    let engine = StatEngine::default();
    engine
        .load(&RawTables {
            ids,
            seasons: Some(seasons),
            ..Default::default()
        })
        .unwrap();

    let result = engine.filter_by_stat("RB", "rushing_ypg", 80.0).unwrap();
    assert_eq!(result.rows[0].name, "Bravo Back");
    assert_eq!(result.rows[1].name, "Alpha Back");
}

#[test]
fn test_compare_qb_vs_rb() {
    let engine = engine();

    let comparison = engine.compare("Josh Allen", "Derrick Henry").unwrap();
    assert_eq!(comparison.first.player.name, "Josh Allen");
    assert_eq!(comparison.second.player.name, "Derrick Henry");
    assert_eq!(comparison.groups, vec![StatGroup::Passing, StatGroup::Skill]);
    // 385.0 / 17 = 22.65 vs 326.4 / 17 = 19.2
    assert_eq!(comparison.winner, Winner::First);
    assert_eq!(comparison.winner_name(), "Josh Allen");
    assert_eq!(comparison.rows().last().unwrap().0, StatKey::FantasyPpg);
}

#[test]
fn test_compare_same_player_ties() {
    let engine = engine();
    let comparison = engine.compare("Travis Kelce", "travis kelce").unwrap();
    assert_eq!(comparison.winner, Winner::Tie);
    assert_eq!(comparison.winner_name(), "Tie");
    assert_eq!(comparison.groups, vec![StatGroup::Skill]);
}

#[test]
fn test_compare_unknown_second_player() {
    let engine = engine();
    let err = engine.compare("Josh Allen", "Unknown Player XYZ123").unwrap_err();
    match err {
        StatEngineError::PlayerNotFound { side, input } => {
            assert_eq!(side, Side::Second);
            assert_eq!(input, "Unknown Player XYZ123");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_compare_insufficient_games_side() {
    let engine = engine();
    let err = engine.compare("Aaron Jones", "Derrick Henry").unwrap_err();
    assert!(matches!(
        err,
        StatEngineError::PlayerInsufficientGames { side: Side::First, games: 5, .. }
    ));
}

#[test]
fn test_roster() {
    let engine = engine();

    let roster = engine.roster(" kc ").unwrap();
    assert_eq!(roster.team, "KC");
    assert_eq!(roster.season, 2024);

    let positions: Vec<&str> = roster.groups.iter().map(|g| g.position.as_str()).collect();
    assert_eq!(positions, vec!["QB", "TE", "K"]);
    assert_eq!(roster.groups[0].players, vec!["Patrick Mahomes"]);
    // Crosswalk-less player dropped
    assert_eq!(roster.player_count(), 3);

    assert!(matches!(
        engine.roster("XYZ"),
        Err(StatEngineError::TeamNotFound { .. })
    ));
}

#[test]
fn test_roster_without_named_players() {
    let engine = engine();
    // NYJ rows exist but none of the ids are in the crosswalk
    let err = engine.roster("NYJ").unwrap_err();
    assert!(matches!(err, StatEngineError::TeamNotFound { ref team } if team == "NYJ"));
}

#[test]
fn test_availability() {
    let engine = engine();

    let report = engine.availability("Patrick Mahomes").unwrap();
    assert_eq!(report.games_played, 16);
    assert_eq!(report.missed, 1);
    assert_eq!(
        report.status,
        statsnap_engine::query::AvailabilityStatus::MostlyAvailable
    );

    // No games floor for availability
    let report = engine.availability("Aaron Jones").unwrap();
    assert_eq!(report.missed, 12);
}

#[test]
fn test_missing_collection_does_not_block_others() {
    let mut tables = fixture();
    tables.rosters = None;
    let engine = StatEngine::default();
    engine.load(&tables).unwrap();

    assert!(engine.season_stats("Josh Allen").is_ok());
    let err = engine.roster("KC").unwrap_err();
    assert!(matches!(err, StatEngineError::NotLoaded(Dataset::Rosters)));
    assert_eq!(err.kind(), ErrorKind::NotLoaded);
}

#[test]
fn test_failed_reload_keeps_serving() {
    let engine = engine();

    let mut broken = fixture();
    broken
        .weeks
        .as_mut()
        .unwrap()
        .push(week("00-ALLEN", 1.0, "ARI", EMPTY));
    let err = engine.load(&broken).unwrap_err();
    assert!(matches!(err, StatEngineError::Integrity(_)));

    assert_eq!(engine.snapshot_info().unwrap().generation, 1);
    assert_eq!(engine.week_stats("Josh Allen", 1).unwrap().opponent, "ARI");
}

#[test]
fn test_season_override() {
    let mut tables = fixture();
    tables.seasons.as_mut().unwrap().push(RawSeasonRow {
        player_id: Some("00-ALLEN".to_string()),
        season: Some(2023.0),
        games: Some(17.0),
        totals: RawTotals {
            passing_yards: Some(4306.0),
            ..Default::default()
        },
        ..Default::default()
    });

    let engine = StatEngine::default();
    engine.load(&tables).unwrap();
    assert_eq!(engine.season_stats("Josh Allen").unwrap().season, 2024);

    let engine = StatEngine::new(EngineOptions {
        season: Some(2023),
        ..Default::default()
    });
    engine.load(&tables).unwrap();
    let result = engine.season_stats("Josh Allen").unwrap();
    assert_eq!(result.season, 2023);
    assert_eq!(result.stats.passing_ypg, 253.29);
}
