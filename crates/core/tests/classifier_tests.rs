// ═══════════════════════════════════════════════════════════════════
// Classifier Tests — normalization, strategy lookup, coverage gaps
// ═══════════════════════════════════════════════════════════════════

use pokes_core::errors::CoreError;
use pokes_core::models::card::{Card, Rank, Suit};
use pokes_core::models::hand::HandLabel;
use pokes_core::models::strategy::{Action, Position, Recommendation, StrategyTable};
use pokes_core::services::hand_classifier::HandClassifier;

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

fn all_cards() -> Vec<Card> {
    Rank::ALL
        .iter()
        .flat_map(|r| Suit::ALL.iter().map(move |s| Card::new(*r, *s)))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════
// normalize
// ═══════════════════════════════════════════════════════════════════

mod normalize {
    use super::*;

    #[test]
    fn suited() {
        let classifier = HandClassifier::new();
        let label = classifier.normalize(c("Ah"), c("Kh")).unwrap();
        assert_eq!(label.to_string(), "AKs");
    }

    #[test]
    fn offsuit() {
        let classifier = HandClassifier::new();
        let label = classifier.normalize(c("Ah"), c("Kd")).unwrap();
        assert_eq!(label.to_string(), "AKo");
    }

    #[test]
    fn pocket_pair() {
        let classifier = HandClassifier::new();
        let label = classifier.normalize(c("8c"), c("8d")).unwrap();
        assert_eq!(label.to_string(), "88");
        assert!(label.is_pair());
    }

    #[test]
    fn lower_card_first_is_reordered() {
        let classifier = HandClassifier::new();
        assert_eq!(classifier.normalize(c("9s"), c("Td")).unwrap().to_string(), "T9o");
        assert_eq!(classifier.normalize(c("2c"), c("Ac")).unwrap().to_string(), "A2s");
    }

    #[test]
    fn identical_cards_are_rejected() {
        let classifier = HandClassifier::new();
        let err = classifier.normalize(c("Qs"), c("Qs")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCard(ref card) if card == "Qs"));
    }

    #[test]
    fn symmetric_over_every_card_pair() {
        let classifier = HandClassifier::new();
        let cards = all_cards();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                let ab = classifier.normalize(*a, *b).unwrap();
                let ba = classifier.normalize(*b, *a).unwrap();
                assert_eq!(ab, ba, "{a} {b}");
                assert!(ab.high() >= ab.low());
            }
        }
    }

    #[test]
    fn produces_169_distinct_labels() {
        let classifier = HandClassifier::new();
        let cards = all_cards();
        let mut labels = std::collections::HashSet::new();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                labels.insert(classifier.normalize(*a, *b).unwrap());
            }
        }
        assert_eq!(labels.len(), 169);
    }

    #[test]
    fn label_text_round_trips_for_every_label() {
        let classifier = HandClassifier::new();
        let cards = all_cards();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                let label = classifier.normalize(*a, *b).unwrap();
                let parsed: HandLabel = label.to_string().parse().unwrap();
                assert_eq!(parsed, label);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// classify
// ═══════════════════════════════════════════════════════════════════

mod classify {
    use super::*;

    #[test]
    fn aces_from_small_blind() {
        let classifier = HandClassifier::new();
        let rec = classifier.classify(c("Ah"), c("As"), Position::SB).unwrap();
        assert_eq!(rec, Recommendation::Action(Action::RaiseCall3Bet));
        assert_eq!(rec.action().unwrap().to_string(), "raise-and-call-3bet");
    }

    #[test]
    fn seven_deuce_offsuit_has_no_recommendation() {
        let classifier = HandClassifier::new();
        let rec = classifier.classify(c("7h"), c("2d"), Position::SB).unwrap();
        assert_eq!(rec, Recommendation::NoRecommendation);
        assert!(!rec.is_recommended());
        assert!(rec.action().is_none());
    }

    #[test]
    fn uncovered_positions_have_no_recommendation() {
        let classifier = HandClassifier::new();
        for position in [Position::UTG, Position::MP, Position::CO, Position::BTN, Position::BB] {
            assert!(!classifier.is_covered(position));
            let rec = classifier.classify(c("Ah"), c("Ad"), position).unwrap();
            assert_eq!(rec, Recommendation::NoRecommendation, "{position}");
        }
    }

    #[test]
    fn each_action_is_reachable_from_small_blind() {
        let classifier = HandClassifier::new();
        let cases = [
            ("Ks", "Kd", Action::RaiseCall3Bet),
            ("Th", "Tc", Action::Jam),
            ("5h", "5c", Action::RaiseOrJam),
            ("Jh", "Th", Action::RaiseOrFold),
            ("Kc", "2c", Action::Limp),
        ];
        for (a, b, expected) in cases {
            let rec = classifier.classify(c(a), c(b), Position::SB).unwrap();
            assert_eq!(rec, Recommendation::Action(expected), "{a}{b}");
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let classifier = HandClassifier::new();
        let first = classifier.classify(c("Qd"), c("Js"), Position::SB).unwrap();
        for _ in 0..10 {
            assert_eq!(classifier.classify(c("Qd"), c("Js"), Position::SB).unwrap(), first);
        }
    }

    #[test]
    fn card_order_does_not_matter() {
        let classifier = HandClassifier::new();
        let cards = all_cards();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                for position in Position::ALL {
                    assert_eq!(
                        classifier.classify(*a, *b, position).unwrap(),
                        classifier.classify(*b, *a, position).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn duplicate_card_is_an_error_not_a_miss() {
        let classifier = HandClassifier::new();
        let err = classifier.classify(c("Ah"), c("Ah"), Position::SB).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCard(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// classify_raw
// ═══════════════════════════════════════════════════════════════════

mod classify_raw {
    use super::*;

    #[test]
    fn parses_ui_selections() {
        let classifier = HandClassifier::new();
        let rec = classifier.classify_raw("Ah", "Ks", "sb").unwrap();
        assert_eq!(rec, Recommendation::Action(Action::RaiseCall3Bet));
    }

    #[test]
    fn unknown_rank_fails_fast() {
        let classifier = HandClassifier::new();
        let err = classifier.classify_raw("1h", "Ks", "SB").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCard(_)));
    }

    #[test]
    fn unknown_suit_fails_fast() {
        let classifier = HandClassifier::new();
        let err = classifier.classify_raw("Ax", "Ks", "SB").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCard(_)));
    }

    #[test]
    fn unknown_position_fails_fast() {
        let classifier = HandClassifier::new();
        let err = classifier.classify_raw("Ah", "Ks", "HJ").unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// StrategyTable
// ═══════════════════════════════════════════════════════════════════

mod strategy_table {
    use super::*;

    #[test]
    fn builtin_covers_small_blind_only() {
        let table = StrategyTable::builtin();
        assert_eq!(table.covered_positions(), vec![Position::SB]);
    }

    #[test]
    fn builtin_chart_loaded_every_entry() {
        assert_eq!(StrategyTable::builtin().chart_len(Position::SB), 86);
        assert_eq!(StrategyTable::builtin().chart_len(Position::BTN), 0);
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(StrategyTable::builtin(), StrategyTable::builtin()));
    }

    #[test]
    fn custom_table_drives_classifier() {
        let mut table = StrategyTable::new();
        table
            .insert_range(Position::BTN, &["AA", "72o"], Action::Jam)
            .unwrap();
        let classifier = HandClassifier::with_table(&table);

        assert_eq!(
            classifier.classify(c("7c"), c("2h"), Position::BTN).unwrap(),
            Recommendation::Action(Action::Jam)
        );
        assert_eq!(
            classifier.classify(c("Ac"), c("Ah"), Position::SB).unwrap(),
            Recommendation::NoRecommendation
        );
        assert!(classifier.is_covered(Position::BTN));
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut table = StrategyTable::new();
        let label: HandLabel = "KQs".parse().unwrap();
        table.insert(Position::CO, label, Action::RaiseOrFold);
        table.insert(Position::CO, label, Action::Jam);
        assert_eq!(table.lookup(Position::CO, &label), Recommendation::Action(Action::Jam));
        assert_eq!(table.chart_len(Position::CO), 1);
    }

    #[test]
    fn insert_range_rejects_non_canonical_labels() {
        let mut table = StrategyTable::new();
        let err = table
            .insert_range(Position::SB, &["KAs"], Action::Jam)
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn insert_range_is_all_or_nothing() {
        let mut table = StrategyTable::new();
        let err = table.insert_range(Position::BTN, &["AA", "KK", "KAs"], Action::Jam);
        assert!(err.is_err());
        assert_eq!(table.chart_len(Position::BTN), 0);
        assert!(!table.is_covered(Position::BTN));
    }

    #[test]
    fn builtin_table_json_roundtrip() {
        let json = serde_json::to_string(StrategyTable::builtin()).unwrap();
        assert!(json.contains("\"AKs\""));
        let back: StrategyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, StrategyTable::builtin());
        assert_eq!(back.chart_len(Position::SB), 86);
    }

    #[test]
    fn json_table_with_non_canonical_label_is_rejected() {
        let json = r#"{"charts":{"SB":{"KAs":"jam"}}}"#;
        assert!(serde_json::from_str::<StrategyTable>(json).is_err());
        let json = r#"{"charts":{"SB":{"AKs":"jam"}}}"#;
        let table: StrategyTable = serde_json::from_str(json).unwrap();
        let label: HandLabel = "AKs".parse().unwrap();
        assert_eq!(table.lookup(Position::SB, &label), Recommendation::Action(Action::Jam));
    }

    #[test]
    fn table_is_shareable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    HandClassifier::new()
                        .classify_raw("Kd", "Kh", "SB")
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                Recommendation::Action(Action::RaiseCall3Bet)
            );
        }
    }
}
