pub mod core {
    pub mod best_times;
    pub mod category;
    pub mod errors;
    pub mod history;
    pub mod lap_record;
    pub mod race_state;
}

pub mod interfaces {
    pub mod dashboard_interface;
}

pub mod post {
    pub mod race_result;
    pub mod save_history;
}

pub mod pre {
    pub mod check_tracker_opts;
    pub mod read_history;
    pub mod tracker_opts;
}

#[cfg(test)]
fn race_result(entries: &[(&str, &[f64])]) -> crate::post::race_result::RaceResult {
    crate::post::race_result::RaceResult::new(
        entries.iter().map(|(name, _)| name.to_string()).collect(),
        entries
            .iter()
            .map(|(_, laptimes)| crate::core::lap_record::LapRecord::from_laptimes(laptimes.to_vec()))
            .collect(),
    )
}

#[cfg(test)]
mod category_tests {
    use crate::core::category::{Category, Gender};
    use crate::core::errors::TrackerError;

    #[test]
    fn test_nr_laps() {
        let nr_laps: Vec<usize> = [500, 1000, 1500, 3000, 5000]
            .iter()
            .map(|&d| Category::new(Gender::F, d).unwrap().nr_laps())
            .collect();
        assert_eq!(nr_laps, vec![2, 3, 4, 8, 13]);
        assert_eq!(Category::new(Gender::M, 10000).unwrap().nr_laps(), 25);
    }
    #[test]
    fn test_rejected_men_3000() {
        assert_eq!(
            Category::new(Gender::M, 3000),
            Err(TrackerError::CategoryRejected {
                gender: "Men".to_owned(),
                distance: 3000
            })
        );
    }
    #[test]
    fn test_rejected_women_10000() {
        assert!(matches!(
            Category::new(Gender::F, 10000),
            Err(TrackerError::CategoryRejected { distance: 10000, .. })
        ));
    }
    #[test]
    fn test_rejected_unknown_distance() {
        assert!(Category::new(Gender::M, 800).is_err());
        assert!(!Category::new(Gender::M, 800).unwrap_err().is_retryable());
    }
    #[test]
    fn test_history_file_name() {
        let category = Category::new(Gender::F, 1500).unwrap();
        assert_eq!(
            category.history_file_name(None),
            "race_Women_1500m_data.csv"
        );
        assert_eq!(
            category.history_file_name(Some("World Cup Heerenveen")),
            "World_Cup_Heerenveen_race_Women_1500m_data.csv"
        );
        assert_eq!(category.to_string(), "Women's 1500m");
    }
    #[test]
    fn test_gender_from_str() {
        assert_eq!("M".parse::<Gender>(), Ok(Gender::M));
        assert_eq!("f".parse::<Gender>(), Ok(Gender::F));
        assert!("W".parse::<Gender>().is_err());
    }
}


#[cfg(test)]
mod best_times_tests {
    use crate::core::best_times::{merge, BestTimesTable, NO_BEST_ENTRIES, PLACEHOLDER_NAME};
    use crate::race_result;
    use approx::assert_ulps_eq;

    fn names(table: &BestTimesTable) -> Vec<&str> {
        table.entries().iter().map(|x| x.name.as_str()).collect()
    }

    #[test]
    fn test_merge_into_placeholders() {
        let table = BestTimesTable::new(2);
        let finished = race_result(&[("Alice", &[20.0, 20.5]), ("Bob", &[21.0, 21.2])]);
        let new_table = merge(&table, &finished);

        assert_eq!(names(&new_table), vec!["Alice", "Bob", PLACEHOLDER_NAME]);
        assert_eq!(new_table.entries()[0].laprecord.laptimes(), &[20.0, 20.5]);
        assert_eq!(new_table.entries()[1].laprecord.laptimes(), &[21.0, 21.2]);
        assert_ulps_eq!(new_table.entries()[0].total(), 40.5);
        assert_ulps_eq!(new_table.entries()[1].total(), 42.2);
        assert!(new_table.entries()[2].is_placeholder());
    }

    #[test]
    fn test_merge_always_three_entries() {
        let races = vec![
            race_result(&[]),
            race_result(&[("A", &[30.0])]),
            race_result(&[("A", &[30.0]), ("B", &[31.0])]),
            race_result(&[
                ("A", &[30.0]),
                ("B", &[31.0]),
                ("C", &[29.0]),
                ("D", &[33.0]),
                ("E", &[28.0]),
            ]),
        ];

        for race in races.iter() {
            assert_eq!(
                BestTimesTable::new(1).merge(race).entries().len(),
                NO_BEST_ENTRIES
            );
        }
    }

    #[test]
    fn test_merge_more_than_three() {
        let table = BestTimesTable::new(1).merge(&race_result(&[
            ("A", &[30.0]),
            ("B", &[31.0]),
            ("C", &[29.0]),
            ("D", &[33.0]),
            ("E", &[28.0]),
        ]));
        assert_eq!(names(&table), vec!["E", "C", "A"]);
    }

    #[test]
    fn test_placeholder_never_ahead() {
        let table = BestTimesTable::new(2).merge(&race_result(&[
            ("Nobody", &[0.0, 0.0]),
            ("Alice", &[40.0, 0.0]),
        ]));
        assert_eq!(names(&table), vec!["Alice", PLACEHOLDER_NAME, PLACEHOLDER_NAME]);
        assert!(!table.entries()[0].is_placeholder());
        assert!(table.entries()[1..].iter().all(|x| x.is_placeholder()));
    }

    #[test]
    fn test_slower_race_leaves_table_unchanged() {
        let table = BestTimesTable::new(2).merge(&race_result(&[
            ("A", &[20.0, 20.0]),
            ("B", &[20.5, 20.5]),
            ("C", &[21.0, 21.0]),
        ]));
        let slower = race_result(&[("D", &[22.0, 22.0]), ("E", &[30.0, 30.0])]);
        assert_eq!(table.merge(&slower), table);
    }

    #[test]
    fn test_tie_incumbent_wins() {
        let table = BestTimesTable::new(2).merge(&race_result(&[("Incumbent", &[20.0, 20.0])]));
        let new_table = table.merge(&race_result(&[("Challenger", &[19.0, 21.0])]));
        assert_eq!(
            names(&new_table),
            vec!["Incumbent", "Challenger", PLACEHOLDER_NAME]
        );
    }

    #[test]
    fn test_tie_within_race_keeps_race_order() {
        let table = BestTimesTable::new(1).merge(&race_result(&[("X", &[30.0]), ("Y", &[30.0])]));
        assert_eq!(names(&table), vec!["X", "Y", PLACEHOLDER_NAME]);
    }

    #[test]
    fn test_permutation_insensitive() {
        let a = race_result(&[("A", &[31.0]), ("B", &[29.0]), ("C", &[30.0]), ("D", &[32.0])]);
        let b = race_result(&[("D", &[32.0]), ("C", &[30.0]), ("A", &[31.0]), ("B", &[29.0])]);
        assert_eq!(
            BestTimesTable::new(1).merge(&a),
            BestTimesTable::new(1).merge(&b)
        );
        assert_eq!(names(&BestTimesTable::new(1).merge(&a)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_duplicate_names() {
        let table = BestTimesTable::new(1).merge(&race_result(&[("Alice", &[30.0])]));
        let table = table.merge(&race_result(&[("Alice", &[29.0])]));
        assert_eq!(names(&table), vec!["Alice", "Alice", PLACEHOLDER_NAME]);
        assert_ulps_eq!(table.fastest().total(), 29.0);
        assert_ulps_eq!(table.entries()[1].total(), 30.0);
    }
}

#[cfg(test)]
mod history_tests {
    use crate::core::errors::TrackerError;
    use crate::core::history::History;
    use crate::post::save_history::write_history;
    use crate::pre::read_history::parse_history;
    use crate::race_result;

    const HISTORY_CSV: &str = "Alice,Bob\n20.00,21.00\n20.50,21.20\n";

    #[test]
    fn test_parse_history() {
        let history = parse_history(HISTORY_CSV.as_bytes(), 2).unwrap();
        assert_eq!(history.names(), &["Alice".to_owned(), "Bob".to_owned()]);
        assert_eq!(history.to_lap_major(), vec![vec![20.0, 21.0], vec![20.5, 21.2]]);

        let best_times = history.best_times();
        assert_eq!(best_times.fastest().name, "Alice");
        assert_eq!(best_times.fastest().laprecord.laptimes(), &[20.0, 20.5]);
    }
    #[test]
    fn test_parse_history_wrong_lap_count() {
        assert!(parse_history(HISTORY_CSV.as_bytes(), 3).is_err());
    }
    #[test]
    fn test_parse_history_not_a_number() {
        assert!(parse_history("Alice\n20.00\nfast\n".as_bytes(), 2).is_err());
    }

    #[test]
    fn test_from_lap_major_shape() {
        assert_eq!(
            History::from_lap_major(vec!["A".to_owned()], vec![vec![20.0]], 2),
            Err(TrackerError::HistoryShape {
                expected: 2,
                found: 1,
                nr_athletes: 1
            })
        );
    }

    #[test]
    fn test_parse_history_invalid_laptimes() {
        // negative lap times would outrank every real result
        let err = parse_history("Cheat,Alice\n-30.00,20.00\n-30.00,20.50\n".as_bytes(), 2)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<TrackerError>(),
            Some(&TrackerError::HistoryValue {
                lap: 1,
                athlete: "Cheat".to_owned(),
                value: "-30".to_owned()
            })
        );

        assert!(parse_history("Ghost,Alice\nNaN,20.00\n10.00,20.50\n".as_bytes(), 2).is_err());
        assert!(parse_history("Alice,Bob\n20.00,21.00\n20.50,inf\n".as_bytes(), 2).is_err());
    }

    #[test]
    fn test_from_lap_major_invalid_value() {
        assert_eq!(
            History::from_lap_major(
                vec!["Zero".to_owned(), "Alice".to_owned()],
                vec![vec![10.0, 20.0], vec![-10.0, 20.5]],
                2
            ),
            Err(TrackerError::HistoryValue {
                lap: 2,
                athlete: "Zero".to_owned(),
                value: "-10".to_owned()
            })
        );
    }

    #[test]
    fn test_write_history() {
        let mut history = History::new(2);
        history.append(&race_result(&[("Alice", &[20.0, 20.5]), ("Bob", &[21.0, 21.2])]));

        let mut buf: Vec<u8> = vec![];
        write_history(&mut buf, &history).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), HISTORY_CSV);
    }

    #[test]
    fn test_append_and_reload() {
        let mut history = parse_history(HISTORY_CSV.as_bytes(), 2).unwrap();
        history.append(&race_result(&[("Carla", &[19.9, 20.3])]));
        assert_eq!(history.names().len(), 3);

        let mut buf: Vec<u8> = vec![];
        write_history(&mut buf, &history).unwrap();
        let reloaded = parse_history(buf.as_slice(), 2).unwrap();

        assert_eq!(reloaded, history);
        assert_eq!(reloaded.best_times().fastest().name, "Carla");
    }
}
