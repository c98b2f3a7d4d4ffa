pub mod core {
    pub mod dashboard;
    pub mod panel;
    pub mod plot;
    pub mod progress;
    pub mod tables;
}

#[cfg(test)]
fn race_view(laptimes: &[&[f64]]) -> skatetrack::interfaces::dashboard_interface::RaceView {
    use skatetrack::core::best_times::BestTimesTable;
    use skatetrack::core::category::{Category, Gender};
    use skatetrack::core::race_state::RaceState;

    let category = Category::new(Gender::M, 500).unwrap();
    let names = vec!["Alice".to_owned(), "Bob".to_owned()];
    let mut race_state = RaceState::new(names, category.nr_laps());

    for (lap_idx, t) in laptimes.iter().enumerate() {
        race_state.record_lap(lap_idx, t).unwrap();
    }

    let best_times = BestTimesTable::new(category.nr_laps());

    skatetrack::interfaces::dashboard_interface::RaceView::new(category, &race_state, &best_times)
}


#[cfg(test)]
mod tables_tests {
    use crate::core::tables::{best_table, create_best_table, create_lap_time_table, lap_time_table};
    use crate::race_view;
    use prettytable::Table;

    fn get_cells(table: &Table, row_idx: usize) -> Vec<String> {
        table
            .get_row(row_idx)
            .unwrap()
            .iter()
            .map(|x| x.get_content())
            .collect()
    }

    #[test]
    fn test_lap_time_table_cells() {
        let table = lap_time_table(&race_view(&[&[10.2, 10.6]]));

        // two laps plus the totals row
        assert_eq!(table.len(), 3);
        assert_eq!(get_cells(&table, 0), vec!["1", "10.20*", "NA", "10.60", "NA"]);
        // second lap is not run yet
        assert_eq!(get_cells(&table, 1), vec!["2", "NA", "NA", "NA", "NA"]);
        assert_eq!(
            get_cells(&table, 2),
            vec!["Total", "00:10.20", "", "00:10.60", ""]
        );
    }

    #[test]
    fn test_lap_time_table_panel() {
        let lines = create_lap_time_table(&race_view(&[&[10.2, 10.6]])).render(0).join("\n");
        assert!(lines.contains("Lap time progression"));
        assert!(lines.contains("Alice"));
        assert!(lines.contains("Best diff"));
        assert!(lines.contains("10.20*"));
        assert!(lines.contains("─┼─"));
    }

    #[test]
    fn test_best_table_placeholders() {
        let table = best_table(&race_view(&[]));
        assert_eq!(
            get_cells(&table, 0),
            vec!["1", "0.00", "0.00", "0.00"]
        );
        assert_eq!(
            get_cells(&table, 2),
            vec!["Total", "00:00.00", "00:00.00", "00:00.00"]
        );

        let lines = create_best_table(&race_view(&[])).render(0).join("\n");
        assert!(lines.contains("1. None"));
        assert!(lines.contains("3. None"));
    }
}

#[cfg(test)]
mod progress_tests {
    use crate::core::progress::{create_progress_bar, get_percentage};
    use approx::assert_ulps_eq;

    #[test]
    fn test_percentage() {
        assert_ulps_eq!(get_percentage(1, 4), 25.0);
        assert_ulps_eq!(get_percentage(0, 0), 100.0);
        assert_ulps_eq!(get_percentage(5, 4), 100.0);
    }
    #[test]
    fn test_progress_bar() {
        assert_eq!(create_progress_bar(1, 2, 4), "Progress ██░░  50%");
        assert_eq!(create_progress_bar(0, 3, 3), "Progress ░░░   0%");
    }
}


#[cfg(test)]
mod dashboard_tests {
    use crate::core::dashboard::Dashboard;
    use crate::race_view;
    use skatetrack::core::category::{Category, Gender};

    #[test]
    fn test_render_welcome() {
        let category = Category::new(Gender::F, 1500).unwrap();
        let out = Dashboard::default().render_welcome(&category, Some("Heerenveen"), false);
        assert!(out.contains("Women's 1500m race in Heerenveen"));
        assert!(out.contains("The results will not be saved."));
        assert!(out.contains("Instructions"));
    }

    #[test]
    fn test_render_race() {
        let out = Dashboard::default().render_race(&race_view(&[&[10.2, 10.6], &[25.1, 24.9]]));
        assert!(out.contains("Men's 500m: Alice vs Bob"));
        assert!(out.contains("Best times so far"));
        assert!(out.contains("Progress"));
        assert!(out.contains("100%"));
        assert!(out.contains("lap 2/2"));
    }
}
