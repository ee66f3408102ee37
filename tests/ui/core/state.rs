use crate::support::{record, result_of};
use buscadoc::cards::CardSchema;
use buscadoc::config::SchemasConfig;
use buscadoc::models::{DataSource, DatasetStatus, ThemeMode};
use buscadoc::ui::core::{Action, AppState, Effect, Focus, ResultsView};
use serde_json::json;
use std::path::PathBuf;

fn state() -> AppState {
    AppState::new(ThemeMode::Dark, SchemasConfig::default())
}

fn search(state: &mut AppState, query: &str, source: DataSource) -> Vec<Effect> {
    state.apply(Action::SubmitSearch {
        query: query.to_string(),
        source,
    })
}

fn status(has_data: bool, records: u64, filename: Option<&str>) -> DatasetStatus {
    DatasetStatus {
        has_data,
        record_count: records,
        filename: filename.map(str::to_string),
        internal_records: None,
    }
}

#[test]
fn test_initial_state() {
    let state = state();
    assert_eq!(state.active_tab(), DataSource::Internal);
    assert_eq!(state.view.theme_mode, ThemeMode::Dark);
    assert!(state.results.is_idle());
    assert!(!state.is_busy());
    assert_eq!(state.focus, Focus::SearchInput);
}

#[test]
fn test_switch_tab_always_clears_and_refreshes_once() {
    let mut state = state();
    state.results = ResultsView::NoResults;

    // Same tab is not a no-op
    let effects = state.apply(Action::SwitchTab(DataSource::Internal));
    assert_eq!(effects, vec![Effect::RefreshStatus]);
    assert!(state.results.is_idle());

    state.results = ResultsView::Error("Error en la búsqueda: x".to_string());
    let effects = state.apply(Action::SwitchTab(DataSource::Excel));
    assert_eq!(effects, vec![Effect::RefreshStatus]);
    assert_eq!(state.active_tab(), DataSource::Excel);
    assert!(state.results.is_idle());
}

#[test]
fn test_toggle_theme_has_no_effects() {
    let mut state = state();
    assert!(state.apply(Action::ToggleTheme).is_empty());
    assert_eq!(state.view.theme_mode, ThemeMode::Light);
    state.apply(Action::ToggleTheme);
    assert_eq!(state.view.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_scenario_a_status_without_data() {
    let mut state = state();
    state.apply(Action::SwitchTab(DataSource::Excel));
    state.apply(Action::StatusLoaded(status(false, 0, None)));

    assert_eq!(state.status_text, "Sube un archivo para buscar en tus datos.");
    assert!(state.file_info.is_none());
}

#[test]
fn test_scenario_b_status_with_data_on_excel_tab() {
    let mut state = state();
    state.apply(Action::SwitchTab(DataSource::Excel));
    state.apply(Action::StatusLoaded(status(true, 42, Some("plan.xlsx"))));

    assert_eq!(state.status_text, "42 registros cargados de plan.xlsx");
    assert_eq!(state.file_info.as_deref(), Some("plan.xlsx"));
    assert_eq!(state.dataset.record_count, 42);
}

#[test]
fn test_status_text_untouched_on_internal_tab() {
    let mut state = state();
    state.apply(Action::StatusLoaded(status(true, 42, Some("plan.xlsx"))));

    assert!(state.status_text.is_empty());
    // File info follows the dataset on either tab
    assert_eq!(state.file_info.as_deref(), Some("plan.xlsx"));
}

#[test]
fn test_status_failure_keeps_dataset() {
    let mut state = state();
    state.apply(Action::StatusLoaded(status(true, 3, Some("a.csv"))));
    state.apply(Action::StatusFailed("connection refused".to_string()));

    assert_eq!(state.status_text, "Error al conectar con el servidor.");
    assert!(state.server_unreachable);
    assert_eq!(state.dataset, status(true, 3, Some("a.csv")));

    state.apply(Action::StatusLoaded(status(false, 0, None)));
    assert!(!state.server_unreachable);
}

#[test]
fn test_scenario_c_empty_query_issues_nothing() {
    let mut state = state();
    state.results = ResultsView::NoResults;

    for query in ["", "   ", "\t\n"] {
        let effects = search(&mut state, query, DataSource::Internal);
        assert!(effects.is_empty(), "query {:?}", query);
        assert!(state.results.is_idle());
        assert!(!state.is_busy());
    }
}

#[test]
fn test_search_trims_and_marks_busy() {
    let mut state = state();
    let effects = search(&mut state, "  torque  ", DataSource::Excel);

    assert_eq!(
        effects,
        vec![Effect::Search {
            token: state.latest_search_token(),
            query: "torque".to_string(),
            source: DataSource::Excel,
        }]
    );
    assert!(state.is_busy());
}

#[test]
fn test_scenario_d_one_record_one_card() {
    let mut state = state();
    search(&mut state, "torque", DataSource::Excel);
    let token = state.latest_search_token();

    state.apply(Action::SearchCompleted {
        token,
        source: DataSource::Excel,
        result: result_of(vec![record(json!({"titulo": "Doc1", "campo2": "x", "campo3": "y"}))]),
    });

    let cards = state.results.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Doc1");
    assert!(!state.is_busy());
}

#[test]
fn test_empty_result_shows_banner() {
    let mut state = state();
    search(&mut state, "nada", DataSource::Internal);
    let token = state.latest_search_token();

    state.apply(Action::SearchCompleted {
        token,
        source: DataSource::Internal,
        result: result_of(Vec::new()),
    });

    assert_eq!(state.results, ResultsView::NoResults);
    assert_eq!(state.results.banner(), Some("No se encontraron resultados."));
}

#[test]
fn test_search_errors_are_inline() {
    let mut state = state();
    search(&mut state, "x", DataSource::Excel);
    state.apply(Action::SearchRejected {
        token: state.latest_search_token(),
        message: "No hay datos cargados".to_string(),
    });
    assert_eq!(
        state.results.banner(),
        Some("Error en la búsqueda: No hay datos cargados")
    );
    assert!(!state.is_busy());

    let effects = search(&mut state, "y", DataSource::Excel);
    assert_eq!(effects.len(), 1);
    let effects = state.apply(Action::SearchFailed {
        token: state.latest_search_token(),
        error: "timeout".to_string(),
    });
    assert!(effects.is_empty());
    assert!(matches!(state.results, ResultsView::Error(_)));
    assert!(!state.is_busy());
}

#[test]
fn test_stale_search_is_discarded_but_releases_busy() {
    let mut state = state();
    search(&mut state, "lento", DataSource::Internal);
    let slow = state.latest_search_token();
    search(&mut state, "rapido", DataSource::Internal);
    let fast = state.latest_search_token();
    assert_ne!(slow, fast);

    state.apply(Action::SearchCompleted {
        token: fast,
        source: DataSource::Internal,
        result: result_of(vec![record(json!({"t": "rapido"}))]),
    });
    assert!(state.is_busy());

    state.apply(Action::SearchCompleted {
        token: slow,
        source: DataSource::Internal,
        result: result_of(vec![record(json!({"t": "lento"}))]),
    });

    assert_eq!(state.results.cards()[0].title, "rapido");
    assert!(!state.is_busy());
}

#[test]
fn test_switch_tab_invalidates_in_flight_search() {
    let mut state = state();
    search(&mut state, "torque", DataSource::Internal);
    let token = state.latest_search_token();

    state.apply(Action::SwitchTab(DataSource::Excel));
    state.apply(Action::SearchCompleted {
        token,
        source: DataSource::Internal,
        result: result_of(vec![record(json!({"t": "tarde"}))]),
    });

    assert!(state.results.is_idle());
    assert!(!state.is_busy());
}

#[test]
fn test_empty_query_invalidates_in_flight_search() {
    let mut state = state();
    search(&mut state, "torque", DataSource::Internal);
    let token = state.latest_search_token();
    search(&mut state, "  ", DataSource::Internal);

    state.apply(Action::SearchRejected {
        token,
        message: "tarde".to_string(),
    });
    assert!(state.results.is_idle());
}

#[test]
fn test_configured_schema_is_used_for_its_source() {
    let schemas = SchemasConfig {
        internal: None,
        excel: Some(CardSchema {
            title: Some("nombre".to_string()),
            ..Default::default()
        }),
    };
    let mut state = AppState::new(ThemeMode::Dark, schemas);
    search(&mut state, "x", DataSource::Excel);

    state.apply(Action::SearchCompleted {
        token: state.latest_search_token(),
        source: DataSource::Excel,
        result: result_of(vec![record(json!({"codigo": "A-1", "nombre": "Informe"}))]),
    });
    assert_eq!(state.results.cards()[0].title, "Informe");
}

#[test]
fn test_flip_card_toggles_only_that_card() {
    let mut state = state();
    search(&mut state, "x", DataSource::Internal);
    state.apply(Action::SearchCompleted {
        token: state.latest_search_token(),
        source: DataSource::Internal,
        result: result_of(vec![record(json!({"t": "a"})), record(json!({"t": "b"}))]),
    });

    state.apply(Action::FlipCard(1));
    let flipped: Vec<bool> = state.results.cards().iter().map(|c| c.flipped).collect();
    assert_eq!(flipped, vec![false, true]);

    // Out of range is ignored
    state.apply(Action::FlipCard(7));
    state.apply(Action::FlipCard(1));
    assert!(state.results.cards().iter().all(|c| !c.flipped));
}

#[test]
fn test_upload_success_switches_to_excel() {
    let mut state = state();
    let effects = state.apply(Action::UploadFile(PathBuf::from("/tmp/plan.xlsx")));
    assert_eq!(
        effects,
        vec![Effect::Upload {
            path: PathBuf::from("/tmp/plan.xlsx")
        }]
    );
    assert!(state.is_busy());

    let effects = state.apply(Action::UploadAccepted {
        filename: Some("plan.xlsx".to_string()),
        records: Some(42),
    });
    assert_eq!(effects, vec![Effect::ResetFilePicker, Effect::RefreshStatus]);
    assert_eq!(state.active_tab(), DataSource::Excel);
    assert!(!state.is_busy());
}

#[test]
fn test_scenario_e_upload_error_alerts_and_keeps_tab() {
    let mut state = state();
    state.apply(Action::UploadFile(PathBuf::from("malo.txt")));

    let effects = state.apply(Action::UploadRejected("formato inválido".to_string()));
    assert_eq!(state.active_tab(), DataSource::Internal);
    assert!(!state.is_busy());
    assert_eq!(effects.len(), 2);
    match &effects[0] {
        Effect::ShowAlert(message) => assert!(message.contains("formato inválido")),
        other => panic!("expected alert, got {:?}", other),
    }
    assert_eq!(effects[1], Effect::ResetFilePicker);
}

#[test]
fn test_declined_upload_resets_picker_silently() {
    let mut state = state();
    state.apply(Action::UploadFile(PathBuf::from("plan.xlsx")));

    let effects = state.apply(Action::UploadDeclined);
    assert_eq!(effects, vec![Effect::ResetFilePicker]);
    assert_eq!(state.active_tab(), DataSource::Internal);
    assert!(!state.is_busy());
}

#[test]
fn test_upload_without_file_is_a_no_op() {
    let mut state = state();
    assert!(state.apply(Action::UploadFile(PathBuf::new())).is_empty());
    assert!(!state.is_busy());
}

#[test]
fn test_clear_switches_to_internal_on_any_reply() {
    let mut state = state();
    state.apply(Action::SwitchTab(DataSource::Excel));

    assert_eq!(state.apply(Action::ClearDataset), vec![Effect::Clear]);
    assert!(state.is_busy());

    let effects = state.apply(Action::ClearCompleted);
    assert_eq!(effects, vec![Effect::RefreshStatus]);
    assert_eq!(state.active_tab(), DataSource::Internal);
    assert!(!state.is_busy());
}

#[test]
fn test_clear_failure_alerts_and_keeps_tab() {
    let mut state = state();
    state.apply(Action::SwitchTab(DataSource::Excel));
    state.apply(Action::ClearDataset);

    let effects = state.apply(Action::ClearFailed("connection reset".to_string()));
    assert_eq!(effects, vec![Effect::ShowAlert("Error al limpiar los datos.".to_string())]);
    assert_eq!(state.active_tab(), DataSource::Excel);
    assert!(!state.is_busy());
}

#[test]
fn test_busy_counts_overlapping_requests() {
    let mut state = state();
    state.apply(Action::ClearDataset);
    search(&mut state, "x", DataSource::Internal);
    assert!(state.is_busy());

    state.apply(Action::ClearCompleted);
    // The clear's tab switch made the search stale, its reply still releases
    assert!(state.is_busy());
    state.apply(Action::SearchFailed {
        token: 1,
        error: "late".to_string(),
    });
    assert!(!state.is_busy());
}
