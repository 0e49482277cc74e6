use summarizer_core::{
    sample_companies, update, AppState, CompanyRecord, CompanyStatus, Msg, StatusCounts, StatusIcon,
};

fn record(status: CompanyStatus) -> CompanyRecord {
    CompanyRecord {
        status,
        ..CompanyRecord::pending("Acme", "https://acme.test", "Test")
    }
}

#[test]
fn counts_always_add_up_to_total() {
    let statuses = [
        CompanyStatus::Pending,
        CompanyStatus::Processing,
        CompanyStatus::Completed,
    ];
    for len in 0..7 {
        let records: Vec<_> = (0..len).map(|i| record(statuses[i % 3])).collect();
        let counts = StatusCounts::from_records(&records);

        assert_eq!(counts.total, len);
        assert_eq!(
            counts.total,
            counts.completed + counts.processing + counts.pending
        );
    }
}

#[test]
fn counts_follow_the_list_after_every_change() {
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::CompaniesLoaded(vec![
            record(CompanyStatus::Completed),
            record(CompanyStatus::Processing),
            record(CompanyStatus::Pending),
            record(CompanyStatus::Pending),
        ]),
    );
    let counts = state.view().counts;

    assert_eq!(
        counts,
        StatusCounts {
            total: 4,
            completed: 1,
            processing: 1,
            pending: 2,
        }
    );
}

#[test]
fn sample_set_starts_partially_completed() {
    let companies = sample_companies();
    let counts = StatusCounts::from_records(&companies);

    assert_eq!(counts.total, 10);
    assert_eq!(counts.completed, 2);
    assert_eq!(counts.pending, 8);
    assert_eq!(companies[0].name, "Apple Inc.");
    assert!(companies[0].is_completed());
    assert!(!companies[0].summary.is_empty());
    for company in companies.iter().filter(|c| !c.is_completed()) {
        assert!(company.summary.is_empty());
    }
}

#[test]
fn rows_map_status_to_icon_and_link_only_http_urls() {
    let records = vec![
        record(CompanyStatus::Completed),
        CompanyRecord {
            website: "javascript:alert(1)".to_string(),
            ..record(CompanyStatus::Processing)
        },
        CompanyRecord {
            website: String::new(),
            ..record(CompanyStatus::Pending)
        },
    ];
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(state, Msg::CompaniesLoaded(records));
    let rows = state.view().rows;

    assert_eq!(rows[0].icon, StatusIcon::Check);
    assert_eq!(rows[0].website_href.as_deref(), Some("https://acme.test"));
    assert_eq!(rows[1].icon, StatusIcon::Spinner);
    assert_eq!(rows[1].website_href, None);
    assert_eq!(rows[2].icon, StatusIcon::Idle);
    assert_eq!(rows[2].website_href, None);
}

#[test]
fn records_decode_with_missing_fields() {
    let records: Vec<CompanyRecord> = serde_json::from_str(
        r#"[{"name":"Tesla Inc.","website":"https://www.tesla.com","source":null,"status":"completed"},
            {"name":"Zoom"}]"#,
    )
    .unwrap();

    assert_eq!(records[0].source, "");
    assert_eq!(records[0].summary, "");
    assert_eq!(records[0].status, CompanyStatus::Completed);
    assert_eq!(records[1].status, CompanyStatus::Pending);
    assert_eq!(records[1].website, "");
}

#[test]
fn unknown_or_null_status_decodes_as_pending_with_idle_icon() {
    let records: Vec<CompanyRecord> = serde_json::from_str(
        r#"[{"name":"Netflix Inc.","status":"failed"},{"name":"Zoom","status":null}]"#,
    )
    .unwrap();
    assert_eq!(records[0].status, CompanyStatus::Pending);
    assert_eq!(records[1].status, CompanyStatus::Pending);

    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(state, Msg::CompaniesLoaded(records));
    let view = state.view();
    assert!(view.rows.iter().all(|row| row.icon == StatusIcon::Idle));
    assert_eq!(view.counts.pending, 2);
}
